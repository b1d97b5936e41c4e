use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::core::interfaces::adapters::ImageSearchProvider;
use crate::core::models::ImageResult;
use crate::global_constants::LOG_TAG_UNSPLASH;

#[derive(Debug, Deserialize)]
struct UnsplashSearchResponse {
    #[serde(default)]
    results: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct UnsplashPhoto {
    urls: UnsplashPhotoUrls,
    user: UnsplashUser,
}

#[derive(Debug, Deserialize)]
struct UnsplashPhotoUrls {
    regular: String,
}

#[derive(Debug, Deserialize)]
struct UnsplashUser {
    name: String,
    links: UnsplashUserLinks,
}

#[derive(Debug, Deserialize)]
struct UnsplashUserLinks {
    html: String,
}

pub struct UnsplashImageSearchProvider {
    http_client: reqwest::Client,
    search_base_url: String,
    app_id: String,
}

impl UnsplashImageSearchProvider {
    pub fn new(http_client: reqwest::Client, search_base_url: String, app_id: String) -> Self {
        Self {
            http_client,
            search_base_url,
            app_id,
        }
    }

    fn construct_search_url(&self, keyword: &str) -> String {
        format!(
            "{}?page=1&query={}",
            self.search_base_url,
            urlencoding::encode(keyword)
        )
    }

    fn extract_first_image(body: &str) -> Result<Option<ImageResult>> {
        // A JSON `null` body is treated like an empty search.
        let parsed: Option<UnsplashSearchResponse> = serde_json::from_str(body)?;

        // Only the first entry is rendered, so only the first entry is decoded.
        let first_entry = parsed
            .and_then(|response| response.results)
            .and_then(|results| results.into_iter().next());

        let Some(first_entry) = first_entry.filter(|entry| !entry.is_null()) else {
            return Ok(None);
        };

        let photo: UnsplashPhoto = serde_json::from_value(first_entry)?;
        Ok(Some(ImageResult::new(
            photo.urls.regular,
            photo.user.name,
            photo.user.links.html,
        )))
    }
}

#[async_trait]
impl ImageSearchProvider for UnsplashImageSearchProvider {
    async fn search_images(&self, keyword: &str) -> Result<Option<ImageResult>> {
        let search_url = self.construct_search_url(keyword);
        log::debug!("{} Search URL: {}", LOG_TAG_UNSPLASH, search_url);

        let response = self
            .http_client
            .get(&search_url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Client-ID {}", self.app_id),
            )
            .send()
            .await?;

        log::debug!("{} Response status: {}", LOG_TAG_UNSPLASH, response.status());

        let body = response.text().await?;
        let image = Self::extract_first_image(&body)?;

        match &image {
            Some(found) => log::info!(
                "{} Found image for '{}' by {}",
                LOG_TAG_UNSPLASH,
                keyword,
                found.photographer_name
            ),
            None => log::info!("{} No images for '{}'", LOG_TAG_UNSPLASH, keyword),
        }

        Ok(image)
    }
}
