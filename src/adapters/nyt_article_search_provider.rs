use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::core::interfaces::adapters::ArticleSearchProvider;
use crate::core::models::ArticleResult;
use crate::global_constants::{LOG_TAG_NYT, MIN_ARTICLES_FOR_LIST};

#[derive(Debug, Deserialize)]
struct NytSearchResponse {
    #[serde(default)]
    response: Option<NytResponseBody>,
}

#[derive(Debug, Deserialize)]
struct NytResponseBody {
    #[serde(default)]
    docs: Option<Vec<Value>>,
}

pub struct NytArticleSearchProvider {
    http_client: reqwest::Client,
    search_base_url: String,
    api_key: String,
}

impl NytArticleSearchProvider {
    pub fn new(http_client: reqwest::Client, search_base_url: String, api_key: String) -> Self {
        Self {
            http_client,
            search_base_url,
            api_key,
        }
    }

    fn construct_search_url(&self, keyword: &str) -> String {
        format!(
            "{}?q={}&api-key={}",
            self.search_base_url,
            urlencoding::encode(keyword),
            urlencoding::encode(&self.api_key)
        )
    }

    fn extract_articles(body: &str) -> Result<Vec<ArticleResult>> {
        let parsed: NytSearchResponse = serde_json::from_str(body)?;

        let documents = parsed
            .response
            .and_then(|response_body| response_body.docs)
            .unwrap_or_default();

        // Short lists are never rendered, so their documents are not checked.
        let require_headline = documents.len() >= MIN_ARTICLES_FOR_LIST;

        documents
            .iter()
            .map(|document| Self::read_article(document, require_headline))
            .collect()
    }

    fn read_article(document: &Value, require_headline: bool) -> Result<ArticleResult> {
        let headline = document.get("headline").filter(|headline| !headline.is_null());
        if require_headline && headline.is_none() {
            anyhow::bail!("article document without headline: {}", document);
        }

        Ok(ArticleResult::new(
            interpolated_text(headline.and_then(|headline| headline.get("main"))),
            interpolated_text(document.get("snippet")),
            interpolated_text(document.get("web_url")),
        ))
    }
}

/// Text of a field as it appears once spliced into markup: strings verbatim,
/// other JSON values serialized, absent fields as `undefined`.
fn interpolated_text(field: Option<&Value>) -> String {
    match field {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => "undefined".to_string(),
    }
}

#[async_trait]
impl ArticleSearchProvider for NytArticleSearchProvider {
    async fn search_articles(&self, keyword: &str) -> Result<Vec<ArticleResult>> {
        log::debug!(
            "{} Searching articles at {} for '{}'",
            LOG_TAG_NYT,
            self.search_base_url,
            keyword
        );

        let response = self
            .http_client
            .get(self.construct_search_url(keyword))
            .send()
            .await?;

        log::debug!("{} Response status: {}", LOG_TAG_NYT, response.status());

        let body = response.text().await?;
        let articles = Self::extract_articles(&body)?;

        log::info!(
            "{} Received {} articles for '{}'",
            LOG_TAG_NYT,
            articles.len(),
            keyword
        );

        Ok(articles)
    }
}
