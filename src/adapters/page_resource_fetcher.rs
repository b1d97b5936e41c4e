use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

use crate::core::interfaces::adapters::ResourceFetcher;
use crate::global_constants::LOG_TAG_FETCHER;

/// Fetches absolute `http(s)` URLs over the network and everything else from
/// disk, relative to the page's base directory.
pub struct PageResourceFetcher {
    http_client: reqwest::Client,
    base_directory: PathBuf,
}

impl PageResourceFetcher {
    pub fn new(http_client: reqwest::Client, base_directory: PathBuf) -> Self {
        Self {
            http_client,
            base_directory,
        }
    }

    fn is_remote_location(location: &str) -> bool {
        location.starts_with("http://") || location.starts_with("https://")
    }

    async fn fetch_remote(&self, url: &str) -> Result<String> {
        log::debug!("{} GET {}", LOG_TAG_FETCHER, url);

        let response = self.http_client.get(url).send().await?;
        log::debug!("{} Response status: {}", LOG_TAG_FETCHER, response.status());

        Ok(response.text().await?)
    }

    async fn read_local(&self, location: &str) -> Result<String> {
        let resource_path = self.base_directory.join(location);
        log::debug!("{} Reading {:?}", LOG_TAG_FETCHER, resource_path);

        tokio::fs::read_to_string(&resource_path)
            .await
            .with_context(|| format!("Failed to read {}", resource_path.display()))
    }
}

#[async_trait]
impl ResourceFetcher for PageResourceFetcher {
    async fn get(&self, location: &str) -> Result<String> {
        if Self::is_remote_location(location) {
            self.fetch_remote(location).await
        } else {
            self.read_local(location).await
        }
    }
}
