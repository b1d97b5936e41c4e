use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::ImageResult;

#[async_trait]
pub trait ImageSearchProvider: Send + Sync {
    /// Returns the first matching photo, or `None` when the search came back empty.
    async fn search_images(&self, keyword: &str) -> Result<Option<ImageResult>>;
}
