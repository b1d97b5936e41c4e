use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::ArticleResult;

#[async_trait]
pub trait ArticleSearchProvider: Send + Sync {
    async fn search_articles(&self, keyword: &str) -> Result<Vec<ArticleResult>>;
}
