use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Resolves with the unparsed body at `location`.
    async fn get(&self, location: &str) -> Result<String>;
}
