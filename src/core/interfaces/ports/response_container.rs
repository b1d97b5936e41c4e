use anyhow::Result;

use crate::core::models::InsertPosition;

pub trait ResponseContainer: Send + Sync {
    fn clear(&self) -> Result<()>;
    fn insert_adjacent_html(&self, position: InsertPosition, html: &str) -> Result<()>;
}
