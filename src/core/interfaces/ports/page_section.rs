use anyhow::Result;

pub trait PageSection: Send + Sync {
    /// Replaces everything inside the section.
    fn set_inner_html(&self, html: &str) -> Result<()>;
}
