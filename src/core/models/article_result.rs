#[derive(Debug, Clone, PartialEq)]
pub struct ArticleResult {
    pub title: String,
    pub snippet: String,
    pub url: String,
}

impl ArticleResult {
    pub fn new(title: String, snippet: String, url: String) -> Self {
        Self {
            title,
            snippet,
            url,
        }
    }
}
