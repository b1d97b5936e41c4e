use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;

use crate::core::interfaces::adapters::ResourceFetcher;
use crate::core::interfaces::ports::PageSection;
use crate::core::models::QueryDocument;
use crate::global_constants::{LOG_TAG_QUIZ, UNKNOWN_QUERY_HEADER};
use crate::presentation::render_search_header;

/// Loads a search results document and shows its `query` as the page header,
/// falling back to `unknown` when the request fails.
pub struct SearchHeaderQuiz {
    resource_fetcher: Arc<dyn ResourceFetcher>,
    home_section: Arc<dyn PageSection>,
}

impl SearchHeaderQuiz {
    pub fn build(
        resource_fetcher: Arc<dyn ResourceFetcher>,
        home_section: Arc<dyn PageSection>,
    ) -> Self {
        Self {
            resource_fetcher,
            home_section,
        }
    }

    pub async fn get(&self, location: &str) -> Result<String> {
        self.resource_fetcher.get(location).await
    }

    pub async fn get_json(&self, location: &str) -> Result<QueryDocument> {
        let body = self.get(location).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn load_search_header(&self, location: &str) {
        match self.get_json(location).await {
            Ok(document) => {
                log::debug!(
                    "{} Loaded document with {} other fields: {:?}",
                    LOG_TAG_QUIZ,
                    document.remaining_fields.len(),
                    document
                );
                self.add_search_header(&document.query_as_text());
            }
            Err(error) => {
                log::error!(
                    "{} Failed to load {}: {:#}",
                    LOG_TAG_QUIZ,
                    location,
                    error
                );
                self.add_search_header(UNKNOWN_QUERY_HEADER);
            }
        }
    }

    pub fn add_search_header(&self, response: &str) {
        let header_value = resolve_header_value(response);
        log::info!("{} Showing header for '{}'", LOG_TAG_QUIZ, header_value);

        if let Err(error) = self
            .home_section
            .set_inner_html(&render_search_header(&header_value))
        {
            log::warn!("{} Failed to render header: {}", LOG_TAG_QUIZ, error);
        }
    }
}

/// Unwraps a still-serialized `{"query": ...}` document; anything that is not
/// one is shown as given.
fn resolve_header_value(response: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<Value>(response) else {
        return response.to_string();
    };

    match parsed.get("query") {
        Some(Value::String(query)) => query.clone(),
        Some(other) => other.to_string(),
        None => response.to_string(),
    }
}
