use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of the search header resource. Only `query` is required; the rest is
/// kept so the whole document can be logged.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryDocument {
    pub query: Value,
    #[serde(flatten)]
    pub remaining_fields: Map<String, Value>,
}

impl QueryDocument {
    pub fn query_as_text(&self) -> String {
        match &self.query {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}
