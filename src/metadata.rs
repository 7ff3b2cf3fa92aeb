use serde::Serialize;
use serde_json::{Map, Value};

/// Fields of one article's front matter, in the order they were written,
/// plus the derived `slug`.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub(crate) struct ArticleRecord {
    pub fields: Map<String, Value>,
}

impl ArticleRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// `file_name` is expected to end with `.md`.
    pub fn attach_slug(&mut self, file_name: &str) {
        let slug = file_name.strip_suffix(".md").unwrap_or(file_name);
        self.fields
            .insert("slug".to_string(), Value::String(slug.to_string()));
    }

    pub fn slug(&self) -> Option<&str> {
        self.fields.get("slug").and_then(Value::as_str)
    }

    pub fn date(&self) -> Option<&str> {
        self.fields.get("date").and_then(Value::as_str)
    }

    pub fn is_draft(&self) -> bool {
        matches!(self.fields.get("draft"), Some(Value::Bool(true)))
    }
}
