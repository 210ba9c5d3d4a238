use serde::{Deserialize, Serialize};

use super::QuoteError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub id: u64,
    #[serde(rename = "quote", alias = "text")]
    pub text: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl QuoteRecord {
    pub fn new(id: u64, text: &str, author: &str, category: Option<&str>) -> Self {
        Self {
            id,
            text: text.to_string(),
            author: author.to_string(),
            category: category.map(str::to_string),
        }
    }

    /// Case-insensitive exact match on the category label.
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.to_lowercase() == category.to_lowercase())
    }

    /// `needle` must already be case-folded.
    pub fn matches(&self, needle: &str) -> bool {
        self.text.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(needle))
    }
}

/// Parses a textual quote id as received from a URL or command line.
pub fn parse_quote_id(raw: &str) -> Result<i64, QuoteError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QuoteError::InvalidArgument("quote id is empty".to_string()));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| QuoteError::InvalidArgument(format!("quote id is not an integer: {}", raw)))
}
