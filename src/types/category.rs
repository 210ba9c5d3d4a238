use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
}

impl CategorySummary {
    pub fn new(name: &str, count: usize) -> Self {
        Self {
            name: name.to_string(),
            count,
        }
    }
}
