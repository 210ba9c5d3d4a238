use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("catalog is empty")]
    EmptyCatalog,
}

impl QuoteError {
    /// Stable machine-readable name used in error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            QuoteError::InvalidArgument(_) => "invalid_argument",
            QuoteError::NotFound(_) => "not_found",
            QuoteError::EmptyCatalog => "empty_catalog",
        }
    }
}
