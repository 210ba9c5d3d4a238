use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("quote id must be positive")]
    ZeroId,
    #[error("quote id {0} is larger than the largest supported id")]
    IdOutOfRange(u64),
    #[error("duplicate quote id {0}")]
    DuplicateId(u64),
    #[error("quote {0} has empty text")]
    EmptyText(u64),
    #[error("quote {0} has empty author")]
    EmptyAuthor(u64),
    #[error("quote {0} has a blank category")]
    BlankCategory(u64),
    #[error("quote {id} is filed under {group} but carries category {category}")]
    CategoryMismatch {
        id: u64,
        group: String,
        category: String,
    },
    #[error("reading catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing catalog: {0}")]
    Json(#[from] serde_json::Error),
}
