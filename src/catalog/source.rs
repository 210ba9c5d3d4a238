use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};

use super::{embedded_groups, Catalog, CatalogError};
use crate::types::QuoteRecord;

/// Where the catalog is read from at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    Embedded,
    File(PathBuf),
}

impl CatalogSource {
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        match self {
            CatalogSource::Embedded => Catalog::from_groups(embedded_groups()),
            CatalogSource::File(path) => load_file(path),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Embedded => write!(f, "embedded"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn load_file(path: &Path) -> Result<Catalog, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&raw)
}

/// Parses either a flat JSON array of quotes or an object keyed by category.
///
/// The shape is chosen from the first token so that a bad record reports its
/// own field and position.
pub fn parse_catalog(raw: &str) -> Result<Catalog, CatalogError> {
    if raw.trim_start().starts_with('[') {
        let quotes: Vec<QuoteRecord> = serde_json::from_str(raw)?;
        Catalog::from_records(quotes)
    } else {
        let Grouped(groups) = serde_json::from_str(raw)?;
        Catalog::from_groups(groups)
    }
}

/// Category-keyed object that keeps the keys in document order.
struct Grouped(Vec<(String, Vec<QuoteRecord>)>);

impl<'de> Deserialize<'de> for Grouped {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupedVisitor;

        impl<'de> Visitor<'de> for GroupedVisitor {
            type Value = Grouped;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping category names to quote arrays")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Grouped, A::Error> {
                let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((category, quotes)) = map.next_entry::<String, Vec<QuoteRecord>>()? {
                    groups.push((category, quotes));
                }
                Ok(Grouped(groups))
            }
        }

        deserializer.deserialize_map(GroupedVisitor)
    }
}
