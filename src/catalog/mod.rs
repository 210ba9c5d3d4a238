//! Immutable quote catalog.
//!
//! The catalog keeps two views of the same records: the flattened sequence in
//! insertion order, and the category groups in order of first occurrence.
//! Groups hold indices into the flattened sequence so the two cannot drift.

mod catalog_error;
mod embedded;
mod source;

use std::collections::HashMap;

use crate::types::QuoteRecord;

pub use catalog_error::CatalogError;
pub use embedded::embedded_groups;
pub use source::CatalogSource;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryGroup {
    name: String,
    members: Vec<usize>,
}

impl CategoryGroup {
    /// Spelling of the first record seen with this category.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    quotes: Vec<QuoteRecord>,
    groups: Vec<CategoryGroup>,
    by_key: HashMap<String, usize>,
    by_id: HashMap<u64, usize>,
}

impl Catalog {
    pub fn from_records(quotes: Vec<QuoteRecord>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(quotes.len());
        let mut groups: Vec<CategoryGroup> = Vec::new();
        let mut by_key: HashMap<String, usize> = HashMap::new();

        for (index, quote) in quotes.iter().enumerate() {
            validate(quote)?;
            if by_id.insert(quote.id, index).is_some() {
                return Err(CatalogError::DuplicateId(quote.id));
            }

            let Some(category) = quote.category.as_deref() else {
                continue;
            };
            let key = category.to_lowercase();
            let slot = *by_key.entry(key).or_insert_with(|| {
                groups.push(CategoryGroup {
                    name: category.to_string(),
                    members: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].members.push(index);
        }

        Ok(Self {
            quotes,
            groups,
            by_key,
            by_id,
        })
    }

    /// Builds a catalog from records filed under category keys. Records
    /// without a category inherit the key they are filed under.
    pub fn from_groups(groups: Vec<(String, Vec<QuoteRecord>)>) -> Result<Self, CatalogError> {
        let mut quotes = Vec::new();
        for (group, records) in groups {
            for mut quote in records {
                match quote.category.as_deref() {
                    None => quote.category = Some(group.clone()),
                    Some(category) if category.to_lowercase() == group.to_lowercase() => {}
                    Some(category) => {
                        return Err(CatalogError::CategoryMismatch {
                            id: quote.id,
                            group,
                            category: category.to_string(),
                        })
                    }
                }
                quotes.push(quote);
            }
        }
        Self::from_records(quotes)
    }

    pub fn quotes(&self) -> &[QuoteRecord] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&QuoteRecord> {
        self.by_id.get(&id).map(|&index| &self.quotes[index])
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Case-insensitive lookup of a category group.
    pub fn group(&self, category: &str) -> Option<&CategoryGroup> {
        self.by_key
            .get(&category.to_lowercase())
            .map(|&slot| &self.groups[slot])
    }

    pub fn members<'a>(
        &'a self,
        group: &'a CategoryGroup,
    ) -> impl Iterator<Item = &'a QuoteRecord> + 'a {
        group.members.iter().map(move |&index| &self.quotes[index])
    }
}

fn validate(quote: &QuoteRecord) -> Result<(), CatalogError> {
    if quote.id == 0 {
        return Err(CatalogError::ZeroId);
    }
    if i64::try_from(quote.id).is_err() {
        return Err(CatalogError::IdOutOfRange(quote.id));
    }
    if quote.text.trim().is_empty() {
        return Err(CatalogError::EmptyText(quote.id));
    }
    if quote.author.trim().is_empty() {
        return Err(CatalogError::EmptyAuthor(quote.id));
    }
    if quote.category.as_deref().is_some_and(|c| c.trim().is_empty()) {
        return Err(CatalogError::BlankCategory(quote.id));
    }
    Ok(())
}
