use rand::Rng;

use super::query;
use crate::types::QuoteRecord;

/// An immutable "current view" over a set of quotes.
///
/// Each step consumes the view and returns a new one, so a presentation layer
/// can describe what it shows as a chain of queries rather than keeping
/// filtered copies around.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteView {
    quotes: Vec<QuoteRecord>,
}

impl QuoteView {
    pub fn new(quotes: Vec<QuoteRecord>) -> Self {
        Self { quotes }
    }

    pub fn quotes(&self) -> &[QuoteRecord] {
        &self.quotes
    }

    pub fn into_quotes(self) -> Vec<QuoteRecord> {
        self.quotes
    }

    pub fn in_category(self, category: &str) -> Self {
        Self::new(query::by_category(&self.quotes, category))
    }

    pub fn by_author(self, author: &str) -> Self {
        Self::new(query::by_author(&self.quotes, author))
    }

    pub fn search(self, term: &str) -> Self {
        Self::new(query::search(&self.quotes, term))
    }

    pub fn shuffled<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        Self::new(query::shuffle(&self.quotes, rng))
    }

    pub fn sample<R: Rng + ?Sized>(self, n: i64, rng: &mut R) -> Self {
        Self::new(query::sample(&self.quotes, n, rng))
    }

    /// Narrows the view to a single random quote; an empty view stays empty.
    pub fn pick_one<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        Self::new(query::pick_one(&self.quotes, rng).cloned().into_iter().collect())
    }

    pub fn limit(self, n: usize) -> Self {
        Self::new(query::limit(&self.quotes, n))
    }
}
