//! Read-only query engine over the quote catalog.
//!
//! Operations never mutate the catalog. Those that need randomness take the
//! generator as an argument, so the store itself holds no hidden state and can
//! be shared across threads behind an `Arc` without locking.

pub mod query;
mod view;

use rand::{seq::IteratorRandom, Rng};

use crate::catalog::Catalog;
use crate::types::{CategorySummary, QuoteError, QuoteRecord};

pub use view::QuoteView;

#[derive(Clone, Debug, Default)]
pub struct QuoteStore {
    catalog: Catalog,
}

impl QuoteStore {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn list_all(&self) -> &[QuoteRecord] {
        self.catalog.quotes()
    }

    /// A view over the whole catalog, ready for further narrowing.
    pub fn view(&self) -> QuoteView {
        QuoteView::new(self.list_all().to_vec())
    }

    pub fn list_by_category(&self, category: &str) -> Vec<QuoteRecord> {
        match self.catalog.group(category) {
            Some(group) => self.catalog.members(group).cloned().collect(),
            None => Vec::new(),
        }
    }

    pub fn get_by_id(&self, id: i64) -> Result<&QuoteRecord, QuoteError> {
        let key = u64::try_from(id)
            .ok()
            .filter(|&id| id > 0)
            .ok_or_else(|| QuoteError::InvalidArgument(format!("quote id must be positive, got {}", id)))?;
        self.catalog
            .get(key)
            .ok_or_else(|| QuoteError::NotFound(format!("quote with id {}", id)))
    }

    pub fn search(&self, term: &str) -> Vec<QuoteRecord> {
        query::search(self.list_all(), term)
    }

    pub fn random_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&QuoteRecord, QuoteError> {
        query::pick_one(self.list_all(), rng).ok_or(QuoteError::EmptyCatalog)
    }

    pub fn random_n<R: Rng + ?Sized>(&self, n: i64, rng: &mut R) -> Vec<QuoteRecord> {
        query::sample(self.list_all(), n, rng)
    }

    /// One random quote from each category, in category discovery order.
    pub fn random_one_per_category<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<QuoteRecord> {
        self.catalog
            .groups()
            .iter()
            .filter_map(|group| self.catalog.members(group).choose(rng).cloned())
            .collect()
    }

    pub fn shuffle<R: Rng + ?Sized>(&self, records: &[QuoteRecord], rng: &mut R) -> Vec<QuoteRecord> {
        query::shuffle(records, rng)
    }

    /// Category counts in order of first occurrence.
    pub fn list_categories(&self) -> Vec<CategorySummary> {
        self.catalog
            .groups()
            .iter()
            .map(|group| CategorySummary::new(group.name(), group.len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSource;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn small_store() -> QuoteStore {
        let catalog = Catalog::from_records(vec![
            QuoteRecord::new(1, "Be yourself.", "Oscar Wilde", Some("wisdom")),
            QuoteRecord::new(2, "Know thyself.", "Socrates", Some("wisdom")),
            QuoteRecord::new(3, "Life happens.", "John Lennon", Some("life")),
        ])
        .unwrap();
        QuoteStore::new(catalog)
    }

    fn embedded_store() -> QuoteStore {
        QuoteStore::new(CatalogSource::Embedded.load().unwrap())
    }

    fn ids(records: &[QuoteRecord]) -> Vec<u64> {
        records.iter().map(|q| q.id).collect()
    }

    #[test]
    fn list_all_preserves_insertion_order() {
        assert_eq!(ids(small_store().list_all()), vec![1, 2, 3]);
        assert_eq!(ids(embedded_store().list_all()), (1..=25).collect::<Vec<u64>>());
    }

    #[test]
    fn list_categories_counts_by_first_occurrence() {
        let store = small_store();
        assert_eq!(
            store.list_categories(),
            vec![CategorySummary::new("wisdom", 2), CategorySummary::new("life", 1)]
        );
    }

    #[test]
    fn category_counts_match_listings() {
        let store = embedded_store();
        let summaries = store.list_categories();
        let total: usize = summaries.iter().map(|s| s.count).sum();
        assert_eq!(total, store.list_all().len());
        for summary in summaries {
            assert_eq!(summary.count, store.list_by_category(&summary.name).len());
        }
    }

    #[test]
    fn list_by_category_matches_case_insensitively() {
        let store = small_store();
        assert_eq!(ids(&store.list_by_category("life")), vec![3]);
        assert_eq!(ids(&store.list_by_category("WISDOM")), vec![1, 2]);
        assert!(store.list_by_category("humor").is_empty());
    }

    #[test]
    fn get_by_id_finds_known_ids() {
        let store = embedded_store();
        for quote in store.list_all() {
            let found = store.get_by_id(quote.id as i64).unwrap();
            assert_eq!(found, quote);
        }
    }

    #[test]
    fn largest_loadable_id_is_reachable_by_lookup() {
        use crate::catalog::CatalogError;
        use crate::types::parse_quote_id;

        let largest = i64::MAX as u64;
        let catalog =
            Catalog::from_records(vec![QuoteRecord::new(largest, "edge", "someone", None)]).unwrap();
        let store = QuoteStore::new(catalog);
        let id = parse_quote_id(&largest.to_string()).unwrap();
        assert_eq!(store.get_by_id(id).unwrap().id, largest);

        let beyond = QuoteRecord::new(largest + 1, "edge", "someone", None);
        assert!(matches!(
            Catalog::from_records(vec![beyond]),
            Err(CatalogError::IdOutOfRange(_))
        ));
    }

    #[test]
    fn get_by_id_distinguishes_not_found_from_invalid() {
        let store = small_store();
        assert!(matches!(store.get_by_id(99), Err(QuoteError::NotFound(_))));
        assert!(matches!(store.get_by_id(0), Err(QuoteError::InvalidArgument(_))));
        assert!(matches!(store.get_by_id(-1), Err(QuoteError::InvalidArgument(_))));
    }

    #[test]
    fn search_empty_equals_list_all() {
        let store = embedded_store();
        assert_eq!(store.search(""), store.list_all().to_vec());
    }

    #[test]
    fn search_ignores_case() {
        let store = embedded_store();
        assert_eq!(store.search("EINSTEIN"), store.search("einstein"));
        assert_eq!(ids(&store.search("einstein")), vec![4, 21]);
    }

    #[test]
    fn random_one_on_empty_catalog_fails() {
        let store = QuoteStore::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(store.random_one(&mut rng), Err(QuoteError::EmptyCatalog));
    }

    #[test]
    fn random_one_returns_a_catalog_member() {
        let store = embedded_store();
        let mut rng = StdRng::seed_from_u64(1);
        let quote = store.random_one(&mut rng).unwrap();
        assert!(store.list_all().contains(quote));
    }

    #[test]
    fn random_one_is_reproducible_with_a_seed() {
        let store = embedded_store();
        let a = store.random_one(&mut StdRng::seed_from_u64(99)).unwrap().id;
        let b = store.random_one(&mut StdRng::seed_from_u64(99)).unwrap().id;
        assert_eq!(a, b);
    }

    #[test]
    fn random_n_beyond_catalog_is_a_permutation() {
        let store = small_store();
        let mut rng = StdRng::seed_from_u64(2);
        let picked = store.random_n(5, &mut rng);
        assert_eq!(picked.len(), 3);
        let mut sorted = ids(&picked);
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3]);
    }

    #[test]
    fn random_n_never_repeats() {
        let store = embedded_store();
        let mut rng = StdRng::seed_from_u64(4);
        for n in 0..=25 {
            let picked = store.random_n(n, &mut rng);
            assert_eq!(picked.len(), n as usize);
            let unique: HashSet<u64> = picked.iter().map(|q| q.id).collect();
            assert_eq!(unique.len(), picked.len());
        }
        assert!(store.random_n(0, &mut rng).is_empty());
    }

    #[test]
    fn random_one_per_category_covers_each_category_once() {
        let store = embedded_store();
        let mut rng = StdRng::seed_from_u64(8);
        let picked = store.random_one_per_category(&mut rng);
        let categories: Vec<&str> = picked.iter().filter_map(|q| q.category.as_deref()).collect();
        assert_eq!(categories, vec!["wisdom", "inspiration", "success", "life", "humor"]);
    }

    #[test]
    fn random_one_per_category_returns_singleton_members() {
        let store = small_store();
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..10 {
            let picked = store.random_one_per_category(&mut rng);
            assert_eq!(picked.len(), 2);
            assert_eq!(picked[0].category.as_deref(), Some("wisdom"));
            assert_eq!(picked[1].id, 3);
        }
    }

    #[test]
    fn shuffle_does_not_touch_the_catalog() {
        let store = small_store();
        let mut rng = StdRng::seed_from_u64(6);
        let shuffled = store.shuffle(store.list_all(), &mut rng);
        let mut sorted = ids(&shuffled);
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(ids(store.list_all()), vec![1, 2, 3]);
    }
}
