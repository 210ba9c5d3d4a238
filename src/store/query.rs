//! Slice-level query operations.
//!
//! Every function takes a sequence of quotes and returns a new one, so the
//! results of one call can be fed straight into the next.

use rand::{seq::SliceRandom, Rng};

use crate::types::QuoteRecord;

/// Case-insensitive exact match on category. Unknown categories yield nothing.
pub fn by_category(records: &[QuoteRecord], category: &str) -> Vec<QuoteRecord> {
    records
        .iter()
        .filter(|q| q.in_category(category))
        .cloned()
        .collect()
}

/// Case-insensitive substring match on author only.
pub fn by_author(records: &[QuoteRecord], author: &str) -> Vec<QuoteRecord> {
    let needle = author.trim().to_lowercase();
    records
        .iter()
        .filter(|q| q.author.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Substring match over text, author and category. An empty term matches all.
pub fn search(records: &[QuoteRecord], term: &str) -> Vec<QuoteRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|q| q.matches(&needle))
        .cloned()
        .collect()
}

/// Unbiased Fisher-Yates permutation of a copy of `records`.
pub fn shuffle<R: Rng + ?Sized>(records: &[QuoteRecord], rng: &mut R) -> Vec<QuoteRecord> {
    let mut shuffled = records.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Draws `min(n, len)` distinct records in random order. `n <= 0` yields nothing.
pub fn sample<R: Rng + ?Sized>(records: &[QuoteRecord], n: i64, rng: &mut R) -> Vec<QuoteRecord> {
    if n <= 0 {
        return Vec::new();
    }
    let amount = usize::try_from(n).unwrap_or(usize::MAX).min(records.len());
    let mut pool = records.to_vec();
    let (picked, _) = pool.partial_shuffle(rng, amount);
    picked.to_vec()
}

pub fn pick_one<'a, R: Rng + ?Sized>(
    records: &'a [QuoteRecord],
    rng: &mut R,
) -> Option<&'a QuoteRecord> {
    records.choose(rng)
}

pub fn limit(records: &[QuoteRecord], n: usize) -> Vec<QuoteRecord> {
    records.iter().take(n).cloned().collect()
}
