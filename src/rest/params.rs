use serde::Deserialize;

use crate::store::{QuoteStore, QuoteView};
use crate::types::{parse_quote_id, QuoteError, QuoteRecord};

/// Query string accepted by the quote endpoints. Values are kept as raw
/// strings so malformed input can be reported as an invalid argument.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteParams {
    pub id: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub q: Option<String>,
    pub shuffle: Option<String>,
    pub random: Option<String>,
    pub count: Option<String>,
    pub limit: Option<String>,
}

impl QuoteParams {
    pub fn count(&self) -> Result<Option<usize>, QuoteError> {
        present(&self.count)
            .map(|raw| parse_non_negative("count", raw))
            .transpose()
    }

    pub fn limit(&self) -> Result<Option<usize>, QuoteError> {
        present(&self.limit)
            .map(|raw| parse_non_negative("limit", raw))
            .transpose()
    }

    pub fn random(&self) -> Result<bool, QuoteError> {
        parse_flag("random", &self.random)
    }

    pub fn shuffle(&self) -> Result<bool, QuoteError> {
        parse_flag("shuffle", &self.shuffle)
    }
}

/// Runs the combined `/api/quotes` query.
///
/// Steps apply in a fixed order: id, category, author, free text, shuffle,
/// random, count, limit. Without an explicit limit the configured default applies.
pub fn run_query<R: rand::Rng + ?Sized>(
    store: &QuoteStore,
    params: &QuoteParams,
    default_limit: Option<usize>,
    rng: &mut R,
) -> Result<Vec<QuoteRecord>, QuoteError> {
    let mut view = match present(&params.id) {
        Some(raw) => {
            let id = parse_quote_id(raw)?;
            QuoteView::new(vec![store.get_by_id(id)?.clone()])
        }
        None => store.view(),
    };

    if let Some(category) = present(&params.category) {
        view = view.in_category(category);
    }
    if let Some(author) = present(&params.author) {
        view = view.by_author(author);
    }
    if let Some(term) = present(&params.q) {
        view = view.search(term);
    }
    if params.shuffle()? {
        view = view.shuffled(rng);
    }
    if params.random()? {
        view = view.pick_one(rng);
    }
    if let Some(count) = params.count()? {
        view = view.sample(to_i64(count), rng);
    }
    if let Some(limit) = params.limit()?.or(default_limit) {
        view = view.limit(limit);
    }

    Ok(view.into_quotes())
}

pub fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Blank values count as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_flag(name: &str, value: &Option<String>) -> Result<bool, QuoteError> {
    match present(value).map(str::to_lowercase).as_deref() {
        None | Some("false") | Some("0") | Some("no") => Ok(false),
        Some("true") | Some("1") | Some("yes") => Ok(true),
        Some(other) => Err(QuoteError::InvalidArgument(format!(
            "{} must be true or false, got {}",
            name, other
        ))),
    }
}

fn parse_non_negative(name: &str, raw: &str) -> Result<usize, QuoteError> {
    raw.parse::<usize>().map_err(|_| {
        QuoteError::InvalidArgument(format!("{} must be a non-negative integer, got {}", name, raw))
    })
}
