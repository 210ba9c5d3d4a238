mod category;
mod quote;
mod quote_error;

pub use category::CategorySummary;
pub use quote::{parse_quote_id, QuoteRecord};
pub use quote_error::QuoteError;
