use std::sync::Arc;

use anyhow::{Context as AnyhowContext, Result};

use crate::catalog::{Catalog, CatalogSource};
use crate::context::Context;
use crate::store::QuoteStore;

pub fn init_store(ctx: &Context) -> Result<Arc<QuoteStore>> {
    let catalog = load_catalog(&ctx.catalog, ctx.fallback_to_embedded)?;
    Ok(Arc::new(QuoteStore::new(catalog)))
}

pub fn load_catalog(source: &CatalogSource, fallback_to_embedded: bool) -> Result<Catalog> {
    match source.load() {
        Ok(catalog) => Ok(catalog),
        Err(err) if fallback_to_embedded && *source != CatalogSource::Embedded => {
            log::warn!(
                "⚠️ Failed to load catalog {}: {}; falling back to the embedded catalog",
                source,
                err
            );
            CatalogSource::Embedded
                .load()
                .context("loading embedded catalog")
        }
        Err(err) => Err(err).with_context(|| format!("loading catalog {}", source)),
    }
}
