use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};

use crate::store::QuoteStore;

mod handlers;
mod models;
mod params;

pub use models::Envelope;

use handlers::{
    get_quote, health, list_categories, list_quotes, not_found, quotes_in_category,
    random_per_category, random_quotes,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<QuoteStore>,
    pub started_at: std::time::SystemTime,
    pub default_limit: Option<usize>,
}

impl AppState {
    pub fn new(store: Arc<QuoteStore>, default_limit: Option<usize>) -> Self {
        Self {
            store,
            started_at: std::time::SystemTime::now(),
            default_limit,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/quotes", get(list_quotes))
        .route("/api/quotes/random", get(random_quotes))
        .route("/api/quotes/per-category", get(random_per_category))
        .route("/api/quotes/category/:category", get(quotes_in_category))
        .route("/api/quotes/:id", get(get_quote))
        .route("/api/categories", get(list_categories))
        .fallback(not_found)
        .with_state(state)
}

pub async fn serve(
    addr: SocketAddr,
    state: AppState,
    shutdown: tokio_util::sync::CancellationToken,
) -> anyhow::Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("🌐 REST listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            log::info!("🛑 REST shutdown requested");
        })
        .await?;
    log::info!("👋 REST server exited");
    Ok(())
}
