use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::types::{parse_quote_id, QuoteError};

use super::{
    models::{Envelope, ErrorResponse, HealthResponse},
    params::{run_query, to_i64, QuoteParams},
    AppState,
};

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let uptime_secs = state.started_at.elapsed().map(|d| d.as_secs()).unwrap_or(0);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            uptime_secs,
            quotes: state.store.len(),
        }),
    )
}

pub async fn list_quotes(
    State(state): State<AppState>,
    params: Result<Query<QuoteParams>, QueryRejection>,
) -> Response {
    let mut rng = rand::thread_rng();
    let result = query_params(params)
        .and_then(|params| run_query(&state.store, &params, state.default_limit, &mut rng));
    respond(&state, result)
}

pub async fn random_quotes(
    State(state): State<AppState>,
    params: Result<Query<QuoteParams>, QueryRejection>,
) -> Response {
    let mut rng = rand::thread_rng();
    let result = query_params(params)
        .and_then(|params| params.count())
        .and_then(|count| match count {
            Some(n) => Ok(state.store.random_n(to_i64(n), &mut rng)),
            None => state.store.random_one(&mut rng).map(|quote| vec![quote.clone()]),
        });
    respond(&state, result)
}

pub async fn random_per_category(State(state): State<AppState>) -> Response {
    let mut rng = rand::thread_rng();
    let quotes = state.store.random_one_per_category(&mut rng);
    respond(&state, Ok(quotes))
}

#[tracing::instrument(level = "debug", skip_all, fields(category = %category))]
pub async fn quotes_in_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    params: Result<Query<QuoteParams>, QueryRejection>,
) -> Response {
    let result = query_params(params)
        .and_then(|params| params.limit())
        .and_then(|limit| {
            let quotes = state.store.list_by_category(&category);
            if quotes.is_empty() {
                return Err(QuoteError::NotFound(format!("category {}", category)));
            }
            Ok(match limit {
                Some(n) => quotes.into_iter().take(n).collect(),
                None => quotes,
            })
        });
    respond(&state, result)
}

#[tracing::instrument(level = "debug", skip_all, fields(id = %id))]
pub async fn get_quote(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = parse_quote_id(&id)
        .and_then(|id| state.store.get_by_id(id))
        .map(|quote| vec![quote.clone()]);
    respond(&state, result)
}

pub async fn list_categories(State(state): State<AppState>) -> Response {
    let categories = state.store.list_categories();
    respond(&state, Ok(categories))
}

pub async fn not_found() -> impl IntoResponse {
    error_response(&QuoteError::NotFound("endpoint".to_string()))
}

/// Query strings that fail to deserialize get the same JSON error body as
/// parameters rejected later on.
fn query_params(
    params: Result<Query<QuoteParams>, QueryRejection>,
) -> Result<QuoteParams, QuoteError> {
    params
        .map(|Query(params)| params)
        .map_err(|rejection| QuoteError::InvalidArgument(rejection.body_text()))
}

fn respond<T: Serialize>(state: &AppState, result: Result<Vec<T>, QuoteError>) -> Response {
    match result {
        Ok(data) => Json(Envelope::new(data, state.store.len())).into_response(),
        Err(err) => error_response(&err),
    }
}

fn error_response(err: &QuoteError) -> Response {
    let status = match err {
        QuoteError::InvalidArgument(_) => {
            log::warn!("Rejected request: {}", err);
            StatusCode::BAD_REQUEST
        }
        QuoteError::NotFound(_) | QuoteError::EmptyCatalog => StatusCode::NOT_FOUND,
    };
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: err.kind().to_string(),
            message: err.to_string(),
        }),
    )
        .into_response()
}
