//! Natural-language query handler.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::server::error::ApiError;
use crate::server::state::AppState;

const QUERY_FAILED: &str = "An error occurred processing your request";

/// Request body for the query endpoint.
#[derive(Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// Response for the query endpoint.
#[derive(Serialize)]
pub struct QueryResponse {
    pub response: String,
}

/// Forward a question to the agent together with the dataset.
///
/// Agent calls block on network I/O, so they run on the blocking pool.
pub async fn query(
    State(state): State<AppState>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, ApiError> {
    let Json(request) = payload?;
    let query = request.query.unwrap_or_default();

    let dispatcher = state.dispatcher.clone();
    let catalog = state.catalog.clone();
    let response = tokio::task::spawn_blocking(move || {
        dispatcher.dispatch(&query, catalog.dataset(), catalog.aliases())
    })
    .await
    .map_err(|e| ApiError::internal(QUERY_FAILED, e))?
    .map_err(|e| ApiError::from(e).context(QUERY_FAILED))?;

    Ok(Json(QueryResponse { response }))
}
