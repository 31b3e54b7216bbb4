//! Structured filter handler.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use jobsift::{FilterRequest, FilterResult};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::server::error::ApiError;
use crate::server::state::AppState;

const FILTER_FAILED: &str = "An error occurred filtering the data";

/// Request body for the filter endpoint.
#[derive(Deserialize)]
pub struct FilterBody {
    #[serde(default)]
    pub filters: Option<Map<String, Value>>,
}

/// Apply category filters and return at most 50 matching rows.
///
/// A missing or empty `filters` object is rejected before the dataset is
/// touched.
pub async fn filter_data(
    State(state): State<AppState>,
    payload: Result<Json<FilterBody>, JsonRejection>,
) -> Result<Json<FilterResult>, ApiError> {
    let Json(body) = payload?;
    let request = parse_filters(body)?;

    let catalog = state.catalog.clone();
    let result = tokio::task::spawn_blocking(move || catalog.filter(&request))
        .await
        .map_err(|e| ApiError::internal(FILTER_FAILED, e))?;

    Ok(Json(result))
}

/// Validate the body into a request without touching the catalog.
fn parse_filters(body: FilterBody) -> Result<FilterRequest, ApiError> {
    let filters = body.filters.unwrap_or_default();
    FilterRequest::from_json_map(&filters).map_err(|e| ApiError::from(e).context(FILTER_FAILED))
}
