//! Data info handler.

use axum::{extract::State, Json};
use jobsift::DataInfo;

use crate::server::error::ApiError;
use crate::server::state::AppState;

const INFO_FAILED: &str = "Unable to fetch data info";

/// Dataset shape, a sample and the distinct values offered for filtering.
pub async fn get_data_info(State(state): State<AppState>) -> Result<Json<DataInfo>, ApiError> {
    let catalog = state.catalog.clone();
    let info = tokio::task::spawn_blocking(move || catalog.info())
        .await
        .map_err(|e| ApiError::internal(INFO_FAILED, e))?;

    Ok(Json(info))
}
