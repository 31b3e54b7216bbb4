//! Liveness handler.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::state::AppState;

/// Response for the health endpoint.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub data_loaded: bool,
    pub data_rows: usize,
}

/// Report liveness and dataset size.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Backend is running",
        data_loaded: state.data_loaded(),
        data_rows: state.catalog.dataset().row_count(),
    })
}
