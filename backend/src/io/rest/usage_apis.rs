//! # REST API for Usage
//!
//! Cross-child weekly/monthly totals and the per-child usage report.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::{error, info};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/usage/summary", get(get_usage_summary))
        .route("/children/:child_id/usage", get(get_child_usage))
}

async fn get_usage_summary(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/usage/summary");

    match state.usage_service.usage_summary().await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to build usage summary: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error building usage summary").into_response()
        }
    }
}

/// Usage report for one child; a recommendation failure still returns 200
async fn get_child_usage(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/children/{}/usage", child_id);

    match state.usage_service.child_usage_report(&child_id).await {
        Ok(Some(report)) => (StatusCode::OK, Json(report)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Child not found").into_response(),
        Err(e) => {
            error!("Failed to build usage report: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error building usage report").into_response()
        }
    }
}
