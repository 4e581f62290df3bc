//! # REST API for Diaper Logs
//!
//! Declaring a day's change count and logging a single change now.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{post, put},
    Router,
};
use log::{error, info};

use super::mappers::DiaperLogMapper;
use crate::AppState;
use shared::SetDayCountRequest;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/children/:child_id/day-count", put(set_day_count))
        .route("/children/:child_id/logs", post(log_change_now))
}

/// Make the child's log hold exactly `count` changes on `date`
async fn set_day_count(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    Json(request): Json<SetDayCountRequest>,
) -> impl IntoResponse {
    info!("PUT /api/children/{}/day-count - request: {:?}", child_id, request);

    let command = DiaperLogMapper::to_command(child_id, request);
    match state.diaper_log_service.set_count_for_day(command).await {
        Ok(result) if result.child_found => (StatusCode::OK, Json(DiaperLogMapper::to_response(result))).into_response(),
        Ok(_) => (StatusCode::NOT_FOUND, "Child not found").into_response(),
        Err(e) => {
            error!("Failed to set day count: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Record one more change for today
async fn log_change_now(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> impl IntoResponse {
    info!("POST /api/children/{}/logs", child_id);

    match state.diaper_log_service.log_change_now(&child_id).await {
        Ok(result) if result.child_found => {
            (StatusCode::CREATED, Json(DiaperLogMapper::to_response(result))).into_response()
        }
        Ok(_) => (StatusCode::NOT_FOUND, "Child not found").into_response(),
        Err(e) => {
            error!("Failed to log change: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
