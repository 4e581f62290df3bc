use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::Local;
use log::{error, info};
use serde::Deserialize;

use crate::AppState;

// Query parameters for calendar month API
#[derive(Debug, Deserialize)]
pub struct CalendarMonthQuery {
    pub month: u32,
    pub year: i32,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/children/:child_id/calendar", get(get_calendar_month))
}

/// Month grid with the child's change count on every day
async fn get_calendar_month(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    Query(query): Query<CalendarMonthQuery>,
) -> impl IntoResponse {
    info!("GET /api/children/{}/calendar - query: {:?}", child_id, query);

    let child = match state.child_service.get_child(&child_id).await {
        Ok(Some(child)) => child,
        Ok(None) => return (StatusCode::NOT_FOUND, "Child not found").into_response(),
        Err(e) => {
            error!("Failed to load child for calendar: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving child").into_response();
        }
    };

    let today = Local::now().date_naive();
    match state
        .calendar_service
        .generate_calendar_month(&Local, &child.logs, query.month, query.year, today)
    {
        Some(calendar_month) => (StatusCode::OK, Json(calendar_month)).into_response(),
        None => (StatusCode::BAD_REQUEST, "Invalid month/year").into_response(),
    }
}
