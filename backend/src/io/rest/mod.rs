//! # REST API Interface Layer
//!
//! HTTP endpoints for the diaper tracker, mounted under `/api`.
//!
//! Handlers only translate: they parse the request, call one service and map
//! the outcome to a status code. Unknown children are reported as 404 and
//! leave the stored data untouched.

pub mod calendar_apis;
pub mod child_apis;
pub mod diaper_log_apis;
pub mod mappers;
pub mod usage_apis;

use axum::Router;

use crate::AppState;

/// All API routes, to be nested under `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(child_apis::router())
        .merge(diaper_log_apis::router())
        .merge(calendar_apis::router())
        .merge(usage_apis::router())
}
