//! # Domain Module
//!
//! Business logic for the diaper tracker.
//!
//! ## Module Organization
//!
//! - **day_bucket**: local-day buckets and inclusive week/month windows
//! - **log_reconciliation**: making a day's log match a declared count
//! - **usage_statistics**: weekly breakdowns, seven-day chart, totals, age
//! - **calendar**: month grid with per-day change counts
//! - **child_store**: the in-memory collection and its persistence
//! - **child_service / diaper_log_service / usage_service**: operations the
//!   REST layer calls
//! - **recommendation_service**: advisory consumption estimate from Gemini
//!
//! ## Business Rules
//!
//! - A child's logs are always sorted by timestamp
//! - Day counts are never negative; a negative request clears the day
//! - Setting the count of one day never touches another day
//! - Week and month totals include both window edges
//! - Recommendations are advisory and never change the logs

pub mod calendar;
pub mod child_service;
pub mod child_store;
pub mod commands;
pub mod day_bucket;
pub mod diaper_log_service;
pub mod log_reconciliation;
pub mod models;
pub mod recommendation_service;
#[cfg(test)]
pub mod test_utils;
pub mod usage_service;
pub mod usage_statistics;

pub use calendar::CalendarService;
pub use child_service::ChildService;
pub use child_store::ChildStore;
pub use diaper_log_service::DiaperLogService;
pub use recommendation_service::{GeminiRecommendationProvider, RecommendationError, RecommendationProvider};
pub use usage_service::UsageService;
