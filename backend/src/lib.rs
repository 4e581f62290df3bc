//! # Diaper Tracker Backend
//!
//! Tracks diaper changes per child and serves the data over a JSON REST API.
//!
//! ## Architecture
//!
//! - **domain**: day buckets, log reconciliation, usage statistics, calendar
//!   and the services built on them
//! - **storage**: persistence of the child collection (`children.json`)
//! - **io**: the REST layer (axum)
//! - **config**: runtime settings from environment variables
//!
//! The application root owns a single [`ChildStore`]; every service gets a
//! clone of it.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::http::{HeaderValue, Method};
use axum::Router;
use log::{info, warn};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::domain::{
    CalendarService, ChildService, ChildStore, DiaperLogService, GeminiRecommendationProvider,
    RecommendationProvider, UsageService,
};
use crate::storage::{Connection, JsonConnection};

/// Shared state handed to every REST handler
#[derive(Clone)]
pub struct AppState {
    pub child_service: ChildService,
    pub diaper_log_service: DiaperLogService,
    pub usage_service: UsageService,
    pub calendar_service: CalendarService,
}

impl AppState {
    pub fn new(store: ChildStore, recommendation_provider: Arc<dyn RecommendationProvider>) -> Self {
        let calendar_service = CalendarService::new();
        Self {
            child_service: ChildService::new(store.clone()),
            diaper_log_service: DiaperLogService::new(store.clone()),
            usage_service: UsageService::new(store, calendar_service.clone(), recommendation_provider),
            calendar_service,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up storage in {}", config.data_directory.display());
    let connection = JsonConnection::new(&config.data_directory)?;
    let repository = connection.create_child_collection_repository();
    let store = ChildStore::load(Arc::new(repository)).await;

    if config.recommendation.api_key.is_none() {
        warn!("No Gemini API key configured, usage recommendations are disabled");
    }
    let recommendation_provider = GeminiRecommendationProvider::new(&config.recommendation);

    info!("Setting up application state");
    Ok(AppState::new(store, Arc::new(recommendation_provider)))
}

pub fn create_router(app_state: AppState, cors_origin: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);
    let cors = match cors_origin.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(_) => {
            warn!("Invalid CORS origin {:?}, allowing any origin", cors_origin);
            cors.allow_origin(Any)
        }
    };

    Router::new()
        .nest("/api", io::rest::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
