//! Runtime configuration, read from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `DIAPER_TRACKER_DATA_DIR` | `<Documents>/Diaper Tracker`, or `./data` without a documents dir |
//! | `DIAPER_TRACKER_ADDR` | `127.0.0.1:3000` |
//! | `DIAPER_TRACKER_CORS_ORIGIN` | `http://localhost:8080` |
//! | `GEMINI_API_KEY` (or `API_KEY`) | unset, recommendations then fail with a missing-key error |
//! | `GEMINI_MODEL` | `gemini-2.5-flash` |
//! | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com/v1beta` |
//! | `GEMINI_TIMEOUT_MS` | `15000` |

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_TIMEOUT_MS: u64 = 15_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_directory: PathBuf,
    pub bind_address: SocketAddr,
    pub cors_origin: String,
    pub recommendation: RecommendationConfig,
}

#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let data_directory = get("DIAPER_TRACKER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_directory);

        let bind_address = get("DIAPER_TRACKER_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .context("DIAPER_TRACKER_ADDR must be a socket address like 127.0.0.1:3000")?;

        let cors_origin = get("DIAPER_TRACKER_CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        let timeout_ms = match get("GEMINI_TIMEOUT_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("GEMINI_TIMEOUT_MS must be a number of milliseconds, got {}", raw))?,
            None => DEFAULT_GEMINI_TIMEOUT_MS,
        };

        let recommendation = RecommendationConfig {
            api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            base_url: get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            timeout_ms,
        };

        Ok(Self {
            data_directory,
            bind_address,
            cors_origin,
            recommendation,
        })
    }
}

/// `<Documents>/Diaper Tracker`, falling back to `./data`
pub fn default_data_directory() -> PathBuf {
    dirs::document_dir()
        .map(|documents| documents.join("Diaper Tracker"))
        .unwrap_or_else(|| PathBuf::from("data"))
}
