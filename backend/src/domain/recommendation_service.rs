//! Advisory usage recommendation from a generative-AI service.
//!
//! The estimate is only displayed next to the tracked actuals; nothing here
//! reads or writes the log store.

use async_trait::async_trait;
use log::{debug, error};
use serde_json::{json, Value};
use shared::DiaperConsumptionEstimate;
use std::time::Duration;
use thiserror::Error;

use crate::config::RecommendationConfig;

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("recommendation API key is not configured")]
    MissingApiKey,
    #[error("recommendation service returned HTTP {0}")]
    Http(u16),
    #[error("recommendation service unreachable: {0}")]
    Transport(String),
    #[error("recommendation response was not in the expected format: {0}")]
    Format(String),
}

/// Source of a typical daily/weekly/monthly consumption estimate for an age
#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    async fn recommend(&self, age_in_months: u32) -> Result<DiaperConsumptionEstimate, RecommendationError>;
}

pub fn recommendation_prompt(age_in_months: u32) -> String {
    format!(
        "Based on general pediatric guidelines, what is the typical daily, weekly, and monthly \
         diaper consumption for a baby that is {} months old?",
        age_in_months
    )
}

/// `generateContent` request asking for a JSON object with integer fields
pub fn build_request_body(age_in_months: u32) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": recommendation_prompt(age_in_months) }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "daily": { "type": "INTEGER", "description": "Average number of diapers per day." },
                    "weekly": { "type": "INTEGER", "description": "Average number of diapers per week." },
                    "monthly": { "type": "INTEGER", "description": "Average number of diapers per month." }
                },
                "required": ["daily", "weekly", "monthly"]
            }
        }
    })
}

/// Extract the estimate from a `generateContent` response body
pub fn parse_generate_content_response(body: &Value) -> Result<DiaperConsumptionEstimate, RecommendationError> {
    let text = body
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| RecommendationError::Format("response has no candidate text".to_string()))?;
    parse_estimate(text)
}

/// Parse the JSON text the model produced
pub fn parse_estimate(text: &str) -> Result<DiaperConsumptionEstimate, RecommendationError> {
    serde_json::from_str(text.trim()).map_err(|e| RecommendationError::Format(e.to_string()))
}

/// Calls the Gemini REST API
#[derive(Clone)]
pub struct GeminiRecommendationProvider {
    agent: ureq::Agent,
    endpoint: String,
    api_key: Option<String>,
}

impl GeminiRecommendationProvider {
    pub fn new(config: &RecommendationConfig) -> Self {
        let timeout = Duration::from_millis(config.timeout_ms.max(100));
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .build();

        Self {
            agent,
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
            api_key: config.api_key.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn call_blocking(
        agent: ureq::Agent,
        endpoint: &str,
        api_key: &str,
        payload: Value,
    ) -> Result<DiaperConsumptionEstimate, RecommendationError> {
        let response = agent
            .post(endpoint)
            .set("Content-Type", "application/json")
            .set("x-goog-api-key", api_key)
            .send_json(payload)
            .map_err(|e| match e {
                ureq::Error::Status(status, _) => RecommendationError::Http(status),
                ureq::Error::Transport(transport) => RecommendationError::Transport(transport.to_string()),
            })?;

        let body: Value = response
            .into_json()
            .map_err(|e| RecommendationError::Format(e.to_string()))?;
        parse_generate_content_response(&body)
    }
}

#[async_trait]
impl RecommendationProvider for GeminiRecommendationProvider {
    async fn recommend(&self, age_in_months: u32) -> Result<DiaperConsumptionEstimate, RecommendationError> {
        let api_key = self.api_key.clone().ok_or(RecommendationError::MissingApiKey)?;
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();
        let payload = build_request_body(age_in_months);

        debug!("Requesting recommendation for age {} months", age_in_months);

        let result = tokio::task::spawn_blocking(move || Self::call_blocking(agent, &endpoint, &api_key, payload))
            .await
            .map_err(|e| RecommendationError::Transport(e.to_string()))?;

        if let Err(e) = &result {
            error!("Error fetching diaper recommendation: {}", e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> RecommendationConfig {
        RecommendationConfig {
            api_key: api_key.map(str::to_string),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/".to_string(),
            timeout_ms: 1_000,
        }
    }

    #[test]
    fn test_request_body_embeds_age_and_schema() {
        let body = build_request_body(7);
        let text = body.pointer("/contents/0/parts/0/text").and_then(Value::as_str).unwrap();
        assert!(text.contains("7 months old"));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            json!(["daily", "weekly", "monthly"])
        );
    }

    #[test]
    fn test_parse_estimate() {
        let estimate = parse_estimate(" {\"daily\": 8, \"weekly\": 56, \"monthly\": 240}\n").unwrap();
        assert_eq!(
            estimate,
            DiaperConsumptionEstimate { daily: 8, weekly: 56, monthly: 240 }
        );
    }

    #[test]
    fn test_parse_estimate_rejects_missing_or_negative_fields() {
        assert!(matches!(
            parse_estimate("{\"daily\": 8, \"weekly\": 56}"),
            Err(RecommendationError::Format(_))
        ));
        assert!(matches!(
            parse_estimate("{\"daily\": -1, \"weekly\": 56, \"monthly\": 240}"),
            Err(RecommendationError::Format(_))
        ));
        assert!(matches!(parse_estimate("about eight"), Err(RecommendationError::Format(_))));
    }

    #[test]
    fn test_parse_generate_content_response() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"daily\":6,\"weekly\":42,\"monthly\":180}" }] }
            }]
        });
        let estimate = parse_generate_content_response(&body).unwrap();
        assert_eq!(estimate.monthly, 180);

        let empty = json!({ "candidates": [] });
        assert!(matches!(
            parse_generate_content_response(&empty),
            Err(RecommendationError::Format(_))
        ));
    }

    #[test]
    fn test_endpoint_is_built_from_config() {
        let provider = GeminiRecommendationProvider::new(&config(Some("key")));
        assert_eq!(
            provider.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let provider = GeminiRecommendationProvider::new(&config(None));
        let result = provider.recommend(6).await;
        assert!(matches!(result, Err(RecommendationError::MissingApiKey)));
    }
}
