//! Core types for Linksum

use crate::DEFAULT_MODEL;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input to the web loader tool
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct WebLoadRequest {
    /// The URL to load
    pub url: String,
}

impl WebLoadRequest {
    /// Create a new request with the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Fixed generation parameters for the summarize flow
///
/// Defined once per flow; invariant across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identifier sent to the backend
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 1.0,
        }
    }
}

impl ModelConfig {
    /// Create a config for the given model with the default temperature
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_config_defaults() {
        let config = ModelConfig::default();
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.temperature, 1.0);
    }

    #[test]
    fn test_model_config_new_keeps_temperature() {
        let config = ModelConfig::new("gpt-4o-mini");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.temperature, 1.0);
    }

    #[test]
    fn test_web_load_request_serialization() {
        let req = WebLoadRequest::new("https://example.com/a");
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, "{\"url\":\"https://example.com/a\"}");

        let back: WebLoadRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.url, "https://example.com/a");
    }
}
