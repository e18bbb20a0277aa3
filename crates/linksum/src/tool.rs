//! Tool contract and the web loader tool
//!
//! A tool is a named, schema-typed callable the model may invoke during
//! generation. The flow dispatches model tool calls to the matching tool by
//! name and feeds the string result back into the conversation.

use crate::error::SummarizeError;
use crate::extract::visible_text;
use crate::types::WebLoadRequest;
use crate::{WEB_LOADER_DESCRIPTION, WEB_LOADER_NAME};
use async_trait::async_trait;
use schemars::schema_for;
use tracing::debug;

/// Trait for callables the model may invoke during generation
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name as presented to the model
    fn name(&self) -> &'static str;

    /// One-line description for the model
    fn description(&self) -> &'static str;

    /// JSON schema of the tool's input
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with the model-supplied arguments
    async fn call(&self, args: serde_json::Value) -> Result<String, SummarizeError>;
}

/// Tool that loads a webpage and returns its visible text
///
/// Performs exactly one GET with runtime-default headers, timeouts, and
/// redirect policy. The response body is read as text regardless of status
/// code; a 404 body is parsed like any other. Network errors propagate and
/// abort the whole invocation.
#[derive(Debug, Clone, Default)]
pub struct WebLoader {
    http: reqwest::Client,
}

impl WebLoader {
    /// Create a web loader with a default HTTP client
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the URL and extract its visible text
    pub async fn load(&self, url: &str) -> Result<String, SummarizeError> {
        debug!(%url, "loading webpage");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(SummarizeError::Fetch)?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = response.text().await.map_err(SummarizeError::Fetch)?;

        let text = visible_text(content_type.as_deref(), &body);
        debug!(%url, chars = text.len(), "extracted text");
        Ok(text)
    }
}

#[async_trait]
impl Tool for WebLoader {
    fn name(&self) -> &'static str {
        WEB_LOADER_NAME
    }

    fn description(&self) -> &'static str {
        WEB_LOADER_DESCRIPTION
    }

    fn input_schema(&self) -> serde_json::Value {
        let schema = schema_for!(WebLoadRequest);
        serde_json::to_value(schema).unwrap_or_default()
    }

    async fn call(&self, args: serde_json::Value) -> Result<String, SummarizeError> {
        let req: WebLoadRequest =
            serde_json::from_value(args).map_err(|source| SummarizeError::ToolArguments {
                name: WEB_LOADER_NAME.to_string(),
                source,
            })?;
        self.load(&req.url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_metadata() {
        let tool = WebLoader::new();
        assert_eq!(tool.name(), "web_loader");
        assert_eq!(
            tool.description(),
            "Loads a webpage and returns the textual content."
        );
    }

    #[test]
    fn test_input_schema_has_url() {
        let tool = WebLoader::new();
        let schema = tool.input_schema();
        assert!(schema["properties"]["url"].is_object());
    }

    #[tokio::test]
    async fn test_call_rejects_bad_arguments() {
        let tool = WebLoader::new();
        let result = tool.call(json!({"link": "https://example.com"})).await;
        assert!(matches!(
            result,
            Err(SummarizeError::ToolArguments { .. })
        ));
    }
}
