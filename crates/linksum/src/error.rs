//! Error types for Linksum

use thiserror::Error;

/// Errors that can occur while summarizing a URL
///
/// No layer retries or recovers; every failure surfaces to the caller.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// API key is missing; only detected when the model call is attempted
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    /// Transport failure talking to the model backend
    #[error("model backend request failed")]
    Transport(#[source] reqwest::Error),

    /// Model backend returned a non-success status
    #[error("model backend returned status {status}: {body}")]
    Backend { status: u16, body: String },

    /// Model backend response did not have the expected shape
    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    /// Web loader fetch failed (DNS, refused connection, malformed URL)
    #[error("web loader fetch failed")]
    Fetch(#[source] reqwest::Error),

    /// Model requested a tool that is not registered
    #[error("model requested unknown tool: {0}")]
    UnknownTool(String),

    /// Model sent tool arguments that do not match the tool's schema
    #[error("invalid arguments for tool {name}")]
    ToolArguments {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Model kept requesting tools past the round cap
    #[error("model did not produce a final answer within {0} tool rounds")]
    ToolRoundsExceeded(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SummarizeError::MissingApiKey.to_string(),
            "OPENAI_API_KEY is not set"
        );
        assert_eq!(
            SummarizeError::Backend {
                status: 401,
                body: "invalid key".to_string()
            }
            .to_string(),
            "model backend returned status 401: invalid key"
        );
        assert_eq!(
            SummarizeError::UnknownTool("search".to_string()).to_string(),
            "model requested unknown tool: search"
        );
        assert_eq!(
            SummarizeError::ToolRoundsExceeded(5).to_string(),
            "model did not produce a final answer within 5 tool rounds"
        );
    }
}
