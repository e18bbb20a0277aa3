//! Chat-completions wire types and the model backend seam
//!
//! The backend call convention is an injected dependency: the flow only
//! depends on [`ModelBackend`], and [`OpenAiBackend`] implements it against
//! any OpenAI-compatible `/chat/completions` endpoint.

use crate::error::SummarizeError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default OpenAI API base URL
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Message role in a chat conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction
    System,
    /// Caller prompt
    User,
    /// Model output
    Assistant,
    /// Tool result fed back to the model
    Tool,
}

/// One message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,

    /// Text content; absent on assistant messages that only carry tool calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Tool invocations requested by the model
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,

    /// For tool messages, the id of the call being answered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    /// Create a tool-result message answering the given call id
    pub fn tool(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: Some(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: Some(call_id.into()),
        }
    }
}

/// A tool invocation requested by the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionCall,
}

/// The function half of a tool call; arguments arrive as a JSON string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

/// A tool made available to the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDecl {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionDecl,
}

/// Function declaration: name, description, and input schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

impl ToolDecl {
    /// Declare a tool for the request payload
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            kind: "function".to_string(),
            function: FunctionDecl {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

/// A chat-completions request
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolDecl>,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Injected model call convention
///
/// One operation: submit the conversation, get the next assistant message.
/// The flow owns the tool round trip on top of this.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Submit a request and return the assistant message of the first choice
    async fn complete(&self, request: &ChatRequest) -> Result<ChatMessage, SummarizeError>;
}

/// Backend for OpenAI-compatible chat-completions endpoints
#[derive(Debug, Clone)]
pub struct OpenAiBackend {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAiBackend {
    /// Create a backend reading the API key from `OPENAI_API_KEY`
    ///
    /// A missing key is not an error here; it surfaces when the model call
    /// is attempted.
    pub fn from_env() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: OPENAI_BASE_URL.to_string(),
            api_key: std::env::var(API_KEY_ENV).ok(),
        }
    }

    /// Create a backend with an explicit key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: OPENAI_BASE_URL.to_string(),
            api_key: Some(api_key.into()),
        }
    }

    /// Create a backend with no API key
    ///
    /// Every call fails with [`SummarizeError::MissingApiKey`]; the same
    /// state `from_env` ends up in when `OPENAI_API_KEY` is unset.
    pub fn without_api_key() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: OPENAI_BASE_URL.to_string(),
            api_key: None,
        }
    }

    /// Override the base URL (local gateways, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ModelBackend for OpenAiBackend {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatMessage, SummarizeError> {
        let api_key = self.api_key.as_deref().ok_or(SummarizeError::MissingApiKey)?;

        debug!(model = %request.model, messages = request.messages.len(), "model request");

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(SummarizeError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizeError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(SummarizeError::Transport)?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| {
                SummarizeError::MalformedResponse("response contained no choices".to_string())
            })
    }
}
