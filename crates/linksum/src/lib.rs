//! Linksum - LLM-backed web page summarization
//!
//! This crate turns a URL into a short summary: the summarize flow prompts
//! an OpenAI-compatible model with a registered "web loader" tool, the model
//! decides whether to call the tool to fetch the page, and the flow returns
//! the model's final text.
//!
//! ## Architecture
//!
//! - [`WebLoader`] - the tool: one HTTP GET, HTML parsed with non-content
//!   markup stripped, `article` text preferred over `body` text
//! - [`SummarizeFlow`] - the orchestrator: prompt, tool round trip, final text
//! - [`ModelBackend`] - the injected model call convention; [`OpenAiBackend`]
//!   talks to a chat-completions endpoint

mod error;
mod extract;
mod flow;
mod openai;
mod tool;
mod types;

pub use error::SummarizeError;
pub use extract::{extract_text, is_html, visible_text};
pub use flow::{summarize, summary_prompt, SummarizeFlow};
pub use openai::{
    ChatMessage, ChatRequest, FunctionCall, FunctionDecl, ModelBackend, OpenAiBackend, Role,
    ToolCall, ToolDecl, API_KEY_ENV, OPENAI_BASE_URL,
};
pub use tool::{Tool, WebLoader};
pub use types::{ModelConfig, WebLoadRequest};

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Tool name as presented to the model
pub const WEB_LOADER_NAME: &str = "web_loader";

/// Tool description for LLM consumption
pub const WEB_LOADER_DESCRIPTION: &str = "Loads a webpage and returns the textual content.";
