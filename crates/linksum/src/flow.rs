//! Summarize flow
//!
//! Builds the prompt, submits it with the web loader registered as the only
//! tool, answers tool calls until the model produces text, and returns that
//! text. Failures at any point propagate uncaught; there is no retry and no
//! partial result.

use crate::error::SummarizeError;
use crate::openai::{ChatMessage, ChatRequest, ModelBackend, OpenAiBackend, ToolDecl};
use crate::tool::{Tool, WebLoader};
use crate::types::ModelConfig;
use tracing::{debug, info};

/// Maximum tool round trips before giving up on a final answer
const MAX_TOOL_ROUNDS: usize = 5;

/// Build the summarization prompt for a URL
///
/// The URL is embedded verbatim, without escaping.
pub fn summary_prompt(url: &str) -> String {
    format!("First, fetch this link: \"{url}\". Then, summarize the content within 20 words.")
}

/// Orchestrates prompt, tool round trip, and final text
pub struct SummarizeFlow {
    backend: Box<dyn ModelBackend>,
    config: ModelConfig,
    tools: Vec<Box<dyn Tool>>,
}

impl SummarizeFlow {
    /// Create a flow with the default config and the web loader registered
    pub fn new(backend: Box<dyn ModelBackend>) -> Self {
        Self {
            backend,
            config: ModelConfig::default(),
            tools: vec![Box::new(WebLoader::new())],
        }
    }

    /// Override the generation parameters
    pub fn with_config(mut self, config: ModelConfig) -> Self {
        self.config = config;
        self
    }

    /// Summarize the page behind the given URL
    ///
    /// The model decides autonomously whether and how often to invoke the
    /// web loader; each round of tool calls is answered and the conversation
    /// resubmitted until the model replies with text.
    pub async fn run(&self, url: &str) -> Result<String, SummarizeError> {
        info!(%url, model = %self.config.model, "summarize flow started");

        let tools: Vec<ToolDecl> = self
            .tools
            .iter()
            .map(|tool| ToolDecl::function(tool.name(), tool.description(), tool.input_schema()))
            .collect();

        let mut messages = vec![ChatMessage::user(summary_prompt(url))];

        for round in 0..MAX_TOOL_ROUNDS {
            let request = ChatRequest {
                model: self.config.model.clone(),
                messages: messages.clone(),
                tools: tools.clone(),
                temperature: self.config.temperature,
            };

            let reply = self.backend.complete(&request).await?;

            if reply.tool_calls.is_empty() {
                return reply.content.ok_or_else(|| {
                    SummarizeError::MalformedResponse(
                        "assistant message had neither content nor tool calls".to_string(),
                    )
                });
            }

            debug!(round, calls = reply.tool_calls.len(), "answering tool calls");

            let calls = reply.tool_calls.clone();
            messages.push(reply);

            for call in calls {
                let tool = self
                    .tools
                    .iter()
                    .find(|tool| tool.name() == call.function.name)
                    .ok_or_else(|| SummarizeError::UnknownTool(call.function.name.clone()))?;

                let args: serde_json::Value = serde_json::from_str(&call.function.arguments)
                    .map_err(|source| SummarizeError::ToolArguments {
                        name: call.function.name.clone(),
                        source,
                    })?;

                let output = tool.call(args).await?;
                messages.push(ChatMessage::tool(call.id, output));
            }
        }

        Err(SummarizeError::ToolRoundsExceeded(MAX_TOOL_ROUNDS))
    }
}

/// Summarize a URL with the environment-configured OpenAI backend
///
/// Convenience entry point: `OPENAI_API_KEY` supplies the credentials and
/// the default model config applies.
pub async fn summarize(url: &str) -> Result<String, SummarizeError> {
    SummarizeFlow::new(Box::new(OpenAiBackend::from_env()))
        .run(url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_embeds_url_verbatim() {
        assert_eq!(
            summary_prompt("https://example.com/a"),
            "First, fetch this link: \"https://example.com/a\". \
             Then, summarize the content within 20 words."
        );
        // No escaping, by contract
        let prompt = summary_prompt("https://example.com/\"quoted\"");
        assert!(prompt.contains("\"https://example.com/\"quoted\"\""));
    }
}
