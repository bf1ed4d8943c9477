//! Anthropic provider implementation
//!
//! Messages-API adapter. Anthropic has no schema-constrained response mode,
//! so the structured call states the schema in the prompt and the response
//! is parsed and validated like any other; a record set that does not
//! satisfy the full field set fails the call.

use crate::{parser, LlmError};
use roomtable_domain::{schema, CompletionProvider, RoomTable};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// Default Anthropic API endpoint
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";

/// API version header value
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Default timeout for completion requests (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default completion budget in output tokens
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Anthropic messages provider
pub struct AnthropicProvider {
    api_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider.
    ///
    /// # Parameters
    ///
    /// - `api_key`: value for the `x-api-key` header
    /// - `model`: model to use (e.g. "claude-3-5-sonnet-20240620")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            client,
        }
    }

    /// Override the API endpoint.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the output-token budget per completion.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    async fn send(&self, request: &MessagesRequest) -> Result<String, LlmError> {
        let started = Instant::now();

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed = response
            .json::<MessagesResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        debug!(
            model = %self.model,
            latency_ms = started.elapsed().as_millis() as u64,
            "anthropic completion finished"
        );

        let mut text = String::new();
        for block in parsed.content {
            if let Some(block_text) = block.text {
                text.push_str(&block_text);
            }
        }
        if text.is_empty() {
            return Err(LlmError::InvalidResponse(
                "Response has no text content".to_string(),
            ));
        }
        Ok(text)
    }
}

impl CompletionProvider for AnthropicProvider {
    type Error = LlmError;

    async fn complete(&self, instruction: &str, content: &str) -> Result<String, LlmError> {
        // Instruction and content share a single user turn
        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: format!("{}\n\n{}", instruction, content),
            }],
        };

        self.send(&request).await
    }

    async fn complete_structured(
        &self,
        instruction: &str,
        content: &str,
    ) -> Result<RoomTable, LlmError> {
        let prompt = format!(
            "{}\n\nReturn ONLY a JSON object conforming to this schema, with every field populated:\n{}\n\n{}",
            instruction,
            schema::room_table_schema(),
            content
        );
        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message { role: "user", content: prompt }],
        };

        let raw = self.send(&request).await?;
        parser::parse_table_response(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anthropic_provider_creation() {
        let provider = AnthropicProvider::new("secret", "claude-3-5-sonnet-20240620");
        assert_eq!(provider.api_url, DEFAULT_API_URL);
        assert_eq!(provider.model, "claude-3-5-sonnet-20240620");
        assert_eq!(provider.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_anthropic_provider_builders() {
        let provider = AnthropicProvider::new("secret", "claude-3-5-sonnet-20240620")
            .with_api_url("http://localhost:8080/v1/messages")
            .with_max_tokens(4096);
        assert_eq!(provider.api_url, "http://localhost:8080/v1/messages");
        assert_eq!(provider.max_tokens, 4096);
    }

    #[tokio::test]
    async fn test_anthropic_error_handling() {
        let provider = AnthropicProvider::new("secret", "claude-3-5-sonnet-20240620")
            .with_api_url("http://127.0.0.1:9/v1/messages");

        let result = provider.complete("instruction", "content").await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
