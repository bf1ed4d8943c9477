//! OpenAI provider implementation
//!
//! Chat-completions adapter. The structured mode uses the JSON-schema
//! response format, so the API itself constrains the output shape; the
//! response still runs through the shared validator before a table is
//! returned.

use crate::{parser, LlmError};
use roomtable_domain::{schema, CompletionProvider, RoomTable};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tracing::debug;

/// Default OpenAI API endpoint
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default timeout for completion requests (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// OpenAI chat-completions provider
pub struct OpenAiProvider {
    api_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<Value>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider.
    ///
    /// # Parameters
    ///
    /// - `api_key`: bearer token for the API
    /// - `model`: model to use (e.g. "gpt-4o-2024-08-06")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
            client,
        }
    }

    /// Override the API endpoint (proxies, compatible gateways).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    async fn send(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let started = Instant::now();

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
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
            .json::<ChatResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        debug!(
            model = %self.model,
            latency_ms = started.elapsed().as_millis() as u64,
            "openai completion finished"
        );

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Response has no content".to_string()))
    }
}

impl CompletionProvider for OpenAiProvider {
    type Error = LlmError;

    async fn complete(&self, instruction: &str, content: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage { role: "system", content: instruction.to_string() },
                ChatMessage { role: "user", content: content.to_string() },
            ],
            response_format: None,
        };

        self.send(&request).await
    }

    async fn complete_structured(
        &self,
        instruction: &str,
        content: &str,
    ) -> Result<RoomTable, LlmError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage { role: "system", content: instruction.to_string() },
                ChatMessage { role: "user", content: content.to_string() },
            ],
            response_format: Some(json!({
                "type": "json_schema",
                "json_schema": {
                    "name": "room_table",
                    "schema": schema::room_table_schema(),
                    "strict": true
                }
            })),
        };

        let raw = self.send(&request).await?;
        parser::parse_table_response(&raw)
    }
}
