//! Roomtable LLM Provider Layer
//!
//! Pluggable text-completion backend implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `CompletionProvider` trait from
//! `roomtable-domain`. Backends are described by a [`BackendRegistry`] entry
//! (driver, model, context limit) and dispatched uniformly through the
//! [`Provider`] enum, so callers never branch on backend identity.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing
//! - `OpenAiProvider`: OpenAI chat-completions API, with schema-constrained
//!   structured output
//! - `AnthropicProvider`: Anthropic messages API, structured output via
//!   prompt-constrained JSON
//!
//! # Examples
//!
//! ```no_run
//! use roomtable_domain::CompletionProvider;
//! use roomtable_llm::MockProvider;
//!
//! # async fn example() -> Result<(), roomtable_llm::LlmError> {
//! let provider = MockProvider::new("Cabin 1 sleeps 4, $165 per night.");
//! let summary = provider.complete("Condense.", "full cabin listing").await?;
//! assert_eq!(summary, "Cabin 1 sleeps 4, $165 per night.");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod anthropic;
pub mod openai;
pub mod parser;
pub mod registry;

use roomtable_domain::{CompletionFailure, CompletionProvider, RoomTable, SchemaViolation};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAiProvider;
pub use registry::{BackendRegistry, BackendSpec, Driver};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Structured response missing required record fields
    #[error("Schema violation: {0}")]
    Schema(#[from] SchemaViolation),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Backend misconfiguration (missing credentials, unsupported driver)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl From<LlmError> for CompletionFailure {
    fn from(error: LlmError) -> Self {
        match error {
            LlmError::Schema(violation) => CompletionFailure::Schema(violation),
            other => CompletionFailure::Call(other.to_string()),
        }
    }
}

/// API credentials for the hosted backends.
///
/// Read from the environment at the binary edge and passed in explicitly;
/// providers never consult the environment themselves.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// OpenAI API key
    pub openai_api_key: Option<String>,
    /// Anthropic API key
    pub anthropic_api_key: Option<String>,
}

impl Credentials {
    /// Read credentials from `OPENAI_API_KEY` and `ANTHROPIC_API_KEY`.
    pub fn from_env() -> Self {
        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
        }
    }
}

/// Uniform dispatcher over the configured backend drivers.
///
/// Constructed from a [`BackendSpec`]; adding a backend means adding a
/// driver variant here and a registry entry, with no caller changes.
pub enum Provider {
    /// OpenAI chat-completions driver
    OpenAi(OpenAiProvider),
    /// Anthropic messages driver
    Anthropic(AnthropicProvider),
}

impl Provider {
    /// Build the provider for a registry entry.
    ///
    /// Fails fast if the driver has no adapter or its credential is not
    /// configured; no network activity happens here.
    pub fn for_spec(spec: &BackendSpec, credentials: &Credentials) -> Result<Self, LlmError> {
        match spec.driver {
            Driver::OpenAi => {
                let key = credentials.openai_api_key.as_deref().ok_or_else(|| {
                    LlmError::Configuration("OPENAI_API_KEY is not set".to_string())
                })?;
                Ok(Provider::OpenAi(OpenAiProvider::new(key, &spec.model)))
            }
            Driver::Anthropic => {
                let key = credentials.anthropic_api_key.as_deref().ok_or_else(|| {
                    LlmError::Configuration("ANTHROPIC_API_KEY is not set".to_string())
                })?;
                Ok(Provider::Anthropic(AnthropicProvider::new(key, &spec.model)))
            }
            Driver::Gemini => Err(LlmError::Configuration(format!(
                "no driver adapter for model `{}`",
                spec.model
            ))),
        }
    }
}

impl CompletionProvider for Provider {
    type Error = LlmError;

    async fn complete(&self, instruction: &str, content: &str) -> Result<String, LlmError> {
        match self {
            Provider::OpenAi(provider) => provider.complete(instruction, content).await,
            Provider::Anthropic(provider) => provider.complete(instruction, content).await,
        }
    }

    async fn complete_structured(
        &self,
        instruction: &str,
        content: &str,
    ) -> Result<RoomTable, LlmError> {
        match self {
            Provider::OpenAi(provider) => provider.complete_structured(instruction, content).await,
            Provider::Anthropic(provider) => {
                provider.complete_structured(instruction, content).await
            }
        }
    }
}

/// Mock provider for deterministic testing
///
/// Returns pre-configured responses without any network calls and counts
/// invocations, so tests can assert that a code path never reached a
/// backend. Structured responses run through the same parsing and
/// validation as the real providers.
///
/// Clones share response maps and counters.
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    table_response: Arc<Mutex<Option<String>>>,
    responses: Arc<Mutex<HashMap<String, String>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    complete_calls: Arc<Mutex<usize>>,
    structured_calls: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a mock that answers every free-text call with `response`.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            table_response: Arc::new(Mutex::new(None)),
            responses: Arc::new(Mutex::new(HashMap::new())),
            delays: Arc::new(Mutex::new(HashMap::new())),
            complete_calls: Arc::new(Mutex::new(0)),
            structured_calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Set the raw JSON the structured call should answer with.
    pub fn with_table_response(self, raw_json: impl Into<String>) -> Self {
        *self.table_response.lock().unwrap() = Some(raw_json.into());
        self
    }

    /// Add a specific response for a given content string.
    pub fn add_response(&mut self, content: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(content.into(), response.into());
    }

    /// Add a response that is only returned after `delay`.
    ///
    /// Lets tests invert completion order to exercise reassembly ordering.
    pub fn add_delayed_response(
        &mut self,
        content: impl Into<String>,
        response: impl Into<String>,
        delay: Duration,
    ) {
        let content = content.into();
        self.delays.lock().unwrap().insert(content.clone(), delay);
        self.responses
            .lock()
            .unwrap()
            .insert(content, response.into());
    }

    /// Configure a free-text error for a given content string.
    pub fn add_error(&mut self, content: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(content.into(), "ERROR".to_string());
    }

    /// Number of free-text completion calls made.
    pub fn complete_call_count(&self) -> usize {
        *self.complete_calls.lock().unwrap()
    }

    /// Number of structured completion calls made.
    pub fn structured_call_count(&self) -> usize {
        *self.structured_calls.lock().unwrap()
    }

    /// Total calls of either mode.
    pub fn call_count(&self) -> usize {
        self.complete_call_count() + self.structured_call_count()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl CompletionProvider for MockProvider {
    type Error = LlmError;

    async fn complete(&self, _instruction: &str, content: &str) -> Result<String, LlmError> {
        *self.complete_calls.lock().unwrap() += 1;

        let delay = self.delays.lock().unwrap().get(content).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(content) {
            if response == "ERROR" {
                return Err(LlmError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }

    async fn complete_structured(
        &self,
        _instruction: &str,
        _content: &str,
    ) -> Result<RoomTable, LlmError> {
        *self.structured_calls.lock().unwrap() += 1;

        let raw = self
            .table_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| r#"{"rooms": []}"#.to_string());
        parser::parse_table_response(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.complete("instruction", "any content").await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.complete("i", "hello").await.unwrap(), "world");
        assert_eq!(provider.complete("i", "foo").await.unwrap(), "bar");
        assert_eq!(
            provider.complete("i", "unknown").await.unwrap(),
            "Default mock response"
        );
    }

    #[tokio::test]
    async fn test_mock_provider_call_counts() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);

        provider.complete("i", "one").await.unwrap();
        provider.complete("i", "two").await.unwrap();
        assert_eq!(provider.complete_call_count(), 2);

        provider.complete_structured("i", "condensed").await.unwrap();
        assert_eq!(provider.structured_call_count(), 1);
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad content");

        let result = provider.complete("i", "bad content").await;
        assert!(matches!(result.unwrap_err(), LlmError::Other(_)));
    }

    #[tokio::test]
    async fn test_mock_provider_structured_default_is_empty_table() {
        let provider = MockProvider::default();
        let table = provider.complete_structured("i", "text").await.unwrap();
        assert!(table.is_empty());
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_counters() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.complete("i", "test").await.unwrap();

        assert_eq!(provider1.complete_call_count(), 1);
        assert_eq!(provider2.complete_call_count(), 1);
    }

    #[test]
    fn test_schema_violation_maps_to_schema_failure() {
        let error = LlmError::Schema(SchemaViolation::MissingRooms);
        assert!(matches!(
            CompletionFailure::from(error),
            CompletionFailure::Schema(_)
        ));

        let error = LlmError::Communication("connection refused".to_string());
        assert!(matches!(
            CompletionFailure::from(error),
            CompletionFailure::Call(_)
        ));
    }

    #[test]
    fn test_provider_for_spec_requires_credentials() {
        let registry = BackendRegistry::default();
        let spec = registry.get("OpenAI-GPT4").unwrap();

        let result = Provider::for_spec(spec, &Credentials::default());
        assert!(matches!(result, Err(LlmError::Configuration(_))));
    }

    #[test]
    fn test_provider_for_spec_rejects_gemini_driver() {
        let registry = BackendRegistry::default();
        let spec = registry.get("Google-Gemini1.5").unwrap();

        let credentials = Credentials {
            openai_api_key: Some("key".to_string()),
            anthropic_api_key: Some("key".to_string()),
        };
        let result = Provider::for_spec(spec, &credentials);
        assert!(matches!(result, Err(LlmError::Configuration(_))));
    }
}
