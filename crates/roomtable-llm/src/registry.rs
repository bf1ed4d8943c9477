//! Backend registry
//!
//! Maps backend identifiers to a driver, model name and context limit. The
//! default table carries the recognized hosted backends; deployments can
//! serialize their own. Unknown identifiers are a hard error at lookup, so
//! misconfiguration surfaces before any network call.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Wire adapter a backend is served by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    /// OpenAI chat-completions API
    OpenAi,
    /// Anthropic messages API
    Anthropic,
    /// Google Gemini (recognized, no adapter yet)
    Gemini,
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Driver::OpenAi => "openai",
            Driver::Anthropic => "anthropic",
            Driver::Gemini => "gemini",
        };
        f.pad(name)
    }
}

/// One backend entry: how to reach it and how much input it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSpec {
    /// Wire adapter
    pub driver: Driver,

    /// Concrete model identifier sent on the wire
    pub model: String,

    /// Maximum input size per call, in characters.
    ///
    /// Backends meter in tokens; this character budget is the sizing
    /// heuristic chunking works against.
    pub context_limit: usize,
}

/// The table of configured backends, keyed by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendRegistry {
    backends: BTreeMap<String, BackendSpec>,
}

impl BackendRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self { backends: BTreeMap::new() }
    }

    /// Look up a backend by identifier.
    pub fn get(&self, id: &str) -> Option<&BackendSpec> {
        self.backends.get(id)
    }

    /// Context limit for a backend, if it is configured.
    pub fn context_limit(&self, id: &str) -> Option<usize> {
        self.get(id).map(|spec| spec.context_limit)
    }

    /// Add or replace a backend entry.
    pub fn register(&mut self, id: impl Into<String>, spec: BackendSpec) {
        self.backends.insert(id.into(), spec);
    }

    /// Iterate over the configured backends in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BackendSpec)> {
        self.backends.iter().map(|(id, spec)| (id.as_str(), spec))
    }

    /// Number of configured backends.
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    /// Whether no backends are configured.
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}

impl Default for BackendRegistry {
    /// The recognized hosted backends and their context budgets.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(
            "OpenAI-GPT4",
            BackendSpec {
                driver: Driver::OpenAi,
                model: "gpt-4o-2024-08-06".to_string(),
                context_limit: 128_000,
            },
        );
        registry.register(
            "Anthropic-Sonnet3.5",
            BackendSpec {
                driver: Driver::Anthropic,
                model: "claude-3-5-sonnet-20240620".to_string(),
                context_limit: 200_000,
            },
        );
        registry.register(
            "Google-Gemini1.5",
            BackendSpec {
                driver: Driver::Gemini,
                model: "gemini-1.5-pro".to_string(),
                context_limit: 1_000_000,
            },
        );
        registry
    }
}
