//! Error types for the extraction pipeline

use roomtable_domain::SchemaViolation;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Backend identifier absent from the registry
    #[error("Unknown backend: {0}")]
    UnknownBackend(String),

    /// Invalid pipeline configuration or provider construction failure
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A backend call failed
    #[error("Backend call failed: {0}")]
    Backend(String),

    /// A backend call exceeded the per-call timeout
    #[error("Backend call timed out")]
    Timeout,

    /// The structured response did not populate the full field set
    #[error("Validation failed: {0}")]
    Validation(#[from] SchemaViolation),

    /// Condensed text still exceeds the backend context limit
    #[error("Condensed text ({length} chars) exceeds the context limit ({limit})")]
    CondensedTooLarge {
        /// Length of the condensed text in characters
        length: usize,
        /// Context limit of the selected backend
        limit: usize,
    },
}
