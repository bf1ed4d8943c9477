//! Trait definitions for external interactions
//!
//! These traits define the boundary between the extraction pipeline and the
//! text-completion backends. Backend implementations live in `roomtable-llm`.

use crate::record::RoomTable;
use crate::schema::SchemaViolation;
use std::future::Future;

/// Classification of a failed completion call.
///
/// Every provider error converts into one of these so callers can keep
/// schema failures (a response that parsed but is missing required fields)
/// distinct from call failures, without knowing the provider's error type.
#[derive(Debug)]
pub enum CompletionFailure {
    /// The backend call itself failed: network, HTTP status, timeout at the
    /// transport, or a response that could not be parsed at all
    Call(String),

    /// The backend answered with well-formed JSON that does not populate the
    /// full record field set
    Schema(SchemaViolation),
}

/// A text-completion backend.
///
/// Two request modes: free-text completion for condensing document chunks,
/// and a schema-constrained mode that must yield a fully populated
/// [`RoomTable`] or fail. Providers validate structured responses before
/// returning them; a partially populated table never escapes this boundary.
pub trait CompletionProvider {
    /// Error type for completion operations
    type Error: Into<CompletionFailure> + Send + 'static;

    /// Send one free-text completion request.
    ///
    /// `instruction` is the role-scoped system prompt; `content` is the user
    /// content (a document chunk, or a full condensed text).
    fn complete(
        &self,
        instruction: &str,
        content: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Send one schema-constrained completion request.
    ///
    /// The response either satisfies the full record schema or the call
    /// fails; callers never see partial records.
    fn complete_structured(
        &self,
        instruction: &str,
        content: &str,
    ) -> impl Future<Output = Result<RoomTable, Self::Error>> + Send;
}
