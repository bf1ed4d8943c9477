//! Roomtable Domain Layer
//!
//! Core types for the lodging-inventory extraction pipeline.
//!
//! ## Key Concepts
//!
//! - **RoomRecord**: one row of lodging inventory - identity, pricing,
//!   seasonality and lifecycle flags for a single bookable room
//! - **RoomTable**: the ordered set of records produced by one document
//!   extraction; the unit of persistence
//! - **Field schema**: a static table of the record's required fields that
//!   drives both the JSON schema sent to schema-constrained backends and
//!   required-field validation of their responses
//! - **CompletionProvider**: the gateway contract every text-completion
//!   backend implements
//!
//! ## Architecture
//!
//! This crate holds the domain model only. Backend adapters live in
//! `roomtable-llm`; orchestration lives in `roomtable-extractor`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod schema;
pub mod traits;

// Re-exports for convenience
pub use record::{RoomRecord, RoomTable};
pub use schema::{room_table_schema, validate_table, FieldKind, SchemaViolation, ROOM_FIELDS};
pub use traits::{CompletionFailure, CompletionProvider};
