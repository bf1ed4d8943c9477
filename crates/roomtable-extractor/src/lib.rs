//! Roomtable Extractor
//!
//! Turns unbounded document text into a validated lodging-inventory table
//! through a bounded sequence of backend calls.
//!
//! # Architecture
//!
//! ```text
//! Text → Chunker → per-chunk condensation → one structured call → RoomTable
//! ```
//!
//! The chunker splits the document into paragraph-aligned segments sized to
//! the backend's context budget. Every chunk is condensed with the condense
//! instruction; the summaries, reassembled in document order, feed a single
//! schema-constrained call that produces the validated table.
//!
//! # Key Properties
//!
//! - **No partial output**: the first failed call aborts the run; a table is
//!   returned whole and validated or not at all
//! - **Order preservation**: summaries concatenate in chunk order regardless
//!   of how concurrently they were obtained
//! - **Fail-fast configuration**: unknown backends are rejected before any
//!   network activity
//! - **Empty in, empty out**: a document with no extractable text yields an
//!   empty table without a single backend call
//!
//! # Example Usage
//!
//! ```no_run
//! use roomtable_extractor::{Pipeline, PipelineConfig};
//! use roomtable_llm::{BackendRegistry, Credentials};
//!
//! # async fn example() -> Result<(), roomtable_extractor::PipelineError> {
//! let pipeline = Pipeline::for_backend(
//!     "OpenAI-GPT4",
//!     &BackendRegistry::default(),
//!     &Credentials::from_env(),
//!     PipelineConfig::default(),
//! )?;
//!
//! let outcome = pipeline.extract("Room A: Queen bed, $100/night").await?;
//! println!("{} room(s) extracted", outcome.table.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod chunking;
mod config;
mod error;
mod pipeline;
mod prompt;
mod types;

#[cfg(test)]
mod tests;

pub use chunking::TextChunker;
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::Pipeline;
pub use types::{ExtractionMetadata, ExtractionOutcome};
