//! Result types for extraction runs

use roomtable_domain::RoomTable;

/// Result of one document extraction run
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    /// The validated table of room records
    pub table: RoomTable,

    /// The condensed text the structuring call consumed.
    ///
    /// Kept for transcripts and debugging; empty when the document had no
    /// extractable text.
    pub condensed_text: String,

    /// Metadata about the run
    pub metadata: ExtractionMetadata,
}

/// Metadata about an extraction run
#[derive(Debug, Clone)]
pub struct ExtractionMetadata {
    /// Backend identifier that served the run
    pub backend_id: String,

    /// Number of chunks the document was split into
    pub chunk_count: usize,

    /// Length of the condensed text in characters
    pub condensed_chars: usize,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u64,
}
