//! PDF text extraction
//!
//! Embedded text only: pages without a text layer (scanned images)
//! contribute empty strings, and no OCR is attempted. Pages are joined with
//! newlines, which is also the paragraph delimiter the chunker splits on.

use crate::error::{CliError, Result};
use lopdf::Document;
use std::path::Path;

/// Extract the embedded text of every page of a PDF file.
pub fn extract_text(path: &Path) -> Result<String> {
    let document = Document::load(path)
        .map_err(|e| CliError::Pdf(format!("failed to load {}: {}", path.display(), e)))?;
    extract_pages(&document)
}

/// Extract the embedded text of every page from in-memory PDF bytes.
pub fn extract_text_from_bytes(bytes: &[u8]) -> Result<String> {
    let document =
        Document::load_mem(bytes).map_err(|e| CliError::Pdf(format!("failed to parse PDF: {}", e)))?;
    extract_pages(&document)
}

fn extract_pages(document: &Document) -> Result<String> {
    let mut pages = Vec::new();
    for (page_number, _) in document.get_pages() {
        let text = document
            .extract_text(&[page_number])
            .map_err(|e| CliError::Pdf(format!("failed to extract page {}: {}", page_number, e)))?;
        pages.push(text);
    }
    Ok(pages.join("\n"))
}
