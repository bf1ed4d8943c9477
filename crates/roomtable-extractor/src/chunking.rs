//! Paragraph-aligned text chunking sized to a backend context budget

/// Splits document text into chunks bounded by a character budget.
///
/// Sizing is character-based. Backends meter context in tokens, so the
/// budget is a heuristic; callers should size limits with headroom for the
/// mismatch.
pub struct TextChunker {
    limit: usize,
}

impl TextChunker {
    /// Create a chunker for the given character budget.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Chunk the given text.
    ///
    /// Paragraphs are newline-delimited and accumulate greedily: when the
    /// next paragraph plus its separator would push the buffer past the
    /// limit, the buffer is sealed (trimmed) and the paragraph starts a new
    /// chunk. Content is never dropped: a single paragraph longer than the
    /// limit becomes its own oversized chunk rather than being truncated.
    ///
    /// Deterministic, and order-preserving: concatenating the chunks
    /// reproduces the input's paragraph sequence.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();

        for paragraph in text.split('\n') {
            if current.len() + paragraph.len() + 1 <= self.limit {
                if !current.is_empty() {
                    current.push('\n');
                }
                current.push_str(paragraph);
            } else {
                if !current.is_empty() {
                    chunks.push(current.trim().to_string());
                }
                current = paragraph.to_string();
            }
        }

        if !current.is_empty() {
            chunks.push(current.trim().to_string());
        }

        chunks
    }
}
