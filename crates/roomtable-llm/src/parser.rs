//! Parse backend output into a validated room table

use crate::LlmError;
use roomtable_domain::{schema, RoomTable};
use serde_json::Value;

/// Parse a backend response into a validated [`RoomTable`].
///
/// Handles responses wrapped in markdown code fences. Malformed JSON and
/// type mismatches are an invalid-response error; well-formed JSON missing a
/// required field is a schema violation, so the two failure modes stay
/// distinguishable upstream.
pub fn parse_table_response(response: &str) -> Result<RoomTable, LlmError> {
    let json_str = extract_json(response)?;

    let value: Value = serde_json::from_str(&json_str)
        .map_err(|e| LlmError::InvalidResponse(format!("JSON parse error: {}", e)))?;

    schema::validate_table(&value)?;

    serde_json::from_value(value)
        .map_err(|e| LlmError::InvalidResponse(format!("record deserialization failed: {}", e)))
}

/// Extract JSON from a response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, LlmError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(LlmError::InvalidResponse("Empty code block".to_string()));
        }

        // Skip first line (```json or ```) and last line (```)
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}
