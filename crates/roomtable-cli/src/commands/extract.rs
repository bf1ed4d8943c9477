//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::{output, pdf};
use roomtable_extractor::{Pipeline, PipelineConfig};
use roomtable_llm::{BackendRegistry, Credentials};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Execute the extract command.
pub async fn execute_extract(args: ExtractArgs, config: PipelineConfig) -> Result<()> {
    let text = read_document(&args.input)?;

    if let Some(path) = &args.transcript_out {
        fs::write(path, &text)?;
        info!(path = %path.display(), "wrote transcript");
    }

    if text.trim().is_empty() {
        warn!("no embedded text extracted; the resulting table will be empty");
    }

    let registry = BackendRegistry::default();
    let credentials = Credentials::from_env();
    let pipeline = Pipeline::for_backend(&args.backend, &registry, &credentials, config)?;

    let outcome = pipeline.extract(&text).await?;

    let json_path = args
        .json_out
        .unwrap_or_else(|| args.input.with_extension("rooms.json"));
    output::write_json(&outcome.table, &json_path)?;

    if let Some(path) = &args.csv_out {
        output::write_csv(&outcome.table, path)?;
    }

    println!(
        "Extracted {} room(s) from {} chunk(s) via {} in {} ms -> {}",
        outcome.table.len(),
        outcome.metadata.chunk_count,
        outcome.metadata.backend_id,
        outcome.metadata.processing_time_ms,
        json_path.display()
    );

    Ok(())
}

fn read_document(input: &Path) -> Result<String> {
    let is_pdf = input
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        pdf::extract_text(input)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}
