//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Roomtable - extract lodging-inventory tables from PDF documents.
#[derive(Debug, Parser)]
#[command(name = "roomtable")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Pipeline configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract a room table from a PDF (or plain-text) document
    Extract(ExtractArgs),

    /// Render a stored room-table JSON file as CSV
    Csv(CsvArgs),

    /// List configured backends and their context limits
    Backends,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Input document (.pdf is parsed for embedded text; anything else is
    /// read as plain text)
    pub input: PathBuf,

    /// Backend identifier to run against
    #[arg(short, long, default_value = "OpenAI-GPT4")]
    pub backend: String,

    /// Where to write the extracted table as JSON
    /// (defaults to the input path with a .rooms.json extension)
    #[arg(long)]
    pub json_out: Option<PathBuf>,

    /// Also write the table as CSV
    #[arg(long)]
    pub csv_out: Option<PathBuf>,

    /// Also write the raw extracted text
    #[arg(long)]
    pub transcript_out: Option<PathBuf>,
}

/// Arguments for the csv command.
#[derive(Debug, Parser)]
pub struct CsvArgs {
    /// Stored room-table JSON file
    pub input: PathBuf,

    /// Output CSV path (defaults to the input path with a .csv extension)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}
