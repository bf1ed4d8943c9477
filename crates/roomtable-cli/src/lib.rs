//! Roomtable CLI library.
//!
//! This library provides the core functionality for the roomtable
//! command-line interface: argument parsing, PDF text extraction, command
//! execution, and table persistence (JSON and CSV).

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod pdf;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
