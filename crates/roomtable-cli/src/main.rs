//! Roomtable CLI - extract lodging-inventory tables from PDF documents.

use clap::Parser;
use roomtable_cli::{commands, Cli, CliError, Command};
use roomtable_extractor::PipelineConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            PipelineConfig::from_toml(&contents).map_err(CliError::Config)?
        }
        None => PipelineConfig::default(),
    };

    match cli.command {
        Command::Extract(args) => commands::execute_extract(args, config).await?,
        Command::Csv(args) => commands::execute_render_csv(args)?,
        Command::Backends => commands::execute_backends()?,
    }

    Ok(())
}
