use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::fs;
use std::path::PathBuf;

mod analyze;
mod client;
mod config;
mod language;
mod prompt;

use analyze::{analyze, AnalysisInput};
use client::{AnalysisError, CompletionClient};
use config::ClientConfig;

/// Send a source file to a chat-completion endpoint for analysis and print
/// the raw response.
#[derive(Parser, Debug)]
#[command(name = "codeprobe", version, about)]
struct Cli {
    /// Source file to analyze; the language is derived from its extension
    file: PathBuf,

    /// Analyze only this snippet instead of the whole file (the file still
    /// determines the language)
    #[arg(long)]
    selection: Option<String>,

    /// Override the model name from the environment
    #[arg(long)]
    model: Option<String>,

    /// Override the endpoint URL from the environment
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(endpoint) = cli.endpoint {
        config.endpoint_url = endpoint;
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout = std::time::Duration::from_secs(secs);
    }

    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("could not read {:?}", cli.file))?;
    let file_extension = cli
        .file
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_string);

    let input = AnalysisInput {
        file_extension,
        text,
        selection: cli.selection,
    };

    let language = input.language();
    println!(
        "{} {} ({} characters)",
        "Analyzing".green().bold(),
        language,
        input.effective_source().len()
    );

    let client = CompletionClient::new(config);
    match analyze(&input, &client).await {
        Ok(body) => {
            println!("{}", body);
            Ok(())
        }
        Err(AnalysisError::UnsupportedLanguage(what)) => {
            eprintln!("{}: unsupported language ({})", "Skipped".yellow().bold(), what);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}
