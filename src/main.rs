//! Squares - unified CLI
//!
//! Interactive terminal play or the HTTP engine, depending on subcommand.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use squares::ServerConfig;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play => run_play(),
        Command::Http {
            config,
            host,
            port,
            static_dir,
        } => run_http_server(config, host, port, static_dir).await,
    }
}

/// Logs go to stderr so stdout stays the game channel.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive command interpreter on stdin/stdout
fn run_play() -> Result<()> {
    initialize_tracing("warn");
    info!("Starting interactive session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    squares::run_repl(stdin.lock(), stdout.lock())
}

/// Run the HTTP server
#[instrument(skip_all)]
async fn run_http_server(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    static_dir: Option<PathBuf>,
) -> Result<()> {
    initialize_tracing("info,squares=debug");

    let config = match config_path {
        Some(path) => ServerConfig::from_file(&path)?,
        None => {
            info!("No config file given, using defaults");
            ServerConfig::default()
        }
    };
    let config = config.with_overrides(host, port, static_dir);

    info!(?config, "Starting squares HTTP server");
    squares::serve(&config).await
}
