//! Command-line interface for squares.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Squares - place tokens, make a square, win
#[derive(Parser, Debug)]
#[command(name = "squares")]
#[command(about = "Square-forming board game with an interactive CLI and an HTTP engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (GAME / MOVE / BOARD / HELP / EXIT)
    Play,

    /// Run the HTTP engine and web front end
    Http {
        /// TOML config file (host, port, static_dir)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory with the web front end (overrides config)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}
