//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load settings (see `main()`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agentic-cli")]
#[command(about = "Agentic AI System - inspect and validate runtime settings", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  agentic-cli check\n  agentic-cli show --output json\n  agentic-cli --env-file ./staging.env check\n  agentic-cli --no-dotenv show\n"
)]
pub struct Cli {
    /// Path to an env file merged before reading settings (defaults to ./.env)
    #[arg(long, global = true, env = "AGENTIC_ENV_FILE", value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Skip .env loading; read only the process environment
    #[arg(long, global = true)]
    pub no_dotenv: bool,

    /// Log output format (logs always go to STDERR; level via RUST_LOG)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify that all required settings are present
    Check,

    /// Show which settings are configured (secret values are never printed)
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
