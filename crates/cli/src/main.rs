//! Agentic CLI - inspect and validate runtime settings.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize the process-wide settings exactly once at startup.
//! - Pass the settings by reference to the selected command.
//!
//! Invariants:
//! - Settings are initialized before any command runs; a missing required key
//!   exits with `ExitCode::MissingConfiguration` and no command output.
//! - Logs go to STDERR so command output on STDOUT stays machine-readable.

mod args;
mod commands;
mod dispatch;
mod error;

use agentic_config::SettingsLoader;
use args::{Cli, LogFormat};
use clap::Parser;
use dispatch::run_command;
use error::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let mut loader = SettingsLoader::new();

    // Blank/whitespace-only values are ignored to keep the default ./.env
    if let Some(path) = &cli.env_file
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_dotenv_path(path.clone());
    }
    if cli.no_dotenv {
        loader = loader.without_dotenv();
    }

    let settings = match agentic_config::init_with(loader) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Settings initialization failed");
            eprintln!("Failed to load settings: {}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = run_command(&cli.command, settings, &mut stdout.lock()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }
}
