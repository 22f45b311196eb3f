//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route the parsed subcommand to its handler with the shared settings.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Settings initialization (see `main()`).

use agentic_config::Settings;
use anyhow::Result;
use std::io::Write;

use crate::args::Commands;
use crate::commands;

/// Dispatch a subcommand to its handler, writing the report to `out`.
pub(crate) fn run_command(
    command: &Commands,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Commands::Check => commands::check::run(settings, out),
        Commands::Show { output } => commands::show::run(settings, *output, out),
    }
}
