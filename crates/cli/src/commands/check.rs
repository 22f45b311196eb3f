//! `check` command: confirm that settings initialized.
//!
//! Missing required keys never reach this point; `main()` exits with a
//! configuration error first. This reports which optional keys fell back
//! to their defaults.

use agentic_config::Settings;
use anyhow::Result;
use std::io::Write;

pub fn run(settings: &Settings, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "configuration OK: {} {}",
        settings.project_name(),
        settings.project_version()
    )?;

    for key in settings.summary().keys.iter().filter(|k| !k.configured) {
        tracing::debug!(key = key.name, "Optional key using default");
        writeln!(out, "  {} not set (optional)", key.name)?;
    }
    Ok(())
}
