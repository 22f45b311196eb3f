//! `show` command: print the masked settings summary.

use agentic_config::{Settings, SettingsSummary};
use anyhow::{Context, Result};
use std::io::Write;

use crate::args::OutputFormat;

pub fn run(settings: &Settings, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let summary = settings.summary();
    match format {
        OutputFormat::Table => write_table(&summary, out),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&summary).context("Failed to serialize settings")?;
            writeln!(out, "{json}")?;
            Ok(())
        }
    }
}

fn write_table(summary: &SettingsSummary, out: &mut impl Write) -> Result<()> {
    let width = summary
        .keys
        .iter()
        .map(|k| k.name.len())
        .max()
        .unwrap_or(0)
        .max("KEY".len());

    writeln!(out, "{} {}", summary.project_name, summary.project_version)?;
    writeln!(out, "{:<width$}  {:<8}  STATUS", "KEY", "REQUIRED")?;
    for key in &summary.keys {
        let required = if key.required { "yes" } else { "no" };
        let status = match &key.redacted {
            Some(redacted) => format!("configured {redacted}"),
            None => "not set".to_string(),
        };
        writeln!(out, "{:<width$}  {:<8}  {}", key.name, required, status)?;
    }
    Ok(())
}
