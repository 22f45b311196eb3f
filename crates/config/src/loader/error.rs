//! Error types for settings loading.
//!
//! Responsibilities:
//! - Define error variants for all settings loading failures.
//!
//! Invariants:
//! - Missing-key errors name the variable, never its (absent) value.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during settings loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required key was unset, empty, or whitespace-only.
    #[error("Missing required configuration: {0} environment variable not set")]
    MissingRequiredConfiguration(String),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Name of the missing key, if this is a missing-configuration error.
    pub fn missing_key(&self) -> Option<&str> {
        match self {
            ConfigError::MissingRequiredConfiguration(key) => Some(key),
            _ => None,
        }
    }
}
