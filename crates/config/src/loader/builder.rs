//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `SettingsLoader` that merges builder overrides,
//!   environment variables, and the optional `.env` override file.
//! - Build the final `Settings`, enforcing presence of required keys.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Sharing the built settings process-wide (see shared.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `.env` values never override variables already present in the process environment.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before the file is read.

use secrecy::SecretString;
use std::path::{Path, PathBuf};

use super::env::{apply_env, env_var_or_none};
use super::error::ConfigError;
use crate::constants::{
    ANTHROPIC_API_KEY_VAR, DOTENV_DISABLED_VAR, DOTENV_FILE_NAME, ENV_FILE_VAR, OPENAI_API_KEY_VAR,
    TAVILY_API_KEY_VAR,
};
use crate::settings::Settings;

/// Settings loader that builds [`Settings`] from the environment.
#[derive(Default)]
pub struct SettingsLoader {
    openai_api_key: Option<SecretString>,
    anthropic_api_key: Option<SecretString>,
    tavily_api_key: Option<SecretString>,
    dotenv_path: Option<PathBuf>,
    skip_dotenv: bool,
}

impl SettingsLoader {
    /// Create a new settings loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Skip `.env` loading regardless of `DOTENV_DISABLED`.
    pub fn without_dotenv(mut self) -> Self {
        self.skip_dotenv = true;
        self
    }

    /// Override the `.env` file location.
    ///
    /// Unlike the default location, an explicitly chosen file must exist.
    pub fn with_dotenv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dotenv_path = Some(path.into());
        self
    }

    /// Resolve the override file path: builder, then `AGENTIC_ENV_FILE`, then `./.env`.
    ///
    /// The boolean is true when the path was chosen explicitly.
    fn resolve_dotenv_path(&self) -> (PathBuf, bool) {
        if let Some(path) = &self.dotenv_path {
            return (path.clone(), true);
        }
        match env_var_or_none(ENV_FILE_VAR) {
            Some(path) => (PathBuf::from(path), true),
            None => (PathBuf::from(DOTENV_FILE_NAME), false),
        }
    }

    /// Merge variables from the `.env` file into the process environment.
    ///
    /// Variables already set in the process environment are left untouched.
    /// The whole file is parsed before anything is merged, so a file that
    /// fails to parse leaves the environment unchanged.
    /// If `DOTENV_DISABLED` is set to "true" or "1", or `without_dotenv()` was
    /// called, no file is read.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The file exists but cannot be read (`ConfigError::DotenvIo`)
    /// - An explicitly chosen file does not exist (`ConfigError::DotenvIo`)
    ///
    /// A missing file at the default location is silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if self.skip_dotenv || Self::dotenv_disabled() {
            tracing::debug!("Skipping .env loading");
            return Ok(self);
        }

        let (path, explicit) = self.resolve_dotenv_path();
        match Self::merge_validated(&path) {
            Ok(entries) => {
                tracing::debug!(path = %path.display(), entries, "Merged .env file into environment");
                Ok(self)
            }
            Err(e) if !explicit && Self::is_not_found(&e) => {
                tracing::debug!(path = %path.display(), "No .env file found");
                Ok(self)
            }
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Parse every line of `path`, then merge it. Returns the number of entries.
    fn merge_validated(path: &Path) -> Result<usize, dotenvy::Error> {
        let entries = dotenvy::from_path_iter(path)?.collect::<Result<Vec<_>, _>>()?;
        dotenvy::from_path(path)?;
        Ok(entries.len())
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read recognized keys from environment variables.
    ///
    /// Keys already set through builder methods are kept.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Set the OpenAI API key. Blank values are ignored.
    pub fn with_openai_api_key(mut self, key: String) -> Self {
        self.openai_api_key = non_blank_secret(key);
        self
    }

    /// Set the Anthropic API key. Blank values are ignored.
    pub fn with_anthropic_api_key(mut self, key: String) -> Self {
        self.anthropic_api_key = non_blank_secret(key);
        self
    }

    /// Set the Tavily API key. Blank values are ignored.
    pub fn with_tavily_api_key(mut self, key: String) -> Self {
        self.tavily_api_key = non_blank_secret(key);
        self
    }

    /// Build the final settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingRequiredConfiguration` naming the first
    /// required key that is unset.
    pub fn build(self) -> Result<Settings, ConfigError> {
        let openai_api_key = self.openai_api_key.ok_or_else(|| {
            ConfigError::MissingRequiredConfiguration(OPENAI_API_KEY_VAR.to_string())
        })?;

        for (key, value) in [
            (ANTHROPIC_API_KEY_VAR, &self.anthropic_api_key),
            (TAVILY_API_KEY_VAR, &self.tavily_api_key),
        ] {
            if value.is_none() {
                tracing::debug!(key, "Optional key not set, using default");
            }
        }

        Ok(Settings::new(
            openai_api_key,
            self.anthropic_api_key,
            self.tavily_api_key,
        ))
    }

    /// The override file path `load_dotenv()` would read.
    pub fn dotenv_path(&self) -> PathBuf {
        self.resolve_dotenv_path().0
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn openai_api_key(&self) -> Option<&SecretString> {
        self.openai_api_key.as_ref()
    }

    pub(crate) fn anthropic_api_key(&self) -> Option<&SecretString> {
        self.anthropic_api_key.as_ref()
    }

    pub(crate) fn tavily_api_key(&self) -> Option<&SecretString> {
        self.tavily_api_key.as_ref()
    }

    pub(crate) fn set_openai_api_key(&mut self, key: Option<SecretString>) {
        self.openai_api_key = key;
    }

    pub(crate) fn set_anthropic_api_key(&mut self, key: Option<SecretString>) {
        self.anthropic_api_key = key;
    }

    pub(crate) fn set_tavily_api_key(&mut self, key: Option<SecretString>) {
        self.tavily_api_key = key;
    }
}

fn non_blank_secret(value: String) -> Option<SecretString> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(SecretString::new(trimmed.into()))
    }
}
