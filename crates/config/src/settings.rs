//! The immutable settings record.
//!
//! Responsibilities:
//! - Hold the product identity constants and the recognized API keys.
//! - Expose read-only accessors; fields cannot be mutated after construction.
//! - Provide a masked, serializable summary for display.
//!
//! Does NOT handle:
//! - Reading the environment or `.env` files (see `loader`).
//! - One-time process-wide initialization (see `shared`).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString`, so `Debug` output is redacted.
//! - An unset optional key is `None`, never an empty string.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::constants::{
    ANTHROPIC_API_KEY_VAR, OPENAI_API_KEY_VAR, PROJECT_NAME, PROJECT_VERSION, TAVILY_API_KEY_VAR,
};

/// Process settings loaded from the environment.
///
/// Built by [`crate::SettingsLoader`] and usually shared through
/// [`crate::init`]. Components should take `&Settings` as a parameter
/// rather than reaching for the shared instance themselves.
#[derive(Debug, Clone)]
pub struct Settings {
    openai_api_key: SecretString,
    anthropic_api_key: Option<SecretString>,
    tavily_api_key: Option<SecretString>,
}

impl Settings {
    pub(crate) fn new(
        openai_api_key: SecretString,
        anthropic_api_key: Option<SecretString>,
        tavily_api_key: Option<SecretString>,
    ) -> Self {
        Self {
            openai_api_key,
            anthropic_api_key,
            tavily_api_key,
        }
    }

    /// Product name.
    pub fn project_name(&self) -> &'static str {
        PROJECT_NAME
    }

    /// Product version.
    pub fn project_version(&self) -> &'static str {
        PROJECT_VERSION
    }

    /// The required OpenAI API key.
    pub fn openai_api_key(&self) -> &SecretString {
        &self.openai_api_key
    }

    /// The Anthropic API key, if configured.
    pub fn anthropic_api_key(&self) -> Option<&SecretString> {
        self.anthropic_api_key.as_ref()
    }

    /// The Tavily search API key, if configured.
    pub fn tavily_api_key(&self) -> Option<&SecretString> {
        self.tavily_api_key.as_ref()
    }

    /// Build a display-safe summary. Secret values are replaced by their length.
    pub fn summary(&self) -> SettingsSummary {
        SettingsSummary {
            project_name: PROJECT_NAME.to_string(),
            project_version: PROJECT_VERSION.to_string(),
            keys: vec![
                KeyStatus::new(OPENAI_API_KEY_VAR, true, Some(&self.openai_api_key)),
                KeyStatus::new(ANTHROPIC_API_KEY_VAR, false, self.anthropic_api_key()),
                KeyStatus::new(TAVILY_API_KEY_VAR, false, self.tavily_api_key()),
            ],
        }
    }
}

/// Masked view of [`Settings`], safe to print or serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSummary {
    pub project_name: String,
    pub project_version: String,
    pub keys: Vec<KeyStatus>,
}

/// Presence information for a single key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyStatus {
    /// Environment variable name.
    pub name: &'static str,
    pub required: bool,
    pub configured: bool,
    /// `<N chars>` when configured, never the value itself.
    pub redacted: Option<String>,
}

impl KeyStatus {
    fn new(name: &'static str, required: bool, secret: Option<&SecretString>) -> Self {
        Self {
            name,
            required,
            configured: secret.is_some(),
            redacted: secret.map(redact_secret),
        }
    }
}

fn redact_secret(secret: &SecretString) -> String {
    format!("<{} chars>", secret.expose_secret().chars().count())
}
