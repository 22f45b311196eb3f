//! Environment variable reading for settings.
//!
//! Responsibilities:
//! - Read the recognized keys and apply them to a SettingsLoader instance.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Presence checking of required keys (see builder.rs).
//! - .env file loading (handled by SettingsLoader::load_dotenv).
//!
//! Invariants:
//! - Values already set on the loader (builder overrides) are not replaced.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use secrecy::SecretString;

use super::builder::SettingsLoader;
use crate::constants::{ANTHROPIC_API_KEY_VAR, OPENAI_API_KEY_VAR, TAVILY_API_KEY_VAR};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn secret_var(key: &str) -> Option<SecretString> {
    env_var_or_none(key).map(|value| SecretString::new(value.into()))
}

/// Apply environment variable values to the loader.
pub fn apply_env(loader: &mut SettingsLoader) {
    if loader.openai_api_key().is_none() {
        loader.set_openai_api_key(secret_var(OPENAI_API_KEY_VAR));
    }
    if loader.anthropic_api_key().is_none() {
        loader.set_anthropic_api_key(secret_var(ANTHROPIC_API_KEY_VAR));
    }
    if loader.tavily_api_key().is_none() {
        loader.set_tavily_api_key(secret_var(TAVILY_API_KEY_VAR));
    }
}
