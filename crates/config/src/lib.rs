//! Settings for the Agentic AI System.
//!
//! This crate loads API keys from environment variables (optionally merged
//! from a local `.env` file) into an immutable [`Settings`] record that is
//! built once at startup and shared by reference.

pub mod constants;
mod loader;
mod settings;
mod shared;

pub use loader::{ConfigError, SettingsLoader, env_var_or_none};
pub use settings::{KeyStatus, Settings, SettingsSummary};
pub use shared::{SharedSettings, get, init, init_with};
