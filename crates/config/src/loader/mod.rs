//! Settings loader for environment variables and the `.env` override file.
//!
//! Responsibilities:
//! - Merge the optional `.env` file into the process environment.
//! - Read the recognized keys and enforce presence of required ones.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Holding the process-wide instance (see `shared.rs`).
//! - Validating key formats; presence is the only check.
//!
//! Invariants / Assumptions:
//! - Real environment variables take precedence over `.env` values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::SettingsLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
