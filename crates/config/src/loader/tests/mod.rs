//! Tests for the settings loader builder.
//!
//! Responsibilities:
//! - Test builder overrides and required/optional key handling.
//! - Test environment variable reading and precedence.
//! - Test `.env` merging, the `DOTENV_DISABLED` gate, and error redaction.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `env_lock()` for additional synchronization.
//! - Every test that merges a `.env` file restores the touched variables afterwards.

use std::sync::{Mutex, MutexGuard, PoisonError};


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Acquire the env lock, tolerating poisoning from an earlier failed test.
pub fn lock_env() -> MutexGuard<'static, ()> {
    env_lock().lock().unwrap_or_else(PoisonError::into_inner)
}

/// Every variable the loader reads, for scoping with `temp_env`.
pub const LOADER_VARS: [&str; 5] = [
    "OPENAI_API_KEY",
    "ANTHROPIC_API_KEY",
    "TAVILY_API_KEY",
    "AGENTIC_ENV_FILE",
    "DOTENV_DISABLED",
];
