//! Shared test utilities for agentic-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure no provider keys leak in from the host environment.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `OPENAI_API_KEY` is set to "sk-test" unless overridden.

use assert_cmd::Command;

/// Returns a hermetic `agentic-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `OPENAI_API_KEY` is set to a dummy value to satisfy the required key.
/// - Optional keys and the env file override are cleared from the host.
pub fn agentic_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("agentic-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("OPENAI_API_KEY", "sk-test");

    // Clear potential host leakage
    cmd.env_remove("ANTHROPIC_API_KEY")
        .env_remove("TAVILY_API_KEY")
        .env_remove("AGENTIC_ENV_FILE")
        .env_remove("RUST_LOG");

    cmd
}
