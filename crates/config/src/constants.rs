//! Centralized constants for the Agentic AI System workspace.
//!
//! Product identity is baked in at build time; everything else here names
//! the environment variables the settings loader recognizes.

// =============================================================================
// Product Identity
// =============================================================================

/// Human-readable product name.
pub const PROJECT_NAME: &str = "Agentic AI System";

/// Product version, taken from the workspace manifest at compile time.
pub const PROJECT_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Recognized Keys
// =============================================================================

/// Primary model provider key. Required.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Secondary model provider key. Optional, defaults to no value.
pub const ANTHROPIC_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Web search provider key. Optional, defaults to no value.
pub const TAVILY_API_KEY_VAR: &str = "TAVILY_API_KEY";

/// Keys whose absence aborts initialization.
pub const REQUIRED_KEYS: &[&str] = &[OPENAI_API_KEY_VAR];

/// Keys that fall back to a default when absent.
pub const OPTIONAL_KEYS: &[&str] = &[ANTHROPIC_API_KEY_VAR, TAVILY_API_KEY_VAR];

// =============================================================================
// Override File
// =============================================================================

/// Default override file name, resolved against the working directory.
pub const DOTENV_FILE_NAME: &str = ".env";

/// Set to `1` or `true` to skip override file loading entirely.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Alternate override file path.
pub const ENV_FILE_VAR: &str = "AGENTIC_ENV_FILE";
