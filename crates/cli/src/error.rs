//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow / thiserror Display).

use agentic_config::ConfigError;

/// Structured exit codes for agentic-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A required setting is unset.
    ///
    /// Scripts should export the named variable or add it to `.env`.
    MissingConfiguration = 2,

    /// The env file could not be read or parsed.
    InvalidEnvFile = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingRequiredConfiguration(_) => ExitCode::MissingConfiguration,
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::InvalidEnvFile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configuration_maps_to_2() {
        let err = ConfigError::MissingRequiredConfiguration("OPENAI_API_KEY".to_string());
        assert_eq!(ExitCode::from(&err).as_i32(), 2);
    }

    #[test]
    fn test_dotenv_errors_map_to_invalid_env_file() {
        let parse = ConfigError::DotenvParse { error_index: 4 };
        let io = ConfigError::DotenvIo {
            kind: std::io::ErrorKind::PermissionDenied,
        };

        assert_eq!(ExitCode::from(&parse), ExitCode::InvalidEnvFile);
        assert_eq!(ExitCode::from(&io), ExitCode::InvalidEnvFile);
        assert_eq!(ExitCode::from(&ConfigError::DotenvUnknown).as_i32(), 3);
    }
}
