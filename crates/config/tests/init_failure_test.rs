//! Integration test for a failed process-wide initialization.

use agentic_config::{ConfigError, get, init};

#[test]
fn test_init_fails_without_required_key_and_stays_empty() {
    temp_env::with_vars(
        [
            ("OPENAI_API_KEY", None::<&str>),
            ("DOTENV_DISABLED", Some("1")),
        ],
        || {
            match init() {
                Err(ConfigError::MissingRequiredConfiguration(key)) => {
                    assert_eq!(key, "OPENAI_API_KEY");
                }
                Err(other) => panic!("Expected MissingRequiredConfiguration, got {}", other),
                Ok(_) => panic!("init should fail without OPENAI_API_KEY"),
            }
            assert!(get().is_none(), "failed init must not publish settings");
        },
    );

    temp_env::with_vars(
        [
            ("OPENAI_API_KEY", Some("sk-late")),
            ("DOTENV_DISABLED", Some("1")),
        ],
        || {
            assert!(init().is_ok(), "init can be retried after a failure");
        },
    );
}
