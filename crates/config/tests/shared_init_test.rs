//! Integration tests for the process-wide settings instance.
//!
//! Each integration test file is its own process, so the shared slot starts
//! empty here. Everything runs in a single test to keep ordering explicit.

use agentic_config::{SettingsLoader, get, init, init_with};
use secrecy::ExposeSecret;

#[test]
fn test_init_returns_identical_shared_instance() {
    temp_env::with_vars(
        [
            ("OPENAI_API_KEY", Some("sk-abc")),
            ("ANTHROPIC_API_KEY", None),
            ("TAVILY_API_KEY", None),
            ("DOTENV_DISABLED", Some("1")),
        ],
        || {
            assert!(get().is_none(), "nothing initialized yet");

            let first = init().expect("required key is set");
            let second = init().expect("second call reuses the instance");
            assert!(std::ptr::eq(first, second));

            // A different loader does not rebuild an initialized instance
            let third = init_with(SettingsLoader::new().with_openai_api_key("sk-other".into()))
                .unwrap();
            assert!(std::ptr::eq(first, third));
            assert_eq!(third.openai_api_key().expose_secret(), "sk-abc");

            assert!(std::ptr::eq(first, get().unwrap()));
        },
    );
}
