//! One-time, process-wide settings initialization.
//!
//! Responsibilities:
//! - Build the shared `Settings` exactly once and hand out `&'static` references.
//! - Guard construction against concurrent duplicate initialization.
//!
//! Does NOT handle:
//! - Deciding where values come from (see `loader`).
//!
//! Invariants:
//! - Once set, the shared instance is never replaced or dropped before exit.
//! - A failed initialization leaves the slot empty; a later call may retry.
//! - Readers never lock; only the first initializers contend on the mutex.

use std::sync::{Mutex, OnceLock, PoisonError};

use crate::loader::{ConfigError, SettingsLoader};
use crate::settings::Settings;

/// A write-once settings slot.
///
/// The process-wide instance lives behind [`init`] and [`get`]; separate
/// slots are useful where an isolated lifetime is wanted, such as tests.
#[derive(Debug)]
pub struct SharedSettings {
    cell: OnceLock<Settings>,
    init_lock: Mutex<()>,
}

impl Default for SharedSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedSettings {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// The settings, if the slot has been initialized.
    pub fn get(&self) -> Option<&Settings> {
        self.cell.get()
    }

    /// Return the stored settings, running `init` to build them on first use.
    ///
    /// Concurrent callers block while the first one builds; `init` runs at
    /// most once per successful initialization.
    ///
    /// # Errors
    ///
    /// Propagates the error from `init`. The slot stays empty in that case.
    pub fn get_or_try_init<F>(&self, init: F) -> Result<&Settings, ConfigError>
    where
        F: FnOnce() -> Result<Settings, ConfigError>,
    {
        if let Some(settings) = self.cell.get() {
            return Ok(settings);
        }

        // Poisoning guards no data here.
        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(settings) = self.cell.get() {
            return Ok(settings);
        }

        let settings = init()?;
        tracing::info!(
            project = settings.project_name(),
            version = settings.project_version(),
            "Settings initialized"
        );
        Ok(self.cell.get_or_init(|| settings))
    }
}

static SHARED: SharedSettings = SharedSettings::new();

/// Initialize the process-wide settings from `.env` and the environment.
///
/// Call once from the startup sequence and pass the returned reference to
/// the components that need it. Later calls return the same instance.
///
/// # Errors
///
/// Returns `ConfigError::MissingRequiredConfiguration` when a required key is
/// unset, or a dotenv error when the override file is unreadable.
pub fn init() -> Result<&'static Settings, ConfigError> {
    init_with(SettingsLoader::new())
}

/// Like [`init`], but with a preconfigured loader (custom `.env` path, overrides).
///
/// The loader is ignored when the shared settings already exist.
pub fn init_with(loader: SettingsLoader) -> Result<&'static Settings, ConfigError> {
    SHARED.get_or_try_init(|| loader.load_dotenv()?.from_env().build())
}

/// The process-wide settings, if [`init`] has succeeded.
pub fn get() -> Option<&'static Settings> {
    SHARED.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    fn settings_with_key(key: &str) -> Result<Settings, ConfigError> {
        SettingsLoader::new()
            .with_openai_api_key(key.to_string())
            .build()
    }

    #[test]
    fn test_second_call_returns_identical_instance() {
        let slot = SharedSettings::new();

        let first = slot.get_or_try_init(|| settings_with_key("sk-first")).unwrap();
        let second = slot.get_or_try_init(|| settings_with_key("sk-second")).unwrap();

        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, slot.get().unwrap()));
    }

    #[test]
    fn test_failed_init_leaves_slot_empty_and_retryable() {
        let slot = SharedSettings::new();

        let result = slot.get_or_try_init(|| SettingsLoader::new().build());
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredConfiguration(ref key)) if key == "OPENAI_API_KEY"
        ));
        assert!(slot.get().is_none());

        let settings = slot.get_or_try_init(|| settings_with_key("sk-retry"));
        assert!(settings.is_ok());
        assert!(slot.get().is_some());
    }

    #[test]
    fn test_concurrent_init_builds_once() {
        let slot = Arc::new(SharedSettings::new());
        let builds = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let slot = Arc::clone(&slot);
                let builds = Arc::clone(&builds);
                thread::spawn(move || {
                    let settings = slot
                        .get_or_try_init(|| {
                            builds.fetch_add(1, Ordering::SeqCst);
                            settings_with_key("sk-concurrent")
                        })
                        .unwrap();
                    settings as *const Settings as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }
}
