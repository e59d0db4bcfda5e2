//! In-memory settings backend.

use crate::domain::error::Result;
use crate::domain::Settings;
use crate::storage::backend::SettingsStore;
use parking_lot::Mutex;

/// [`SettingsStore`] that keeps the value in process memory.
///
/// Used by tests and by callers that want a configured pipeline without touching the
/// filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Mutex<Option<Settings>>,
}

impl MemoryStore {
    /// Creates a store that already holds `settings`.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            saved: Mutex::new(Some(settings)),
        }
    }

    /// Returns the last saved value.
    #[must_use]
    pub fn snapshot(&self) -> Option<Settings> {
        self.saved.lock().clone()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<Settings>> {
        Ok(self.saved.lock().clone())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        *self.saved.lock() = Some(settings.clone());
        Ok(())
    }
}
