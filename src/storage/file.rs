//! TOML file settings backend.
//!
//! Settings live in a single human-editable TOML file. Writes go to a sibling
//! temporary file which is then renamed over the target, so a crash never leaves a
//! half-written configuration behind.

use crate::domain::error::{MemodropError, Result};
use crate::domain::Settings;
use crate::storage::backend::SettingsStore;
use std::path::{Path, PathBuf};

/// File-backed [`SettingsStore`].
///
/// Stateless apart from the path: every `load` reads the file again, so edits made by
/// hand between runs are picked up.
///
/// # Examples
///
/// ```no_run
/// use memodrop::storage::{SettingsStore, TomlFileStore};
/// use std::path::PathBuf;
///
/// let store = TomlFileStore::new(PathBuf::from("/tmp/memodrop/config.toml"))?;
/// let settings = store.load()?.unwrap_or_default();
/// # Ok::<(), memodrop::MemodropError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    file_path: PathBuf,
}

impl TomlFileStore {
    /// Creates a store for `file_path`, creating its parent directories.
    ///
    /// The file itself is only created on the first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing settings file store");

        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Ok(Self { file_path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn temp_path(&self) -> PathBuf {
        self.file_path.with_extension("toml.tmp")
    }
}

impl SettingsStore for TomlFileStore {
    fn load(&self) -> Result<Option<Settings>> {
        let _span = tracing::debug_span!("settings_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no settings file yet");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            MemodropError::Storage(format!(
                "failed to parse {}: {e}",
                self.file_path.display()
            ))
        })?;

        tracing::debug!(
            tag_count = settings.tags.len(),
            configured = settings.is_configured(),
            "settings loaded"
        );
        Ok(Some(settings))
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let _span = tracing::debug_span!("settings_save", path = ?self.file_path).entered();

        let text = toml::to_string_pretty(settings)
            .map_err(|e| MemodropError::Storage(format!("failed to serialize settings: {e}")))?;

        let tmp_path = self.temp_path();
        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, text)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("settings saved");
        Ok(())
    }
}
