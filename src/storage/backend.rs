//! Settings storage abstraction.
//!
//! The [`SettingsStore`] trait hides where the flat configuration values live, so the
//! settings manager can be backed by a file in production and by memory in tests.

use crate::domain::error::Result;
use crate::domain::Settings;

/// Persistent home of the client [`Settings`].
///
/// Implementations must make a completed [`save`](Self::save) visible to every later
/// [`load`](Self::load). Concurrent writers are not coordinated; the last write wins.
///
/// # Implementations
///
/// - [`TomlFileStore`](crate::storage::TomlFileStore): TOML file with atomic writes
/// - [`MemoryStore`](crate::storage::MemoryStore): process-local, for tests and
///   throwaway sessions
pub trait SettingsStore: Send + Sync {
    /// Reads the stored settings.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing data exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<Settings>>;

    /// Replaces the stored settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The previously stored value must remain
    /// readable in that case.
    fn save(&self, settings: &Settings) -> Result<()>;
}
