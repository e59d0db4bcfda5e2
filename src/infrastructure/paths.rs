//! Filesystem locations for settings and trace output.
//!
//! Configuration goes to the platform config directory and traces to the local data
//! directory, both resolved with the `dirs` crate:
//!
//! | Platform | Config dir                                   | Data dir                                   |
//! |----------|----------------------------------------------|--------------------------------------------|
//! | Linux    | `~/.config/memodrop`                         | `~/.local/share/memodrop`                  |
//! | macOS    | `~/Library/Application Support/memodrop`     | `~/Library/Application Support/memodrop`   |
//! | Windows  | `%APPDATA%\memodrop`                         | `%LOCALAPPDATA%\memodrop`                  |

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "MEMODROP_CONFIG_DIR";

const APP_DIR: &str = "memodrop";
const SETTINGS_FILE: &str = "config.toml";

/// Returns the config directory, honoring [`CONFIG_DIR_ENV`].
#[must_use]
pub fn get_config_dir() -> PathBuf {
    resolve_config_dir(std::env::var_os(CONFIG_DIR_ENV).as_deref())
}

/// Resolves the config directory from an optional override.
///
/// A non-empty override wins (with `~` expanded); otherwise the platform config
/// directory is used, or the working directory if the platform has none.
#[must_use]
pub fn resolve_config_dir(override_dir: Option<&OsStr>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return expand_tilde(&dir.to_string_lossy());
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Returns the directory for trace files.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Path of the settings file inside `config_dir`.
#[must_use]
pub fn settings_file(config_dir: &Path) -> PathBuf {
    config_dir.join(SETTINGS_FILE)
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading `~`, and all paths when no home directory is known, are
/// returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
