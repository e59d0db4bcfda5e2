//! Size-rotating line writer for trace output.
//!
//! When the live file grows past the size limit it is renamed to
//! `<file name>.<UTC timestamp>` and a fresh file is started. Only the newest backups
//! are kept.

use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Rotate once the live file exceeds this many bytes.
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept next to the live file.
pub const MAX_BACKUP_FILES: usize = 3;

/// Appends newline-terminated lines to a file, rotating by size.
///
/// Safe to share between threads; writes are serialized by an internal lock. The file
/// is opened lazily on the first write.
pub struct RotatingFileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingFileWriter {
    /// Writer with the default limits ([`MAX_FILE_SIZE_BYTES`], [`MAX_BACKUP_FILES`]).
    ///
    /// # Parameters
    ///
    /// * `file_path` - Live file; backups are created next to it. The parent directory
    ///   must exist by the first write.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use memodrop::observability::RotatingFileWriter;
    ///
    /// let writer = RotatingFileWriter::new(std::env::temp_dir().join("memodrop-trace.jsonl"));
    /// writer.write_line(r#"{"name":"submit_memo"}"#)?;
    /// # Ok::<(), std::io::Error>(())
    /// ```
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// # Parameters
    ///
    /// * `file_path` - Live file
    /// * `max_bytes` - Size the live file may reach before the next write rotates it
    /// * `max_backups` - Rotated files to keep; `0` deletes each backup right away
    #[must_use]
    pub fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// Rotation is checked before the write, so a single line can push the live file
    /// past the limit.
    ///
    /// # Errors
    ///
    /// Returns an error if rotating, opening or writing the file fails.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = self.file.lock();

        if self.needs_rotation() {
            *file = None;
            self.rotate()?;
        }

        if file.is_none() {
            *file = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }
        let Some(handle) = file.as_mut() else {
            return Err(io::Error::other("trace file unavailable"));
        };

        writeln!(handle, "{line}")?;
        handle.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.3f");
        let mut backup = self.file_path.clone().into_os_string();
        backup.push(format!(".{stamp}"));

        fs::rename(&self.file_path, PathBuf::from(backup))?;
        self.prune_backups()
    }

    /// Deletes all but the newest `max_backups` rotated files.
    fn prune_backups(&self) -> io::Result<()> {
        let Some(dir) = self.file_path.parent() else {
            return Ok(());
        };
        let Some(prefix) = backup_prefix(&self.file_path) else {
            return Ok(());
        };

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Timestamp suffixes sort chronologically; newest first.
        backups.sort_unstable_by(|a, b| b.cmp(a));
        for stale in backups.iter().skip(self.max_backups) {
            if let Err(e) = fs::remove_file(stale) {
                tracing::debug!(path = ?stale, error = %e, "could not remove old trace file");
            }
        }
        Ok(())
    }
}

fn backup_prefix(file_path: &Path) -> Option<String> {
    file_path
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| format!("{name}."))
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
