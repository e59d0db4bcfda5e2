//! Configuration store.
//!
//! [`SettingsManager`] owns the live [`Settings`] value and persists every mutation
//! through a [`SettingsStore`] before making it visible. It is constructed explicitly
//! and shared as `Arc<SettingsManager>` between the command-line front end and the
//! memo composer.

use crate::domain::error::{MemodropError, Result};
use crate::domain::{Language, Settings, TagMode};
use crate::storage::SettingsStore;
use parking_lot::RwLock;
use reqwest::Url;
use std::time::Duration;

/// Live configuration backed by a settings store.
///
/// Reads return the in-memory value. Mutations apply to a copy, save it, and only
/// then replace the live value, so a failed save changes nothing.
///
/// # Examples
///
/// ```
/// use memodrop::settings::SettingsManager;
/// use memodrop::storage::MemoryStore;
///
/// let manager = SettingsManager::open(Box::new(MemoryStore::default()))?;
/// manager.set_server_url("https://memos.example.com/")?;
/// manager.set_access_token("abc")?;
/// assert!(manager.is_configured());
///
/// assert!(manager.add_tag(" work ")?);
/// assert!(!manager.add_tag("work")?);
/// assert_eq!(manager.snapshot().tags, vec!["work"]);
/// # Ok::<(), memodrop::MemodropError>(())
/// ```
pub struct SettingsManager {
    store: Box<dyn SettingsStore>,
    current: RwLock<Settings>,
}

impl SettingsManager {
    /// Loads settings from `store`, falling back to defaults when it is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the store holds data that cannot be read.
    pub fn open(store: Box<dyn SettingsStore>) -> Result<Self> {
        let settings = store.load()?.unwrap_or_default().sanitized();
        tracing::debug!(
            configured = settings.is_configured(),
            tags_enabled = settings.tags_enabled,
            tag_count = settings.tags.len(),
            "settings opened"
        );

        Ok(Self {
            store,
            current: RwLock::new(settings),
        })
    }

    /// Copy of the current settings.
    #[must_use]
    pub fn snapshot(&self) -> Settings {
        self.current.read().clone()
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.current.read().is_configured()
    }

    #[must_use]
    pub fn normalized_server_url(&self) -> String {
        self.current.read().normalized_server_url()
    }

    #[must_use]
    pub fn endpoint_url(&self) -> Option<Url> {
        self.current.read().endpoint_url()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.current.read().language
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.current.read().request_timeout_secs)
    }

    /// Stores the server URL, trimmed.
    ///
    /// Trailing slashes are kept; they are stripped when the endpoint is derived (see
    /// [`Settings::normalized_server_url`]). The value is not validated here, so an
    /// unparseable URL surfaces as `InvalidUrl` on the next send.
    ///
    /// # Parameters
    ///
    /// * `url` - Base URL of the Memos server, e.g. `https://memos.example.com/`
    ///
    /// # Example
    ///
    /// ```
    /// use memodrop::settings::SettingsManager;
    /// use memodrop::storage::MemoryStore;
    ///
    /// let manager = SettingsManager::open(Box::new(MemoryStore::default()))?;
    /// manager.set_server_url("  https://memos.example.com/  ")?;
    ///
    /// assert_eq!(manager.snapshot().server_url, "https://memos.example.com/");
    /// assert_eq!(
    ///     manager.endpoint_url().map(|url| url.to_string()),
    ///     Some("https://memos.example.com/api/v1/memos".to_string())
    /// );
    /// # Ok::<(), memodrop::MemodropError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_server_url(&self, url: &str) -> Result<()> {
        self.update(|settings| {
            settings.server_url = url.trim().to_string();
            true
        })
        .map(drop)
    }

    /// Stores the access token, trimmed.
    ///
    /// An empty token is accepted and leaves the client unconfigured.
    ///
    /// # Parameters
    ///
    /// * `token` - Personal access token created in the Memos web UI
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_access_token(&self, token: &str) -> Result<()> {
        self.update(|settings| {
            settings.access_token = token.trim().to_string();
            true
        })
        .map(drop)
    }

    /// Turns tag insertion on or off. The tag list itself is kept either way.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_tags_enabled(&self, enabled: bool) -> Result<()> {
        self.update(|settings| {
            settings.tags_enabled = enabled;
            true
        })
        .map(drop)
    }

    /// Chooses whether the tag line goes before or after the memo text.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_tag_mode(&self, mode: TagMode) -> Result<()> {
        self.update(|settings| {
            settings.tag_mode = mode;
            true
        })
        .map(drop)
    }

    /// Sets the language used for status and error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_language(&self, language: Language) -> Result<()> {
        self.update(|settings| {
            settings.language = language;
            true
        })
        .map(drop)
    }

    /// Sets the overall HTTP timeout.
    ///
    /// Takes effect for transports created afterwards.
    ///
    /// # Parameters
    ///
    /// * `secs` - Timeout in whole seconds, at least 1
    ///
    /// # Errors
    ///
    /// Returns [`MemodropError::Config`] for a zero timeout, or an error if persisting
    /// fails.
    pub fn set_request_timeout_secs(&self, secs: u64) -> Result<()> {
        if secs == 0 {
            return Err(MemodropError::Config(
                "request timeout must be at least one second".to_string(),
            ));
        }
        self.update(|settings| {
            settings.request_timeout_secs = secs;
            true
        })
        .map(drop)
    }

    /// Sets or clears the tracing filter directive.
    ///
    /// # Parameters
    ///
    /// * `level` - An `EnvFilter` directive such as `debug` or `memodrop=trace`.
    ///   `None` or a blank string resets to the default.
    ///
    /// Read at startup only; `MEMODROP_LOG` still takes precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_trace_level(&self, level: Option<&str>) -> Result<()> {
        self.update(|settings| {
            settings.trace_level = level
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from);
            true
        })
        .map(drop)
    }

    /// Appends a tag.
    ///
    /// # Parameters
    ///
    /// * `tag` - Tag text without the leading `#`; surrounding whitespace is trimmed
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the tag was added and persisted
    /// - `Ok(false)` without writing when the trimmed tag is empty or already present
    ///   (comparison is exact, so `Work` and `work` are distinct)
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn add_tag(&self, tag: &str) -> Result<bool> {
        let tag = tag.trim();
        self.update(|settings| {
            if tag.is_empty() || settings.tags.iter().any(|t| t == tag) {
                return false;
            }
            settings.tags.push(tag.to_string());
            true
        })
    }

    /// Removes the tag equal to `tag`.
    ///
    /// The remaining tags keep their order.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the tag was removed and the change persisted
    /// - `Ok(false)` if no tag matched exactly
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn remove_tag(&self, tag: &str) -> Result<bool> {
        self.update(|settings| {
            let before = settings.tags.len();
            settings.tags.retain(|t| t != tag);
            settings.tags.len() != before
        })
    }

    /// Applies `mutate` to a copy and persists it if `mutate` reports a change.
    fn update(&self, mutate: impl FnOnce(&mut Settings) -> bool) -> Result<bool> {
        let mut current = self.current.write();
        let mut next = current.clone();

        if !mutate(&mut next) {
            return Ok(false);
        }

        self.store.save(&next)?;
        *current = next;
        drop(current);

        tracing::debug!("settings updated");
        Ok(true)
    }
}

impl std::fmt::Debug for SettingsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsManager")
            .field("server_url", &self.current.read().server_url)
            .finish_non_exhaustive()
    }
}
