//! Persisted client configuration and the values derived from it.
//!
//! [`Settings`] is a plain value: it is what the settings store reads and writes, and
//! what the submission pipeline snapshots at send time. Mutation with persistence is
//! handled by [`crate::settings::SettingsManager`].

use super::language::Language;
use super::tags::{self, TagMode};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Path of the memo creation endpoint, relative to the server base URL.
pub const MEMOS_ENDPOINT_PATH: &str = "/api/v1/memos";

/// Tokens shorter than this are masked completely.
const MASK_REVEAL_MIN_LEN: usize = 16;

/// Characters kept visible at each end of a long masked token.
const MASK_REVEAL_CHARS: usize = 2;

/// Default overall HTTP timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client configuration.
///
/// Missing keys in the persisted file take their default values.
///
/// # File Format
///
/// ```toml
/// server_url = "https://memos.example.com/"
/// access_token = "..."
/// tags_enabled = true
/// tag_mode = "append"
/// tags = ["work", "idea"]
/// language = "en"
/// request_timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the Memos server, as entered by the user.
    pub server_url: String,

    /// Bearer token sent in the `Authorization` header.
    pub access_token: String,

    /// Whether tags are inserted into outgoing memos.
    pub tags_enabled: bool,

    /// Placement of the tag line.
    pub tag_mode: TagMode,

    /// Tags without the leading `#`, in insertion order. No empties, no duplicates.
    pub tags: Vec<String>,

    /// Language for status and error messages.
    pub language: Language,

    /// Overall HTTP timeout for one submission.
    pub request_timeout_secs: u64,

    /// Tracing filter directive (`info`, `memodrop=debug`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            access_token: String::new(),
            tags_enabled: false,
            tag_mode: TagMode::default(),
            tags: Vec::new(),
            language: Language::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            trace_level: None,
        }
    }
}

impl Settings {
    /// True when both the server URL and the access token are non-blank.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.server_url.trim().is_empty() && !self.access_token.trim().is_empty()
    }

    /// Server URL with surrounding whitespace and every trailing `/` removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use memodrop::domain::Settings;
    ///
    /// let settings = Settings {
    ///     server_url: " http://x/// ".to_string(),
    ///     ..Settings::default()
    /// };
    /// assert_eq!(settings.normalized_server_url(), "http://x");
    /// ```
    #[must_use]
    pub fn normalized_server_url(&self) -> String {
        self.server_url.trim().trim_end_matches('/').to_string()
    }

    /// Absolute URL of the memo creation endpoint.
    ///
    /// Returns `None` when no server URL is set or the result is not a valid absolute
    /// URL.
    #[must_use]
    pub fn endpoint_url(&self) -> Option<Url> {
        let base = self.normalized_server_url();
        if base.is_empty() {
            return None;
        }

        match Url::parse(&format!("{base}{MEMOS_ENDPOINT_PATH}")) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!(server_url = %base, error = %e, "server URL does not parse");
                None
            }
        }
    }

    /// See [`tags::formatted_tags`].
    #[must_use]
    pub fn formatted_tags(&self) -> String {
        tags::formatted_tags(self)
    }

    /// See [`tags::apply_tags`].
    #[must_use]
    pub fn apply_tags(&self, content: &str) -> String {
        tags::apply_tags(content, self)
    }

    /// Restores the tag invariants on values read from disk.
    ///
    /// Tags are trimmed; empty entries and repeats are dropped, keeping the first
    /// occurrence. The timeout is clamped to at least one second.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let mut kept: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags.drain(..) {
            let tag = tag.trim();
            if !tag.is_empty() && !kept.iter().any(|existing| existing == tag) {
                kept.push(tag.to_string());
            }
        }
        self.tags = kept;
        self.request_timeout_secs = self.request_timeout_secs.max(1);
        self
    }

    /// Access token masked for display.
    ///
    /// Tokens shorter than 16 characters are fully masked; longer ones keep two
    /// characters at each end.
    ///
    /// # Examples
    ///
    /// ```
    /// use memodrop::Settings;
    ///
    /// let settings = Settings {
    ///     access_token: "memos_pat_1234567890".to_string(),
    ///     ..Settings::default()
    /// };
    /// assert_eq!(settings.masked_token(), "me****************90");
    /// ```
    #[must_use]
    pub fn masked_token(&self) -> String {
        let chars: Vec<char> = self.access_token.trim().chars().collect();
        let n = chars.len();
        if n < MASK_REVEAL_MIN_LEN {
            return "*".repeat(n);
        }

        let head: String = chars[..MASK_REVEAL_CHARS].iter().collect();
        let tail: String = chars[n - MASK_REVEAL_CHARS..].iter().collect();
        format!("{head}{}{tail}", "*".repeat(n - 2 * MASK_REVEAL_CHARS))
    }
}
