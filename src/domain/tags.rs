//! Tag formatting and insertion.
//!
//! Tags are stored without the leading `#`. When tags are enabled they are rendered as
//! `#tag` words joined by single spaces and placed before or after the memo text,
//! separated from it by one blank line.

use super::settings::Settings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between the memo text and the rendered tag line.
const TAG_SEPARATOR: &str = "\n\n";

/// Where the rendered tags go relative to the memo text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum TagMode {
    /// Tags first, then a blank line, then the memo text.
    Prepend,
    /// Memo text, a blank line, then the tags.
    #[default]
    Append,
}

impl TagMode {
    pub const ALL: [Self; 2] = [Self::Prepend, Self::Append];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prepend => "prepend",
            Self::Append => "append",
        }
    }
}

impl fmt::Display for TagMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prepend" => Ok(Self::Prepend),
            "append" => Ok(Self::Append),
            other => Err(format!("unknown tag mode `{other}` (expected prepend or append)")),
        }
    }
}

// Persisted values that no longer parse fall back to the default mode.
impl From<String> for TagMode {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl From<TagMode> for &'static str {
    fn from(mode: TagMode) -> Self {
        mode.as_str()
    }
}

/// Renders the configured tags as `#a #b #c`.
///
/// Returns an empty string when tags are disabled or the list is empty.
///
/// # Examples
///
/// ```
/// use memodrop::domain::{formatted_tags, Settings};
///
/// let settings = Settings {
///     tags_enabled: true,
///     tags: vec!["work".to_string(), "idea".to_string()],
///     ..Settings::default()
/// };
/// assert_eq!(formatted_tags(&settings), "#work #idea");
/// ```
#[must_use]
pub fn formatted_tags(settings: &Settings) -> String {
    if !settings.tags_enabled || settings.tags.is_empty() {
        return String::new();
    }

    settings
        .tags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Merges the rendered tags into `content` according to the configured [`TagMode`].
///
/// Returns `content` unchanged when there is nothing to insert. Empty content is not
/// special-cased.
#[must_use]
pub fn apply_tags(content: &str, settings: &Settings) -> String {
    let tag_line = formatted_tags(settings);
    if tag_line.is_empty() {
        return content.to_string();
    }

    match settings.tag_mode {
        TagMode::Prepend => format!("{tag_line}{TAG_SEPARATOR}{content}"),
        TagMode::Append => format!("{content}{TAG_SEPARATOR}{tag_line}"),
    }
}
