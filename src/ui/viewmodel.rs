//! View models computed from application state.
//!
//! View models carry display-ready text only. They are computed on demand from a state
//! snapshot plus the configured [`Language`] and consumed by the front end.

use super::messages::{error_message, status_message, StatusMessage};
use crate::app::ComposerState;
use crate::domain::{Language, Settings};

/// One-line feedback shown under the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Busy(String),
    Error(String),
    Success(String),
}

impl Banner {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Busy(text) | Self::Error(text) | Self::Success(text) => text,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Renderable composer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerViewModel {
    /// At most one banner; busy outranks error, error outranks success.
    pub banner: Option<Banner>,

    /// Whether the send control is enabled.
    pub send_enabled: bool,

    /// Number of characters typed, tags excluded.
    pub character_count: usize,
}

impl ComposerViewModel {
    #[must_use]
    pub fn compute(state: &ComposerState, language: Language) -> Self {
        let banner = if state.is_loading {
            Some(Banner::Busy(status_message(StatusMessage::Sending, language).to_string()))
        } else if let Some(error) = &state.error {
            Some(Banner::Error(error_message(error, language)))
        } else if state.show_success {
            Some(Banner::Success(status_message(StatusMessage::Sent, language).to_string()))
        } else {
            None
        };

        Self {
            banner,
            send_enabled: state.can_send(),
            character_count: state.content.chars().count(),
        }
    }
}

/// Label/value rows describing the current settings, token masked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub rows: Vec<(&'static str, String)>,
}

impl SettingsView {
    #[must_use]
    pub fn compute(settings: &Settings) -> Self {
        let endpoint = settings
            .endpoint_url()
            .map_or_else(|| "(invalid or unset)".to_string(), |url| url.to_string());
        let tags = if settings.tags.is_empty() {
            "(none)".to_string()
        } else {
            settings.tags.join(", ")
        };

        Self {
            rows: vec![
                ("server_url", settings.server_url.clone()),
                ("endpoint", endpoint),
                ("access_token", settings.masked_token()),
                ("configured", settings.is_configured().to_string()),
                ("tags_enabled", settings.tags_enabled.to_string()),
                ("tag_mode", settings.tag_mode.to_string()),
                ("tags", tags),
                (
                    "language",
                    format!("{} ({})", settings.language.code(), settings.language.display_name()),
                ),
                ("request_timeout_secs", settings.request_timeout_secs.to_string()),
                (
                    "trace_level",
                    settings.trace_level.clone().unwrap_or_else(|| "(default)".to_string()),
                ),
            ],
        }
    }

    /// Rows as aligned `label  value` lines.
    #[must_use]
    pub fn render(&self) -> String {
        let width = self.rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        self.rows
            .iter()
            .map(|(label, value)| format!("{label:<width$}  {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
