//! Transient composer state.
//!
//! [`ComposerState`] holds what the presentation layer observes while a memo is being
//! written and sent. Nothing in it is persisted.

use crate::domain::MemoError;

/// Observable state of one composer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposerState {
    /// Memo text as typed, without tags.
    pub content: String,

    /// A submission is in flight.
    pub is_loading: bool,

    /// The last submission succeeded less than the success display duration ago.
    pub show_success: bool,

    /// Failure of the last submission, until dismissed or the next send starts.
    pub error: Option<MemoError>,

    /// Bumped on every success so a stale reset timer leaves a newer flag alone.
    pub(crate) success_generation: u64,
}

impl ComposerState {
    /// True when there is non-blank content and nothing is in flight.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.content.trim().is_empty() && !self.is_loading
    }
}
