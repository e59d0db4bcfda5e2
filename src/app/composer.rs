//! Memo composer: the orchestrator behind a "send" action.
//!
//! [`MemoComposer`] is the only caller of the submission pipeline. One send runs as:
//!
//! ```text
//! can_send? ─no─→ Skipped
//!    │yes
//!    ▼
//! busy = true, error = None
//!    │
//! Settings snapshot → apply_tags → MemoService::create_memo
//!    │                                      │
//!    ├── Ok  → clear content, show_success (reset after 2 s by a spawned timer)
//!    └── Err → keep content, store error kind
//!    │
//! busy = false (also when the send future is dropped)
//! ```

use super::state::ComposerState;
use crate::client::MemoService;
use crate::domain::MemoError;
use crate::settings::SettingsManager;
use crate::ui::messages;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// How long the success flag stays raised after a memo was created.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(2);

/// What a call to [`MemoComposer::send_memo`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendStatus {
    /// Nothing was sent: the content was blank or another send was in flight.
    Skipped,
    /// The server accepted the memo.
    Sent,
    /// The submission failed; the content is kept for a manual retry.
    Failed(MemoError),
}

/// Orchestrates sending one memo at a time.
///
/// All methods take `&self`; state lives behind a mutex so the presentation layer can
/// poll it while a send is suspended on the network. A second `send_memo` issued while
/// one is in flight is a no-op.
///
/// Must be driven from inside a Tokio runtime: the success reset is a spawned task.
pub struct MemoComposer {
    settings: Arc<SettingsManager>,
    service: MemoService,
    state: Arc<Mutex<ComposerState>>,
    success_display: Duration,
}

impl MemoComposer {
    #[must_use]
    pub fn new(settings: Arc<SettingsManager>, service: MemoService) -> Self {
        Self {
            settings,
            service,
            state: Arc::new(Mutex::new(ComposerState::default())),
            success_display: SUCCESS_DISPLAY,
        }
    }

    /// Overrides how long the success flag stays raised.
    #[must_use]
    pub const fn with_success_display(mut self, duration: Duration) -> Self {
        self.success_display = duration;
        self
    }

    /// Snapshot of the transient state.
    #[must_use]
    pub fn state(&self) -> ComposerState {
        self.state.lock().clone()
    }

    pub fn set_content(&self, content: impl Into<String>) {
        self.state.lock().content = content.into();
    }

    #[must_use]
    pub fn content(&self) -> String {
        self.state.lock().content.clone()
    }

    #[must_use]
    pub fn can_send(&self) -> bool {
        self.state.lock().can_send()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.lock().is_loading
    }

    #[must_use]
    pub fn show_success(&self) -> bool {
        self.state.lock().show_success
    }

    #[must_use]
    pub fn error(&self) -> Option<MemoError> {
        self.state.lock().error.clone()
    }

    /// Current error rendered in the configured language.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        let language = self.settings.language();
        self.error()
            .map(|error| messages::error_message(&error, language))
    }

    pub fn clear_error(&self) {
        self.state.lock().error = None;
    }

    /// Content as it would be sent right now, tags included.
    #[must_use]
    pub fn final_content(&self) -> String {
        let content = self.content();
        self.settings.snapshot().apply_tags(&content)
    }

    /// Sends the current content if [`can_send`](Self::can_send) allows it.
    ///
    /// Every failure is captured in the state and returned as
    /// [`SendStatus::Failed`]; nothing propagates.
    pub async fn send_memo(&self) -> SendStatus {
        let content = {
            let mut state = self.state.lock();
            if !state.can_send() {
                tracing::debug!(is_loading = state.is_loading, "send skipped");
                return SendStatus::Skipped;
            }
            state.is_loading = true;
            state.error = None;
            state.content.clone()
        };
        let _busy = BusyGuard(&self.state);

        let settings = self.settings.snapshot();
        let final_content = settings.apply_tags(&content);
        tracing::debug!(
            content_len = content.len(),
            final_len = final_content.len(),
            tags_enabled = settings.tags_enabled,
            "sending memo"
        );

        match self.service.create_memo(&settings, &final_content).await {
            Ok(()) => {
                self.mark_success();
                SendStatus::Sent
            }
            Err(error) => {
                tracing::debug!(error = %error, "send failed, keeping content");
                self.state.lock().error = Some(error.clone());
                SendStatus::Failed(error)
            }
        }
    }

    fn mark_success(&self) {
        let generation = {
            let mut state = self.state.lock();
            state.content.clear();
            state.show_success = true;
            state.success_generation = state.success_generation.wrapping_add(1);
            state.success_generation
        };

        let state = Arc::clone(&self.state);
        let delay = self.success_display;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.lock();
            if state.success_generation == generation {
                state.show_success = false;
            }
        });
    }
}

impl std::fmt::Debug for MemoComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoComposer")
            .field("state", &*self.state.lock())
            .field("success_display", &self.success_display)
            .finish_non_exhaustive()
    }
}

/// Clears the busy flag when a send finishes or its future is dropped.
struct BusyGuard<'a>(&'a Mutex<ComposerState>);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.lock().is_loading = false;
    }
}
