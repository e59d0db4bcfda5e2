//! Application layer: the memo composer and its transient state.
//!
//! Sits between the front end (command line) and the client/settings layers:
//!
//! ```text
//! Front end → MemoComposer::send_memo → SettingsManager snapshot → apply_tags
//!     ↑                                        ↓
//!     └──── ComposerState (busy / success / error) ←── MemoService outcome
//! ```
//!
//! # Modules
//!
//! - [`composer`]: Send orchestration and the success timer
//! - [`state`]: Observable transient state

pub mod composer;
pub mod state;

pub use composer::{MemoComposer, SendStatus, SUCCESS_DISPLAY};
pub use state::ComposerState;
