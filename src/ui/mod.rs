//! Presentation support: localized messages and view models.
//!
//! The core reports error kinds and raw state; this layer turns them into text:
//!
//! ```text
//! ComposerState + Language → ComposerViewModel → front end
//! MemoError     + Language → error_message     → front end
//! ```
//!
//! # Modules
//!
//! - [`messages`]: Per-language message catalog
//! - [`viewmodel`]: Display-ready composer and settings views

pub mod messages;
pub mod viewmodel;

pub use messages::{error_message, status_message, StatusMessage};
pub use viewmodel::{Banner, ComposerViewModel, SettingsView};
