//! memodrop: send quick notes to a self-hosted [Memos](https://usememos.com) server.
//!
//! memodrop provides:
//! - A persisted configuration (server URL, access token, default tags, language)
//! - Tag insertion before or after the memo text
//! - An authenticated `POST {server}/api/v1/memos` submission with status
//!   classification into a small error taxonomy
//! - A memo composer that tracks busy, success and error state for a front end
//! - A command-line front end

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Command line (main.rs, cli/)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Orchestration
//! │  - MemoComposer: can_send, send_memo                │
//! │  - Busy / success / error state                     │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Settings      │   │ Client Layer  │
//! │ (ui/)         │   │ (settings.rs, │   │ (client/)     │
//! │ - Messages    │   │  storage/)    │   │ - Request     │
//! │ - View models │   │ - TOML file   │   │ - Transport   │
//! │               │   │ - Atomic save │   │ - Classify    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Settings, tags, memo payloads (domain/)          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - JSON-lines file export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Memo composer and its transient state
//! - [`client`]: Request building, HTTP transport, status classification
//! - [`domain`]: Core types (settings, tags, errors)
//! - [`settings`]: Live configuration with persistence
//! - [`storage`]: Settings stores (TOML file, in-memory)
//! - [`infrastructure`]: Platform-specific paths
//! - [`ui`]: Localized messages and view models
//! - [`cli`]: Command-line definitions and command handlers
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Example
//!
//! ```no_run
//! use memodrop::{MemoComposer, MemoService, ReqwestTransport, SendStatus};
//! use std::sync::Arc;
//!
//! # async fn demo() -> memodrop::Result<()> {
//! let settings = Arc::new(memodrop::open_settings(&memodrop::infrastructure::get_config_dir())?);
//! let transport = ReqwestTransport::new(settings.request_timeout())?;
//! let composer = MemoComposer::new(settings, MemoService::new(Arc::new(transport)));
//!
//! composer.set_content("Buy milk");
//! match composer.send_memo().await {
//!     SendStatus::Sent => println!("sent"),
//!     SendStatus::Failed(error) => eprintln!("{error}"),
//!     SendStatus::Skipped => {}
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod cli;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod settings;
pub mod storage;
pub mod ui;

pub use app::{ComposerState, MemoComposer, SendStatus};
pub use client::{MemoService, ReqwestTransport, Transport};
pub use domain::{Language, MemoError, MemodropError, Result, Settings, SubmissionOutcome, TagMode};
pub use settings::SettingsManager;

use std::path::Path;

/// Opens the settings stored in `config_dir/config.toml`.
///
/// The directory is created if needed. A missing file yields default settings.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be parsed.
pub fn open_settings(config_dir: &Path) -> Result<SettingsManager> {
    let path = infrastructure::settings_file(config_dir);
    tracing::debug!(path = %path.display(), "opening settings");
    let store = storage::TomlFileStore::new(path)?;
    SettingsManager::open(Box::new(store))
}
