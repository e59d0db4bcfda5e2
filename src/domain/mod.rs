//! Domain layer for memodrop.
//!
//! Core types and pure logic of the memo pipeline, independent of HTTP clients,
//! storage backends or the command line.
//!
//! # Organization
//!
//! - [`error`]: Submission error taxonomy and infrastructure errors
//! - [`settings`]: Persisted configuration and derived endpoint values
//! - [`tags`]: Tag rendering and insertion
//! - [`memo`]: Wire payloads of the Memos API
//! - [`language`]: Supported interface languages
//!
//! # Examples
//!
//! ```
//! use memodrop::domain::{Settings, TagMode};
//!
//! let settings = Settings {
//!     server_url: "https://memos.example.com/".to_string(),
//!     tags_enabled: true,
//!     tag_mode: TagMode::Prepend,
//!     tags: vec!["inbox".to_string()],
//!     ..Settings::default()
//! };
//!
//! assert_eq!(settings.apply_tags("call mom"), "#inbox\n\ncall mom");
//! assert_eq!(
//!     settings.endpoint_url().map(|url| url.to_string()),
//!     Some("https://memos.example.com/api/v1/memos".to_string())
//! );
//! ```

pub mod error;
pub mod language;
pub mod memo;
pub mod settings;
pub mod tags;

pub use error::{MemoError, MemodropError, Result, SubmissionOutcome};
pub use language::Language;
pub use memo::{MemoRequest, MemoResponse};
pub use settings::{Settings, DEFAULT_REQUEST_TIMEOUT_SECS, MEMOS_ENDPOINT_PATH};
pub use tags::{apply_tags, formatted_tags, TagMode};
