//! Command-line front end.
//!
//! ```text
//! memodrop send [TEXT]... [--dry-run]
//! memodrop config show | set-server URL | set-token TOKEN | set-timeout SECS
//!                | set-language LANG | set-trace-level [LEVEL]
//! memodrop tags   list | add TAG... | remove TAG... | enable | disable | mode MODE
//! ```
//!
//! # Modules
//!
//! - [`args`]: `clap` definitions
//! - [`commands`]: Handlers writing to an injectable [`Console`]

pub mod args;
pub mod commands;

pub use args::{Cli, Command, ConfigCommand, SendArgs, TagsCommand};
pub use commands::{execute, send, Console, Outcome};
