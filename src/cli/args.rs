//! Command-line argument definitions.

use crate::domain::{Language, TagMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Send quick notes to a Memos server.
#[derive(Debug, Parser)]
#[command(name = "memodrop", version, about, propagate_version = true)]
pub struct Cli {
    /// Directory holding config.toml [env: MEMODROP_CONFIG_DIR]
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Print log events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a memo from the arguments or standard input
    Send(SendArgs),

    /// Show or change the connection settings
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Manage the default tags added to every memo
    #[command(subcommand)]
    Tags(TagsCommand),
}

impl Command {
    /// Subcommand name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Send(_) => "send",
            Self::Config(_) => "config",
            Self::Tags(_) => "tags",
        }
    }
}

#[derive(Debug, Args)]
pub struct SendArgs {
    /// Memo text; words are joined with single spaces. Reads stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Print the request target and final content instead of sending
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the current settings with the token masked
    Show,

    /// Set the server base URL, e.g. https://memos.example.com
    SetServer {
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Set the access token
    SetToken {
        #[arg(value_name = "TOKEN")]
        token: String,
    },

    /// Set the request timeout in seconds
    SetTimeout {
        #[arg(value_name = "SECS")]
        secs: u64,
    },

    /// Set the message language (en, de, es, fr, tr)
    SetLanguage {
        #[arg(value_name = "LANG", value_parser = parse_language)]
        language: Language,
    },

    /// Set the trace filter (info, debug, memodrop=trace, ...); omit to reset
    SetTraceLevel {
        #[arg(value_name = "LEVEL")]
        level: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum TagsCommand {
    /// List the configured tags
    List,

    /// Add tags (without the leading #)
    Add {
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,
    },

    /// Remove tags
    Remove {
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,
    },

    /// Insert tags into sent memos
    Enable,

    /// Stop inserting tags
    Disable,

    /// Place tags before or after the memo text
    Mode {
        #[arg(value_name = "MODE", value_parser = parse_tag_mode)]
        mode: TagMode,
    },
}

// Strict parsing; the lenient `From<String>` conversions are for persisted values only.
fn parse_language(value: &str) -> Result<Language, String> {
    value.parse()
}

fn parse_tag_mode(value: &str) -> Result<TagMode, String> {
    value.parse()
}
