//! memodrop binary entry point.
//!
//! Thin wrapper around the library: parse arguments, open the settings, start tracing,
//! dispatch to [`memodrop::cli::execute`].
//!
//! # Startup
//!
//! 1. **Parse**: `clap` parses the command line
//! 2. **Settings**: resolve the config dir (`--config-dir`, `MEMODROP_CONFIG_DIR`,
//!    platform default) and load `config.toml`
//! 3. **Tracing**: level from `MEMODROP_LOG` or the stored `trace_level`
//! 4. **Dispatch**: run the command inside a `command` span
//!
//! # Exit Codes
//!
//! - `0`: the command did what was asked
//! - `1`: a memo was not sent (skipped or rejected)
//! - `2`: settings, I/O or client setup failed

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use memodrop::cli::{Cli, Console};
use memodrop::infrastructure::{expand_tilde, get_config_dir, settings_file};
use memodrop::observability::{init_tracing, TracingOptions};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::Instrument;

const SETUP_FAILURE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_dir = cli
        .config_dir
        .as_deref()
        .map_or_else(get_config_dir, |dir| expand_tilde(&dir.to_string_lossy()));
    let settings_path = settings_file(&config_dir);

    let settings = match memodrop::open_settings(&config_dir) {
        Ok(settings) => Arc::new(settings),
        Err(e) => {
            eprintln!("memodrop: cannot open {}: {e}", settings_path.display());
            return ExitCode::from(SETUP_FAILURE);
        }
    };

    let tracing_guard = init_tracing(&TracingOptions {
        level: settings.snapshot().trace_level,
        verbose: cli.verbose,
        data_dir: None,
    });
    if cli.verbose {
        match tracing_guard.trace_file() {
            Some(path) => eprintln!("memodrop: writing traces to {}", path.display()),
            None => eprintln!("memodrop: trace file unavailable"),
        }
    }
    tracing::debug!(config_dir = %config_dir.display(), "starting");

    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();
    let mut console = Console {
        stdin: &mut stdin,
        out: &mut stdout,
        err: &mut stderr,
    };

    let span = tracing::info_span!("command", name = cli.command.name());
    let result = memodrop::cli::execute(cli.command, settings, &settings_path, &mut console)
        .instrument(span)
        .await;

    match result {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("memodrop: {e}");
            ExitCode::from(SETUP_FAILURE)
        }
    }
}
