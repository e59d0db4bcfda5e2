//! OpenTelemetry-based tracing with file export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Spans land in `<data dir>/memodrop-trace.jsonl`, one JSON object per line. The file
//! rotates at 10 MiB and the three newest backups are kept.
//!
//! Trace level is controlled via:
//! 1. `MEMODROP_LOG` environment variable (highest priority)
//! 2. `trace_level` in the settings file
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```no_run
//! use memodrop::observability::{init_tracing, TracingOptions};
//!
//! let _guard = init_tracing(&TracingOptions {
//!     level: Some("debug".to_string()),
//!     ..TracingOptions::default()
//! });
//!
//! tracing::debug!("tracing is now active");
//! ```

mod exporter;
mod file_writer;
mod init;

pub use exporter::{create_tracer_provider, FileSpanExporter};
pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, TracingGuard, TracingOptions, LOG_ENV, TRACE_FILE};
