//! Tracing initialization and subscriber setup.
//!
//! Wires `tracing` macros to the OpenTelemetry SDK and the JSON-lines file exporter,
//! with an optional human-readable layer on stderr.

use super::exporter;
use crate::infrastructure::paths::get_data_dir;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable overriding the trace level.
pub const LOG_ENV: &str = "MEMODROP_LOG";

/// Trace file name inside the data directory.
pub const TRACE_FILE: &str = "memodrop-trace.jsonl";

const DEFAULT_LEVEL: &str = "info";

/// Options for [`init_tracing`].
#[derive(Debug, Clone, Default)]
pub struct TracingOptions {
    /// Level from settings; `MEMODROP_LOG` takes precedence.
    pub level: Option<String>,

    /// Also print events to stderr.
    pub verbose: bool,

    /// Directory for the trace file. Defaults to the platform data directory.
    pub data_dir: Option<PathBuf>,
}

/// Keeps the tracer provider alive; spans stop being exported once dropped.
#[derive(Debug)]
pub struct TracingGuard {
    trace_file: Option<PathBuf>,
    _provider: Option<TracerProvider>,
}

impl TracingGuard {
    /// Path spans are written to, if file export is active.
    #[must_use]
    pub fn trace_file(&self) -> Option<&PathBuf> {
        self.trace_file.as_ref()
    }
}

/// Installs the global subscriber.
///
/// Level resolution: `MEMODROP_LOG`, then `options.level`, then `"info"`. An
/// unparseable directive falls back to `"info"`.
///
/// If the data directory cannot be created, file export is skipped and only the
/// stderr layer (when `verbose`) is installed. Calling this more than once is harmless;
/// only the first call installs a subscriber.
pub fn init_tracing(options: &TracingOptions) -> TracingGuard {
    let directive = resolve_level(std::env::var(LOG_ENV).ok(), options.level.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let data_dir = options.data_dir.clone().unwrap_or_else(get_data_dir);
    let trace_file = std::fs::create_dir_all(&data_dir)
        .ok()
        .map(|()| data_dir.join(TRACE_FILE));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "memodrop"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = trace_file
        .clone()
        .map(|path| exporter::create_tracer_provider(path, resource));

    let otel_layer = provider
        .as_ref()
        .map(|provider| OpenTelemetryLayer::new(provider.tracer("memodrop")));
    let fmt_layer = options.verbose.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .with(fmt_layer)
        .try_init();

    TracingGuard {
        trace_file,
        _provider: provider,
    }
}

fn resolve_level(env: Option<String>, configured: Option<&str>) -> String {
    env.filter(|level| !level.trim().is_empty())
        .or_else(|| {
            configured
                .filter(|level| !level.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}
