//! Tracing initialization and subscriber setup.

use std::path::Path;

use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::exporter::{file_tracer_provider, SERVICE_NAME};

const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// The pipeline is:
/// 1. `EnvFilter` from `RUST_LOG`, else `config.trace_level`, else `info`
/// 2. Human-readable `fmt` output on stderr
/// 3. When `config.trace_file` is set, OTLP JSON span export to that file
///
/// Safe to call more than once; only the first call takes effect.
///
/// # Example
///
/// ```rust
/// use poplookup::observability::init_tracing;
/// use poplookup::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = build_filter(config.trace_level.as_deref());

    let mut export_error = None;
    let otel_layer = config.trace_file.as_deref().and_then(|path| {
        match prepare_trace_dir(path) {
            Ok(()) => {
                let tracer = file_tracer_provider(path.to_path_buf()).tracer(SERVICE_NAME);
                Some(OpenTelemetryLayer::new(tracer))
            }
            Err(e) => {
                export_error = Some(e);
                None
            }
        }
    });

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(otel_layer)
        .try_init()
        .is_ok();

    if let (true, Some(e), Some(path)) = (initialized, export_error, &config.trace_file) {
        tracing::warn!(trace_file = %path.display(), error = %e, "span export disabled");
    }
}

fn build_filter(trace_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = trace_level.unwrap_or(DEFAULT_LEVEL);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    })
}

fn prepare_trace_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_trace_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("otlp.json");
        prepare_trace_dir(&path).unwrap();
        assert!(dir.path().join("logs").is_dir());
        prepare_trace_dir(Path::new("otlp.json")).unwrap();
    }

    #[test]
    fn invalid_level_falls_back() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(build_filter(Some("poplookup=loudest")).to_string(), DEFAULT_LEVEL);
        assert_eq!(build_filter(Some("debug")).to_string(), "debug");
        assert_eq!(build_filter(None).to_string(), DEFAULT_LEVEL);
    }
}
