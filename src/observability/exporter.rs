//! File-backed OpenTelemetry span exporter.
//!
//! Spans are encoded as OTLP JSON, one batch per line, and appended to a
//! [`RotatingFile`]. The provider uses the simple (unbatched) processor, so
//! every finished span is written as soon as it ends.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry::KeyValue;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;

use super::otlp::encode_batch;
use super::rotate::RotatingFile;

/// Service and instrumentation scope name reported on every span.
pub const SERVICE_NAME: &str = "poplookup";

#[derive(Debug)]
struct FileSpanExporter {
    file: RotatingFile,
    resource: Resource,
    shut_down: AtomicBool,
}

impl FileSpanExporter {
    fn new(file: RotatingFile, resource: Resource) -> Self {
        Self {
            file,
            resource,
            shut_down: AtomicBool::new(false),
        }
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.shut_down.load(Ordering::SeqCst) {
            Err(TraceError::from("span exporter already shut down"))
        } else {
            let line = encode_batch(&self.resource, SERVICE_NAME, &batch).to_string();
            self.file
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.shut_down.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Resource attributes describing this process.
#[must_use]
pub fn service_resource() -> Resource {
    Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ])
}

/// Builds a tracer provider that appends spans to `path`.
#[must_use]
pub fn file_tracer_provider(path: PathBuf) -> TracerProvider {
    let resource = service_resource();
    let exporter = FileSpanExporter::new(RotatingFile::new(path), resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};

    #[test]
    fn finished_spans_land_in_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("otlp.json");
        let provider = file_tracer_provider(path.clone());

        let tracer = provider.tracer(SERVICE_NAME);
        tracer.in_span("render_route", |_cx| {});

        let contents = std::fs::read_to_string(&path).unwrap();
        let line: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        let span = &line["resourceSpans"][0]["scopeSpans"][0]["spans"][0];
        assert_eq!(span["name"], "render_route");
        assert_eq!(span["traceId"].as_str().unwrap().len(), 32);
    }

    #[test]
    fn export_after_shutdown_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = FileSpanExporter::new(
            RotatingFile::new(dir.path().join("otlp.json")),
            service_resource(),
        );
        exporter.shutdown();

        let result = futures_util::FutureExt::now_or_never(exporter.export(vec![]));
        assert!(matches!(result, Some(Err(_))));
    }
}
