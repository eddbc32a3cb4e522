//! Logging and optional OpenTelemetry span export.
//!
//! Everything logs through `tracing`. [`init_tracing`] installs one global
//! subscriber:
//!
//! ```text
//! tracing macros → EnvFilter ─┬→ fmt layer → stderr
//!                             └→ tracing-opentelemetry → FileSpanExporter → OTLP JSON file
//! ```
//!
//! The export branch only exists when `trace_file` is configured.
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `exporter`: OpenTelemetry tracer provider with file export
//! - `otlp`: OTLP JSON span encoding
//! - `rotate`: Size-rotated file with numbered backups

mod exporter;
mod init;
mod otlp;
mod rotate;

pub use exporter::SERVICE_NAME;
pub use init::init_tracing;
