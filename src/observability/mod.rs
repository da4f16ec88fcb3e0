//! Logging and span export.
//!
//! ```text
//! tracing macros → EnvFilter → stderr fmt layer
//!                           └→ tracing-opentelemetry → file exporter → OTLP JSON lines
//! ```
//!
//! The reducer logs at debug level: one span per dispatch carrying the
//! action kind, plus list sizes after each transition. Set `trace_level =
//! "debug"` (or `RUST_LOG=artwork_filters=debug`) to see them, and
//! `trace_file` to keep the spans.
//!
//! # Modules
//!
//! - `init`: Subscriber assembly
//! - `exporter`: OTLP JSON span exporter and tracer provider
//! - `writer`: Rotating line writer backing the exporter

mod exporter;
mod init;
mod writer;

pub use init::init_tracing;
