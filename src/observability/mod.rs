//! Tracing and span export.
//!
//! `tracing` spans and events are bridged into OpenTelemetry by
//! `tracing-opentelemetry`; a simple (unbatched) span processor hands each
//! finished span to [`exporter::JsonLinesExporter`], which appends it as a
//! JSON line to a size-rotated file:
//!
//! ```text
//! tracing → OpenTelemetryLayer → TracerProvider → JsonLinesExporter → TraceFile
//! ```
//!
//! The file lives at
//! `/host/.local/share/zellij/shoplist/shoplist-spans.jsonl`, rotated at
//! 10 MiB with 3 backups.

pub mod exporter;
mod init;
pub mod trace_file;

pub use init::{create_tracer_provider, init_tracing, SPAN_FILE};
