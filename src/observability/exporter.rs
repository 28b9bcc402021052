//! Span exporter writing one JSON object per finished span.
//!
//! ```json
//! {"name":"handle_event","trace_id":"…","span_id":"…","parent_span_id":"…",
//!  "start_unix_nanos":1718000000000000000,"duration_micros":84,
//!  "attributes":{"event_type":"KeyDown"},"events":[],"status":"unset"}
//! ```

use super::trace_file::TraceFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Debug, Serialize)]
struct SpanRecord<'a> {
    service: &'a str,
    name: &'a str,
    trace_id: String,
    span_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_span_id: Option<String>,
    start_unix_nanos: u128,
    duration_micros: u128,
    attributes: BTreeMap<String, JsonValue>,
    events: Vec<EventRecord<'a>>,
    status: String,
}

#[derive(Debug, Serialize)]
struct EventRecord<'a> {
    name: &'a str,
    unix_nanos: u128,
    attributes: BTreeMap<String, JsonValue>,
}

fn unix_nanos(time: SystemTime) -> u128 {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
}

fn json_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => JsonValue::from(*f),
        Value::String(s) => JsonValue::String(s.to_string()),
        Value::Array(_) => JsonValue::String(value.to_string()),
    }
}

fn attribute_map(attributes: &[KeyValue]) -> BTreeMap<String, JsonValue> {
    attributes
        .iter()
        .map(|kv| (kv.key.to_string(), json_value(&kv.value)))
        .collect()
}

fn status_text(status: &Status) -> String {
    match status {
        Status::Unset => "unset".to_string(),
        Status::Ok => "ok".to_string(),
        Status::Error { description } => format!("error: {description}"),
    }
}

pub struct JsonLinesExporter {
    file: TraceFile,
    service: String,
    shut_down: bool,
}

impl JsonLinesExporter {
    pub fn new(file: TraceFile, service: impl Into<String>) -> Self {
        Self {
            file,
            service: service.into(),
            shut_down: false,
        }
    }

    fn line_for(&self, span: &SpanData) -> serde_json::Result<String> {
        let record = SpanRecord {
            service: &self.service,
            name: &span.name,
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id: (span.parent_span_id != SpanId::INVALID)
                .then(|| format!("{:016x}", span.parent_span_id)),
            start_unix_nanos: unix_nanos(span.start_time),
            duration_micros: span
                .end_time
                .duration_since(span.start_time)
                .unwrap_or(Duration::ZERO)
                .as_micros(),
            attributes: attribute_map(&span.attributes),
            events: span
                .events
                .iter()
                .map(|event| EventRecord {
                    name: &event.name,
                    unix_nanos: unix_nanos(event.timestamp),
                    attributes: attribute_map(&event.attributes),
                })
                .collect(),
            status: status_text(&span.status),
        };
        serde_json::to_string(&record)
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        for span in batch {
            let line = self
                .line_for(span)
                .map_err(|e| TraceError::from(e.to_string()))?;
            self.file
                .append_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))?;
        }
        Ok(())
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.shut_down {
            Err(TraceError::from("exporter is shut down"))
        } else {
            self.write_batch(&batch)
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        if let Some(name) = resource.get(opentelemetry::Key::from_static_str("service.name")) {
            self.service = name.to_string();
        }
    }
}

impl std::fmt::Debug for JsonLinesExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesExporter")
            .field("file", &self.file)
            .field("service", &self.service)
            .field("shut_down", &self.shut_down)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry_sdk::trace::TracerProvider;

    #[test]
    fn finished_spans_become_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let exporter = JsonLinesExporter::new(TraceFile::new(path.clone()), "shoplist-test");
        let provider = TracerProvider::builder()
            .with_simple_exporter(exporter)
            .build();

        let tracer = provider.tracer("test");
        tracer.in_span("outer", |_| {
            tracer.in_span("inner", |_| {});
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        let records: Vec<JsonValue> = contents
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], "inner");
        assert_eq!(records[1]["name"], "outer");
        assert_eq!(records[0]["parent_span_id"], records[1]["span_id"]);
        assert!(records[1].get("parent_span_id").is_none());
        assert_eq!(records[0]["trace_id"], records[1]["trace_id"]);
    }

    #[test]
    fn export_after_shutdown_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter =
            JsonLinesExporter::new(TraceFile::new(dir.path().join("spans.jsonl")), "test");
        exporter.shutdown();
        let result = futures_util::FutureExt::now_or_never(exporter.export(vec![]));
        assert!(matches!(result, Some(Err(_))));
    }
}
