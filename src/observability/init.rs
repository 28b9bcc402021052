//! Tracing subscriber setup.

use super::exporter::JsonLinesExporter;
use super::trace_file::TraceFile;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "shoplist";

/// Name of the span file inside the data directory.
pub const SPAN_FILE: &str = "shoplist-spans.jsonl";

/// Builds a provider that writes every finished span to `trace_file`.
pub fn create_tracer_provider(trace_file: PathBuf) -> TracerProvider {
    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let exporter = JsonLinesExporter::new(TraceFile::new(trace_file), SERVICE_NAME);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

/// Installs the global subscriber: an `EnvFilter` from `trace_level`
/// (default `info`) feeding an OpenTelemetry layer that exports to
/// `shoplist-spans.jsonl` in the data directory.
///
/// Does nothing if the data directory cannot be created, and only the first
/// call takes effect.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let provider = create_tracer_provider(data_dir.join(SPAN_FILE));
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::Registry;

    #[test]
    fn tracing_spans_reach_the_span_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SPAN_FILE);
        let provider = create_tracer_provider(path.clone());
        let subscriber = Registry::default()
            .with(EnvFilter::new("debug"))
            .with(OpenTelemetryLayer::new(provider.tracer("test")));

        tracing::subscriber::with_default(subscriber, || {
            let _span = tracing::debug_span!("render", visible = 3).entered();
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        let record: serde_json::Value = serde_json::from_str(contents.trim()).unwrap();
        assert_eq!(record["name"], "render");
        assert_eq!(record["service"], SERVICE_NAME);
        assert_eq!(record["attributes"]["visible"], 3);
    }
}
