//! Trace export to a local OTLP JSON file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → TracerProvider → OtlpFileExporter → RotatingFile
//! ```
//!
//! Every finished span is written immediately as one OTLP JSON document per
//! line to `~/.local/share/zellij/bookcase/bookcase-otlp.json`. The file is
//! rotated at 10 MB and three backups are kept.
//!
//! The filter directive comes from the `trace_level` configuration key and
//! defaults to `info`. Tracing is best effort: when the data directory cannot
//! be created the plugin runs without a subscriber.

mod exporter;
mod rotating;

use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use exporter::OtlpFileExporter;
pub use rotating::RotatingFile;

/// Service and scope name reported in every exported batch.
pub const SERVICE_NAME: &str = "Bookcase";

/// Name of the trace file inside the data directory.
pub const TRACE_FILE: &str = "bookcase-otlp.json";

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let exporter = OtlpFileExporter::new(
        RotatingFile::with_defaults(data_dir.join(TRACE_FILE)),
        resource.clone(),
    );

    let provider = TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build();

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(config.trace_level.as_str()))
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)));

    let _ = subscriber.try_init();
}
