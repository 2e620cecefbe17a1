//! Span exporter writing OTLP JSON lines.
//!
//! Each exported batch becomes one `resourceSpans` document. IDs are lowercase
//! hex, timestamps are nanoseconds since the Unix epoch as decimal strings.

use super::rotating::RotatingFile;
use super::SERVICE_NAME;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{SystemTime, UNIX_EPOCH};

/// Writes every batch to a [`RotatingFile`].
#[derive(Debug)]
pub struct OtlpFileExporter {
    file: RotatingFile,
    resource: Resource,
    is_shutdown: bool,
}

impl OtlpFileExporter {
    #[must_use]
    pub const fn new(file: RotatingFile, resource: Resource) -> Self {
        Self {
            file,
            resource,
            is_shutdown: false,
        }
    }

    /// The OTLP document for one batch.
    #[must_use]
    pub fn document(&self, batch: &[SpanData]) -> JsonValue {
        let resource: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| attribute(key.as_str(), value))
            .collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource },
                "scopeSpans": [{
                    "scope": { "name": SERVICE_NAME },
                    "spans": batch.iter().map(span).collect::<Vec<_>>(),
                }],
            }],
        })
    }
}

impl SpanExporter for OtlpFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("exporter is shut down"))
        } else {
            self.file
                .write_line(&self.document(&batch).to_string())
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

fn nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos())
        .to_string()
}

fn value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) => json!({ "stringValue": value.to_string() }),
    }
}

fn attribute(key: &str, v: &Value) -> JsonValue {
    json!({ "key": key, "value": value(v) })
}

fn attributes(list: &[KeyValue]) -> Vec<JsonValue> {
    list.iter()
        .map(|kv| attribute(kv.key.as_str(), &kv.value))
        .collect()
}

const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status(status: &Status) -> JsonValue {
    match status {
        Status::Unset => json!({ "code": 0, "message": "" }),
        Status::Ok => json!({ "code": 1, "message": "" }),
        Status::Error { description } => json!({ "code": 2, "message": description.to_string() }),
    }
}

fn event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": nanos(event.timestamp),
        "name": event.name.to_string(),
        "attributes": attributes(&event.attributes),
    })
}

fn link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": attributes(&link.attributes),
    })
}

fn span(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name.to_string(),
        "kind": kind_code(&span.span_kind),
        "startTimeUnixNano": nanos(span.start_time),
        "endTimeUnixNano": nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": span.events.iter().map(event).collect::<Vec<_>>(),
        "links": span.links.iter().map(link).collect::<Vec<_>>(),
        "status": status(&span.status),
    })
}
