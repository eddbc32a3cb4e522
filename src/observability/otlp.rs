//! OTLP JSON encoding for exported spans.
//!
//! Each exported batch becomes one JSON document shaped like an OTLP
//! `ExportTraceServiceRequest`:
//!
//! ```json
//! {
//!   "resourceSpans": [{
//!     "resource": { "attributes": [{"key": "service.name", "value": {"stringValue": "poplookup"}}] },
//!     "scopeSpans": [{ "scope": {"name": "poplookup"}, "spans": [...] }]
//!   }]
//! }
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{Array, KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as Json};

/// Encodes one export batch.
pub fn encode_batch(resource: &Resource, scope: &str, batch: &[SpanData]) -> Json {
    let resource_attributes: Vec<Json> = resource
        .iter()
        .map(|(key, value)| attribute(key.as_str(), value))
        .collect();

    let spans: Vec<Json> = batch.iter().map(encode_span).collect();

    json!({
        "resourceSpans": [{
            "resource": { "attributes": resource_attributes },
            "scopeSpans": [{
                "scope": { "name": scope, "version": env!("CARGO_PKG_VERSION") },
                "spans": spans,
            }]
        }]
    })
}

fn encode_span(span: &SpanData) -> Json {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let events: Vec<Json> = span.events.iter().map(encode_event).collect();
    let links: Vec<Json> = span.links.iter().map(encode_link).collect();

    let (code, message) = match &span.status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    };

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": events,
        "links": links,
        "status": { "code": code, "message": message },
    })
}

fn encode_event(event: &Event) -> Json {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": attributes(&event.attributes),
    })
}

fn encode_link(link: &Link) -> Json {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": attributes(&link.attributes),
    })
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

/// Nanoseconds since the Unix epoch as a decimal string, `"0"` before it.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos())
        .to_string()
}

fn attributes(pairs: &[KeyValue]) -> Vec<Json> {
    pairs
        .iter()
        .map(|kv| attribute(kv.key.as_str(), &kv.value))
        .collect()
}

fn attribute(key: &str, value: &Value) -> Json {
    json!({ "key": key, "value": any_value(value) })
}

/// OTLP `AnyValue`. 64-bit integers are strings, as the JSON mapping requires.
fn any_value(value: &Value) -> Json {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(array) => json!({ "arrayValue": { "values": array_values(array) } }),
    }
}

fn array_values(array: &Array) -> Vec<Json> {
    #[allow(unreachable_patterns)]
    match array {
        Array::Bool(items) => items.iter().map(|b| json!({ "boolValue": b })).collect(),
        Array::I64(items) => items.iter().map(|i| json!({ "intValue": i.to_string() })).collect(),
        Array::F64(items) => items.iter().map(|f| json!({ "doubleValue": f })).collect(),
        Array::String(items) => items.iter().map(|s| json!({ "stringValue": s.as_str() })).collect(),
        other => vec![json!({ "stringValue": other.to_string() })],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn integers_are_strings() {
        assert_eq!(any_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(any_value(&Value::Bool(true)), json!({ "boolValue": true }));
        assert_eq!(any_value(&Value::from("dark")), json!({ "stringValue": "dark" }));
    }

    #[test]
    fn arrays_keep_their_element_type() {
        let value = Value::Array(Array::I64(vec![1, 2]));
        assert_eq!(
            any_value(&value),
            json!({ "arrayValue": { "values": [{ "intValue": "1" }, { "intValue": "2" }] } })
        );
    }

    #[test]
    fn timestamps_are_nanosecond_strings() {
        let t = UNIX_EPOCH + Duration::from_millis(1_500);
        assert_eq!(unix_nanos(t), "1500000000");
        assert_eq!(unix_nanos(UNIX_EPOCH - Duration::from_secs(1)), "0");
    }

    #[test]
    fn batch_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "poplookup")]);
        let doc = encode_batch(&resource, "poplookup", &[]);

        let scope_spans = &doc["resourceSpans"][0]["scopeSpans"][0];
        assert_eq!(scope_spans["scope"]["name"], "poplookup");
        assert_eq!(scope_spans["spans"], json!([]));

        let attrs = doc["resourceSpans"][0]["resource"]["attributes"].as_array().unwrap();
        assert!(attrs.contains(&json!({ "key": "service.name", "value": { "stringValue": "poplookup" } })));
    }
}
