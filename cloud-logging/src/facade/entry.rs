use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use cloud_logging_proto::google::api::MonitoredResource;
use cloud_logging_proto::google::logging::r#type::HttpRequest;
use cloud_logging_proto::google::logging::v2::{
    log_entry, LogEntry, LogEntryOperation, LogEntrySourceLocation,
};
use cloud_logging_proto::serializers::{json_to_struct, struct_to_json};
use cloud_logging_proto::LogSeverity;
use prost_types::{Any, Timestamp};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// What an entry carries.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    #[default]
    Empty,
    Text(String),
    Json(Map<String, Value>),
    Proto(Any),
}

/// A log entry as written by a [`Logger`](super::Logger) or returned by a
/// listing.
///
/// Unset fields take the logger's or the service's defaults when written.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entry {
    pub log_name: Option<String>,
    pub resource: Option<MonitoredResource>,
    pub severity: LogSeverity,
    pub timestamp: Option<DateTime<Utc>>,
    /// Set by the service.
    pub received_timestamp: Option<DateTime<Utc>>,
    pub insert_id: Option<String>,
    pub http_request: Option<HttpRequest>,
    pub labels: Option<HashMap<String, String>>,
    pub operation: Option<LogEntryOperation>,
    pub trace: Option<String>,
    pub span_id: Option<String>,
    pub trace_sampled: bool,
    pub source_location: Option<LogEntrySourceLocation>,
    pub payload: Payload,
}

impl Entry {
    pub fn new(payload: Payload) -> Self {
        Entry {
            payload,
            ..Default::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Payload::Text(text.into()))
    }

    /// An entry with a JSON payload. Values other than objects are stored
    /// under a `message` key.
    pub fn json(value: Value) -> Self {
        let map = match value {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("message".to_string(), other);
                map
            }
        };
        Self::new(Payload::Json(map))
    }

    pub fn proto(message: Any) -> Self {
        Self::new(Payload::Proto(message))
    }

    pub fn with_severity(mut self, severity: LogSeverity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_insert_id(mut self, insert_id: impl Into<String>) -> Self {
        self.insert_id = Some(insert_id.into());
        self
    }

    pub fn with_labels(mut self, labels: HashMap<String, String>) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_resource(mut self, resource: MonitoredResource) -> Self {
        self.resource = Some(resource);
        self
    }

    pub fn with_http_request(mut self, request: HttpRequest) -> Self {
        self.http_request = Some(request);
        self
    }

    /// Links the entry to a trace, as `projects/<project>/traces/<trace id>`.
    pub fn with_trace(mut self, trace: impl Into<String>, span_id: impl Into<String>, sampled: bool) -> Self {
        self.trace = Some(trace.into());
        self.span_id = Some(span_id.into());
        self.trace_sampled = sampled;
        self
    }

    pub fn with_source_location(mut self, location: LogEntrySourceLocation) -> Self {
        self.source_location = Some(location);
        self
    }

    pub fn with_operation(mut self, operation: LogEntryOperation) -> Self {
        self.operation = Some(operation);
        self
    }

    /// The log id, the last component of the log name with `%2F` decoded.
    pub fn log_id(&self) -> Option<String> {
        let name = self.log_name.as_deref()?;
        let (_, id) = name.split_once("/logs/")?;
        Some(
            percent_encoding::percent_decode_str(id)
                .decode_utf8_lossy()
                .into_owned(),
        )
    }
}

fn to_timestamp(time: DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: time.timestamp(),
        nanos: time.timestamp_subsec_nanos() as i32,
    }
}

fn from_timestamp(timestamp: Timestamp) -> Result<DateTime<Utc>> {
    let nanos = u32::try_from(timestamp.nanos)
        .map_err(|_| Error::Serialization(format!("negative nanos in {timestamp:?}")))?;
    DateTime::from_timestamp(timestamp.seconds, nanos)
        .ok_or_else(|| Error::Serialization(format!("timestamp out of range: {timestamp:?}")))
}

impl From<Entry> for LogEntry {
    fn from(entry: Entry) -> Self {
        let payload = match entry.payload {
            Payload::Empty => None,
            Payload::Text(text) => Some(log_entry::Payload::TextPayload(text)),
            Payload::Json(map) => Some(log_entry::Payload::JsonPayload(json_to_struct(map))),
            Payload::Proto(any) => Some(log_entry::Payload::ProtoPayload(any)),
        };
        LogEntry {
            log_name: entry.log_name.unwrap_or_default(),
            resource: entry.resource,
            timestamp: entry.timestamp.map(to_timestamp),
            receive_timestamp: entry.received_timestamp.map(to_timestamp),
            severity: entry.severity as i32,
            insert_id: entry.insert_id.unwrap_or_default(),
            http_request: entry.http_request,
            labels: entry.labels.unwrap_or_default(),
            operation: entry.operation,
            trace: entry.trace.unwrap_or_default(),
            span_id: entry.span_id.unwrap_or_default(),
            trace_sampled: entry.trace_sampled,
            source_location: entry.source_location,
            split: None,
            payload,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

impl TryFrom<LogEntry> for Entry {
    type Error = Error;

    fn try_from(entry: LogEntry) -> Result<Self> {
        let payload = match entry.payload {
            None => Payload::Empty,
            Some(log_entry::Payload::TextPayload(text)) => Payload::Text(text),
            Some(log_entry::Payload::JsonPayload(value)) => Payload::Json(struct_to_json(&value)),
            Some(log_entry::Payload::ProtoPayload(any)) => Payload::Proto(any),
        };
        Ok(Entry {
            log_name: non_empty(entry.log_name),
            resource: entry.resource,
            severity: LogSeverity::try_from(entry.severity)
                .unwrap_or_else(|_| crate::severity::severity_from_level(entry.severity)),
            timestamp: entry.timestamp.map(from_timestamp).transpose()?,
            received_timestamp: entry.receive_timestamp.map(from_timestamp).transpose()?,
            insert_id: non_empty(entry.insert_id),
            http_request: entry.http_request,
            labels: (!entry.labels.is_empty()).then_some(entry.labels),
            operation: entry.operation,
            trace: non_empty(entry.trace),
            span_id: non_empty(entry.span_id),
            trace_sampled: entry.trace_sampled,
            source_location: entry.source_location,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn converts_to_the_wire_entry() {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let entry = Entry::json(json!({"event": "login", "ok": true}))
            .with_severity(LogSeverity::Notice)
            .with_timestamp(time)
            .with_insert_id("abc");

        let wire = LogEntry::from(entry.clone());
        assert_eq!(wire.severity, 300);
        assert_eq!(wire.insert_id, "abc");
        assert_eq!(wire.timestamp.as_ref().unwrap().seconds, time.timestamp());
        assert!(matches!(wire.payload, Some(log_entry::Payload::JsonPayload(_))));

        assert_eq!(Entry::try_from(wire).unwrap(), entry);
    }

    #[test]
    fn scalar_json_is_wrapped() {
        let entry = Entry::json(json!("plain"));
        assert_eq!(
            entry.payload,
            Payload::Json(json!({"message": "plain"}).as_object().unwrap().clone())
        );
    }

    #[test]
    fn empty_wire_fields_become_none() {
        let entry = Entry::try_from(LogEntry {
            log_name: "projects/p/logs/a%2Fb".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(entry.payload, Payload::Empty);
        assert_eq!(entry.insert_id, None);
        assert_eq!(entry.labels, None);
        assert_eq!(entry.log_id().as_deref(), Some("a/b"));
    }

    #[test]
    fn invalid_timestamps_are_rejected() {
        let err = Entry::try_from(LogEntry {
            timestamp: Some(Timestamp {
                seconds: 0,
                nanos: -1,
            }),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
