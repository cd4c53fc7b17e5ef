use cloud_logging_proto::google::api::MonitoredResource;
use cloud_logging_proto::google::logging::r#type::{HttpRequest, LogSeverity};
use cloud_logging_proto::google::logging::v2::{
    log_entry::Payload, log_sink, BigQueryOptions, ListLogEntriesResponse, LogEntry, LogSink,
    UpdateSinkRequest,
};
use cloud_logging_proto::serializers::json_to_struct;
use cloud_logging_proto::Empty;
use serde_json::json;

fn text_entry() -> LogEntry {
    LogEntry {
        log_name: "projects/my-project/logs/syslog".into(),
        resource: Some(MonitoredResource {
            r#type: "global".into(),
            labels: [("project_id".to_string(), "my-project".to_string())]
                .into_iter()
                .collect(),
        }),
        timestamp: Some(prost_types::Timestamp {
            seconds: 1_700_000_000,
            nanos: 500_000_000,
        }),
        severity: LogSeverity::Warning as i32,
        http_request: Some(HttpRequest {
            request_method: "GET".into(),
            response_size: 1024,
            latency: Some(prost_types::Duration {
                seconds: 0,
                nanos: 250_000_000,
            }),
            ..Default::default()
        }),
        payload: Some(Payload::TextPayload("disk almost full".into())),
        ..Default::default()
    }
}

#[test]
fn log_entry_uses_proto3_json_names() {
    let value = serde_json::to_value(text_entry()).unwrap();

    assert_eq!(value["logName"], "projects/my-project/logs/syslog");
    assert_eq!(value["resource"]["type"], "global");
    assert_eq!(value["severity"], "WARNING");
    assert_eq!(value["timestamp"], "2023-11-14T22:13:20.500Z");
    assert_eq!(value["textPayload"], "disk almost full");
    assert_eq!(value["httpRequest"]["responseSize"], "1024");
    assert_eq!(value["httpRequest"]["latency"], "0.25s");
    assert!(value.get("payload").is_none());
    assert!(value.get("jsonPayload").is_none());
}

#[test]
fn log_entry_reads_back_from_json() {
    let entry = text_entry();
    let text = serde_json::to_string(&entry).unwrap();
    let decoded: LogEntry = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn severity_accepts_names_and_numbers() {
    let by_name: LogEntry = serde_json::from_value(json!({"severity": "ERROR"})).unwrap();
    let by_number: LogEntry = serde_json::from_value(json!({"severity": 500})).unwrap();
    assert_eq!(by_name.severity(), LogSeverity::Error);
    assert_eq!(by_number.severity(), LogSeverity::Error);
    assert!(serde_json::from_value::<LogEntry>(json!({"severity": "LOUD"})).is_err());
}

#[test]
fn json_payload_is_a_plain_object() {
    let serde_json::Value::Object(map) = json!({"user": "ada", "attempt": 2.0}) else {
        unreachable!()
    };
    let entry = LogEntry {
        payload: Some(Payload::JsonPayload(json_to_struct(map))),
        ..Default::default()
    };
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["jsonPayload"], json!({"user": "ada", "attempt": 2.0}));

    let decoded: LogEntry = serde_json::from_value(value).unwrap();
    assert_eq!(decoded.payload, entry.payload);
}

#[test]
fn proto_payload_carries_type_url() {
    let response: ListLogEntriesResponse = serde_json::from_value(json!({
        "entries": [{
            "protoPayload": {
                "@type": "type.googleapis.com/google.cloud.audit.AuditLog",
                "value": "AQID"
            }
        }],
        "nextPageToken": "abc"
    }))
    .unwrap();

    assert_eq!(response.next_page_token, "abc");
    match &response.entries[0].payload {
        Some(Payload::ProtoPayload(any)) => {
            assert_eq!(
                any.type_url,
                "type.googleapis.com/google.cloud.audit.AuditLog"
            );
            assert_eq!(any.value, vec![1, 2, 3]);
        }
        other => panic!("unexpected payload {other:?}"),
    }
}

#[test]
fn sink_update_mask_is_comma_joined_camel_case() {
    let request = UpdateSinkRequest {
        sink_name: "projects/p/sinks/s".into(),
        sink: Some(LogSink {
            name: "s".into(),
            options: Some(log_sink::Options::BigqueryOptions(BigQueryOptions {
                use_partitioned_tables: true,
                uses_timestamp_column_partitioning: false,
            })),
            ..Default::default()
        }),
        update_mask: Some(prost_types::FieldMask {
            paths: vec!["destination".into(), "output_version_format".into()],
        }),
        ..Default::default()
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["updateMask"], "destination,outputVersionFormat");
    assert_eq!(value["sink"]["bigqueryOptions"]["usePartitionedTables"], true);

    let decoded: UpdateSinkRequest = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, request);
}

#[test]
fn missing_fields_take_defaults() {
    let sink: LogSink = serde_json::from_value(json!({"name": "only-name"})).unwrap();
    assert_eq!(sink.name, "only-name");
    assert!(sink.destination.is_empty());
    assert!(sink.options.is_none());

    let empty: Empty = serde_json::from_value(json!({})).unwrap();
    assert_eq!(empty, Empty {});
}
