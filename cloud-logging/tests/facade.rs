//! The project bound facade over the in-memory transport.
use cloud_logging::facade::{Client, Entry, EntryQuery, Payload, DESCENDING};
use cloud_logging::proto::google::logging::v2::{
    log_entry, ListLogEntriesResponse, LogEntry, LogMetric, LogSink, WriteLogEntriesResponse,
};
use cloud_logging::rpc::config::{CreateSink, DeleteSink, GetSink, UpdateSink};
use cloud_logging::rpc::logging::{DeleteLog, ListLogEntries, WriteLogEntries};
use cloud_logging::rpc::metrics::{CreateLogMetric, GetLogMetric, UpdateLogMetric};
use cloud_logging::severity::{LogSeverity, SeverityFilter};
use cloud_logging::testing::InMemoryTransport;
use cloud_logging::{ClientBuilder, Code};
use serde_json::json;
use std::collections::HashMap;

fn client(transport: &InMemoryTransport) -> Client<InMemoryTransport> {
    let connection = ClientBuilder::new()
        .with_project("my-project")
        .with_transport(transport.clone())
        .build()
        .unwrap();
    Client::new(connection).unwrap()
}

#[tokio::test]
async fn logger_fills_in_name_and_resource() {
    let transport = InMemoryTransport::new();
    transport.push_response::<WriteLogEntries>(WriteLogEntriesResponse {});
    let logger = client(&transport).logger("app/requests");

    logger.log_text("hello").await.unwrap();

    let sent = transport.requests::<WriteLogEntries>();
    let entry = &sent[0].entries[0];
    assert_eq!(entry.log_name, "projects/my-project/logs/app%2Frequests");
    assert_eq!(entry.resource.as_ref().unwrap().r#type, "global");
    assert_eq!(
        entry.payload,
        Some(log_entry::Payload::TextPayload("hello".into()))
    );
    assert_eq!(sent[0].log_name, "");
}

#[tokio::test]
async fn entry_fields_win_over_logger_defaults() {
    let transport = InMemoryTransport::new();
    transport.push_response::<WriteLogEntries>(WriteLogEntriesResponse {});
    let logger = client(&transport)
        .logger("app")
        .with_labels(HashMap::from([("env".to_string(), "prod".to_string())]));

    let own_labels = HashMap::from([("env".to_string(), "canary".to_string())]);
    logger
        .log(
            Entry::json(json!({"user": "ana"}))
                .with_severity(LogSeverity::Warning)
                .with_labels(own_labels.clone()),
        )
        .await
        .unwrap();

    let entry = &transport.requests::<WriteLogEntries>()[0].entries[0];
    assert_eq!(entry.labels, own_labels);
    assert_eq!(entry.severity, LogSeverity::Warning as i32);
    assert!(matches!(
        entry.payload,
        Some(log_entry::Payload::JsonPayload(_))
    ));
}

#[tokio::test]
async fn batch_commits_in_one_request() {
    let transport = InMemoryTransport::new();
    transport.push_response::<WriteLogEntries>(WriteLogEntriesResponse {});
    let logger = client(&transport)
        .logger("app")
        .with_labels(HashMap::from([("env".to_string(), "prod".to_string())]));

    let mut batch = logger.batch();
    batch
        .log_text("one")
        .log_struct(json!({"two": 2}))
        .log_empty();
    assert_eq!(batch.len(), 3);
    batch.commit().await.unwrap();
    assert!(batch.is_empty());

    // Nothing left to send.
    batch.commit().await.unwrap();

    let sent = transport.requests::<WriteLogEntries>();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].log_name, "projects/my-project/logs/app");
    assert_eq!(sent[0].labels["env"], "prod");
    assert_eq!(sent[0].resource.as_ref().unwrap().r#type, "global");
    assert_eq!(sent[0].entries.len(), 3);
    assert!(sent[0].entries.iter().all(|e| e.log_name.is_empty()));
}

#[tokio::test]
async fn failed_batch_keeps_its_entries() {
    let transport = InMemoryTransport::new();
    transport.push_error::<WriteLogEntries>(Code::PermissionDenied, "no");
    let logger = client(&transport).logger("app");

    let mut batch = logger.batch();
    batch.log_text("kept");
    assert!(batch.commit().await.is_err());
    assert_eq!(batch.len(), 1);
}

#[tokio::test]
async fn logger_listing_is_scoped_to_the_log_and_the_last_day() {
    let transport = InMemoryTransport::new();
    transport.push_response::<ListLogEntries>(ListLogEntriesResponse {
        entries: vec![LogEntry {
            log_name: "projects/my-project/logs/app".into(),
            payload: Some(log_entry::Payload::TextPayload("hi".into())),
            ..Default::default()
        }],
        next_page_token: String::new(),
    });
    let logger = client(&transport).logger("app");

    let entries = logger
        .list_entries(EntryQuery::new().with_filter("severity>=INFO").with_order_by(DESCENDING))
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].payload, Payload::Text("hi".into()));

    let request = &transport.requests::<ListLogEntries>()[0];
    assert_eq!(request.resource_names, vec!["projects/my-project"]);
    assert_eq!(request.order_by, "timestamp desc");
    assert!(request
        .filter
        .starts_with("severity>=INFO AND logName=\"projects/my-project/logs/app\" AND timestamp>=\""));
}

#[tokio::test]
async fn explicit_timestamp_filter_is_left_alone() {
    let transport = InMemoryTransport::new();
    transport.push_response::<ListLogEntries>(ListLogEntriesResponse::default());
    let client = client(&transport);

    let filter = "timestamp>=\"2020-01-01T00:00:00Z\"";
    client
        .list_entries(
            EntryQuery::new()
                .with_filter(filter)
                .with_resource_names(["folders/42"]),
        )
        .await
        .unwrap();

    let request = &transport.requests::<ListLogEntries>()[0];
    assert_eq!(request.filter, filter);
    assert_eq!(request.resource_names, vec!["folders/42"]);
}

#[tokio::test]
async fn listed_entries_filter_by_severity_locally() {
    let transport = InMemoryTransport::new();
    transport.push_response::<ListLogEntries>(ListLogEntriesResponse {
        entries: LogSeverity::ALL
            .iter()
            .map(|severity| LogEntry {
                severity: *severity as i32,
                ..Default::default()
            })
            .collect(),
        next_page_token: String::new(),
    });
    let client = client(&transport);

    let filter: SeverityFilter = "severity > DEBUG AND severity <= WARNING".parse().unwrap();
    let selected: Vec<LogSeverity> = client
        .list_entries(EntryQuery::new())
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap()
        .into_iter()
        .map(|entry| entry.severity)
        .filter(|severity| filter.matches(*severity))
        .collect();
    assert_eq!(
        selected,
        vec![LogSeverity::Info, LogSeverity::Notice, LogSeverity::Warning]
    );
}

#[tokio::test]
async fn logger_delete_targets_the_log() {
    let transport = InMemoryTransport::new();
    transport.push_response::<DeleteLog>(Default::default());
    client(&transport).logger("app").delete().await.unwrap();
    assert_eq!(
        transport.requests::<DeleteLog>()[0].log_name,
        "projects/my-project/logs/app"
    );
}

#[tokio::test]
async fn sink_lifecycle_syncs_server_fields() {
    let transport = InMemoryTransport::new();
    transport
        .push_response::<CreateSink>(LogSink {
            name: "errors".into(),
            filter: "severity>=ERROR".into(),
            destination: "storage.googleapis.com/bucket".into(),
            writer_identity: "serviceAccount:p-123@gcp-sa-logging.iam.gserviceaccount.com".into(),
            ..Default::default()
        })
        .push_response::<GetSink>(LogSink::default())
        .push_error::<GetSink>(Code::NotFound, "gone")
        .push_error::<GetSink>(Code::PermissionDenied, "denied")
        .push_response::<UpdateSink>(LogSink {
            name: "errors".into(),
            filter: "severity>=CRITICAL".into(),
            destination: "storage.googleapis.com/bucket".into(),
            ..Default::default()
        })
        .push_response::<DeleteSink>(Default::default());
    let client = client(&transport);

    let mut sink = client
        .sink("errors")
        .with_filter("severity>=ERROR")
        .with_destination("storage.googleapis.com/bucket");
    assert_eq!(sink.writer_identity(), None);

    sink.create(true).await.unwrap();
    assert_eq!(
        sink.writer_identity(),
        Some("serviceAccount:p-123@gcp-sa-logging.iam.gserviceaccount.com")
    );
    let created = &transport.requests::<CreateSink>()[0];
    assert_eq!(created.parent, "projects/my-project");
    assert!(created.unique_writer_identity);
    assert_eq!(created.sink.as_ref().unwrap().filter, "severity>=ERROR");

    assert!(sink.exists().await.unwrap());
    assert!(!sink.exists().await.unwrap());
    assert_eq!(
        sink.exists().await.unwrap_err().code(),
        Some(Code::PermissionDenied)
    );

    sink.filter = Some("severity>=CRITICAL".into());
    sink.update(false).await.unwrap();
    assert_eq!(sink.filter.as_deref(), Some("severity>=CRITICAL"));
    assert_eq!(
        transport.requests::<UpdateSink>()[0].sink_name,
        "projects/my-project/sinks/errors"
    );

    sink.delete().await.unwrap();
    assert_eq!(
        transport.requests::<DeleteSink>()[0].sink_name,
        "projects/my-project/sinks/errors"
    );
}

#[tokio::test]
async fn metric_create_reload_update() {
    let transport = InMemoryTransport::new();
    transport
        .push_response::<CreateLogMetric>(LogMetric {
            name: "errors".into(),
            filter: "severity>=ERROR".into(),
            ..Default::default()
        })
        .push_response::<GetLogMetric>(LogMetric {
            name: "errors".into(),
            filter: "severity>=ERROR".into(),
            description: "added elsewhere".into(),
            ..Default::default()
        })
        .push_response::<UpdateLogMetric>(LogMetric {
            name: "errors".into(),
            filter: "severity>=WARNING".into(),
            description: "added elsewhere".into(),
            ..Default::default()
        });
    let client = client(&transport);

    let mut metric = client.metric("errors").with_filter("severity>=ERROR");
    metric.create().await.unwrap();
    assert_eq!(
        transport.requests::<CreateLogMetric>()[0].parent,
        "projects/my-project"
    );

    metric.reload().await.unwrap();
    assert_eq!(metric.description.as_deref(), Some("added elsewhere"));

    metric.filter = Some("severity>=WARNING".into());
    metric.update().await.unwrap();
    let updated = &transport.requests::<UpdateLogMetric>()[0];
    assert_eq!(updated.metric_name, "projects/my-project/metrics/errors");
    assert_eq!(updated.metric.as_ref().unwrap().filter, "severity>=WARNING");
}
