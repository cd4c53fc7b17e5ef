//! Service clients end to end over the in-memory transport.
use cloud_logging::proto::google::logging::v2::{
    ListLogEntriesResponse, ListLogsResponse, LogEntry, LogSink, WriteLogEntriesResponse,
};
use cloud_logging::rpc::config::{CreateSink, GetSink};
use cloud_logging::rpc::logging::{ListLogEntries, ListLogs, WriteLogEntries};
use cloud_logging::testing::InMemoryTransport;
use cloud_logging::{
    ClientBuilder, Code, ConfigServiceV2Client, Connection, Credentials, Error,
    LoggingServiceV2Client, RetryPolicy,
};
use std::time::Duration;

fn connection(transport: &InMemoryTransport) -> Connection<InMemoryTransport> {
    ClientBuilder::new()
        .with_transport(transport.clone())
        .build()
        .unwrap()
}

fn entry(insert_id: &str) -> LogEntry {
    LogEntry {
        insert_id: insert_id.into(),
        log_name: "projects/p/logs/app".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn transient_failures_then_success_yield_one_result() {
    let transport = InMemoryTransport::new();
    transport
        .push_error::<ListLogs>(Code::Unavailable, "try again")
        .push_error::<ListLogs>(Code::Internal, "hiccup")
        .push_response::<ListLogs>(ListLogsResponse {
            log_names: vec!["projects/p/logs/app".into()],
            next_page_token: String::new(),
        });
    let client = LoggingServiceV2Client::new(connection(&transport));

    let response = client
        .list_logs()
        .parent("projects/p")
        .with_retry_policy(
            RetryPolicy::standard()
                .with_initial_delay(Duration::from_millis(1))
                .with_deadline(Duration::from_secs(5)),
        )
        .send()
        .await
        .unwrap();

    assert_eq!(response.log_names, vec!["projects/p/logs/app"]);
    assert_eq!(transport.calls().len(), 3);
}

#[tokio::test]
async fn permanent_errors_are_not_retried() {
    let transport = InMemoryTransport::new();
    transport.push_error::<GetSink>(Code::NotFound, "missing");
    let client = ConfigServiceV2Client::new(connection(&transport));

    let err = client
        .get_sink()
        .sink_name("projects/p/sinks/s")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn create_sink_is_attempted_once() {
    let transport = InMemoryTransport::new();
    transport.push_error::<CreateSink>(Code::Unavailable, "down");
    let client = ConfigServiceV2Client::new(connection(&transport));

    let err = client
        .create_sink()
        .parent("projects/p")
        .sink(LogSink::default())
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::Unavailable));
    assert_eq!(transport.calls().len(), 1);
    assert_eq!(transport.calls()[0].timeout, Some(Duration::from_secs(120)));
}

#[test]
fn transport_with_credentials_is_rejected_before_any_call() {
    let transport = InMemoryTransport::new();
    let err = ClientBuilder::new()
        .with_credentials(Credentials::AccessToken("token".into()))
        .with_transport(transport.clone())
        .build()
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(
        err.to_string(),
        "When providing a transport instance, provide its credentials directly."
    );
    assert!(transport.calls().is_empty());

    let err = ClientBuilder::new()
        .with_scopes(["https://www.googleapis.com/auth/logging.read"])
        .with_transport(transport.clone())
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "When providing a transport instance, provide its scopes directly."
    );
}

#[tokio::test]
async fn routing_metadata_names_the_resource() {
    let transport = InMemoryTransport::new();
    transport.push_response::<GetSink>(LogSink::default());
    let client = ConfigServiceV2Client::new(connection(&transport));

    client
        .get_sink()
        .sink_name("projects/p/sinks/my sink")
        .send()
        .await
        .unwrap();

    let headers = &transport.calls()[0].headers;
    assert_eq!(
        headers["x-goog-request-params"],
        "sink_name=projects/p/sinks/my%20sink"
    );
    assert!(headers["x-goog-api-client"]
        .to_str()
        .unwrap()
        .starts_with("gl-rust"));
}

#[tokio::test]
async fn list_write_list_preserves_server_order() {
    let transport = InMemoryTransport::new();
    transport
        .push_response::<ListLogEntries>(ListLogEntriesResponse {
            entries: vec![entry("b"), entry("a")],
            next_page_token: String::new(),
        })
        .push_response::<WriteLogEntries>(WriteLogEntriesResponse {})
        .push_response::<ListLogEntries>(ListLogEntriesResponse {
            entries: vec![entry("b"), entry("a")],
            next_page_token: "more".into(),
        })
        .push_response::<ListLogEntries>(ListLogEntriesResponse {
            entries: vec![entry("c")],
            next_page_token: String::new(),
        });
    let client = LoggingServiceV2Client::new(connection(&transport));

    let ids = |entries: Vec<LogEntry>| -> Vec<String> {
        entries.into_iter().map(|e| e.insert_id).collect()
    };

    let before = client
        .list_log_entries()
        .resource_names(["projects/p"])
        .paginate()
        .await
        .unwrap()
        .items()
        .try_collect()
        .await
        .unwrap();
    assert_eq!(ids(before), vec!["b", "a"]);

    client
        .write_log_entries()
        .entries([entry("c")])
        .send()
        .await
        .unwrap();

    let after = client
        .list_log_entries()
        .resource_names(["projects/p"])
        .paginate()
        .await
        .unwrap()
        .items()
        .try_collect()
        .await
        .unwrap();
    assert_eq!(ids(after), vec!["b", "a", "c"]);

    let written = transport.requests::<WriteLogEntries>();
    assert_eq!(written[0].entries[0].insert_id, "c");
}

#[tokio::test]
async fn slow_single_attempt_fails_with_deadline_exceeded() {
    let transport = InMemoryTransport::new();
    transport.push_response_after::<GetSink>(Duration::from_secs(5), LogSink::default());
    let client = ConfigServiceV2Client::new(connection(&transport));

    let err = client
        .get_sink()
        .sink_name("projects/p/sinks/s")
        .with_timeout(Duration::from_millis(20))
        .without_retry()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::DeadlineExceeded));
    assert!(matches!(err, Error::Rpc(_)));
}

#[tokio::test]
async fn whole_request_and_fields_cannot_be_mixed() {
    let transport = InMemoryTransport::new();
    let client = LoggingServiceV2Client::new(connection(&transport));

    let err = client
        .list_logs()
        .with_request(cloud_logging::proto::google::logging::v2::ListLogsRequest::default())
        .parent("projects/p")
        .send()
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "If the request argument is set, then none of the individual field arguments should be set."
    );
    assert!(transport.calls().is_empty());
}
