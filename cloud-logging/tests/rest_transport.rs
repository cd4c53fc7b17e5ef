//! The REST transport against a recording HTTP client.
use async_trait::async_trait;
use bytes::Bytes;
use cloud_logging::proto::google::logging::v2::{LogEntry, TailLogEntriesRequest};
use cloud_logging::proto::google::logging::v2::log_entry::Payload;
use cloud_logging::proto::serializers::json_to_struct;
use cloud_logging::transport::rest::{HttpClient, HttpError};
use cloud_logging::{
    ClientBuilder, Code, ConfigServiceV2Client, Credentials, Error, LoggingServiceV2Client,
    TransportKind,
};
use http::{Method, Request, Response};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    uri: http::Uri,
    headers: http::HeaderMap,
    body: Bytes,
}

impl Recorded {
    fn method(&self) -> &Method {
        &self.method
    }

    fn uri(&self) -> &http::Uri {
        &self.uri
    }

    fn headers(&self) -> &http::HeaderMap {
        &self.headers
    }

    fn body(&self) -> &Bytes {
        &self.body
    }
}

#[derive(Debug, Clone, Default)]
struct RecordingClient {
    requests: Arc<Mutex<Vec<Recorded>>>,
    responses: Arc<Mutex<VecDeque<(u16, String)>>>,
}

impl RecordingClient {
    fn respond(&self, status: u16, body: Value) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back((status, body.to_string()));
        self
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for RecordingClient {
    async fn send_bytes(&self, request: Request<Bytes>) -> Result<Response<Bytes>, HttpError> {
        let (parts, body) = request.into_parts();
        self.requests.lock().unwrap().push(Recorded {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
        });
        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or("no response queued")?;
        Ok(Response::builder().status(status).body(Bytes::from(body))?)
    }
}

fn builder(http: &RecordingClient) -> ClientBuilder {
    ClientBuilder::new()
        .with_endpoint("http://localhost:8085")
        .with_transport_kind(TransportKind::Rest)
        .with_credentials(Credentials::Anonymous)
        .with_http_client(http.clone())
}

fn query_pairs(request: &Recorded) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = request
        .uri()
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    pairs.sort();
    pairs
}

#[tokio::test]
async fn list_sinks_follows_page_tokens_over_rest() {
    let http = RecordingClient::default();
    http.respond(200, json!({"sinks": [{"name": "a"}], "nextPageToken": "t1"}))
        .respond(200, json!({"sinks": [{"name": "b", "writerIdentity": "sa@example.com"}]}));
    let client = ConfigServiceV2Client::new(builder(&http).build().unwrap());

    let sinks = client
        .list_sinks()
        .parent("projects/my-project")
        .page_size(2)
        .paginate()
        .await
        .unwrap()
        .items()
        .try_collect()
        .await
        .unwrap();
    let names: Vec<&str> = sinks.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(sinks[1].writer_identity, "sa@example.com");

    let requests = http.requests();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert_eq!(*request.method(), Method::GET);
        assert_eq!(request.uri().path(), "/v2/projects/my-project/sinks");
        assert_eq!(
            request.headers()["x-goog-request-params"],
            "parent=projects/my-project"
        );
        assert!(request.headers().contains_key("x-goog-api-client"));
        assert!(!request.headers().contains_key("authorization"));
    }
    assert_eq!(
        query_pairs(&requests[0]),
        vec![("pageSize".to_string(), "2".to_string())]
    );
    assert_eq!(
        query_pairs(&requests[1]),
        vec![
            ("pageSize".to_string(), "2".to_string()),
            ("pageToken".to_string(), "t1".to_string())
        ]
    );
}

#[tokio::test]
async fn write_sends_the_whole_request_as_body() {
    let http = RecordingClient::default();
    http.respond(200, json!({}));
    let client = LoggingServiceV2Client::new(builder(&http).build().unwrap());

    client
        .write_log_entries()
        .log_name("projects/p/logs/app")
        .entries([LogEntry {
            payload: Some(Payload::TextPayload("hello".into())),
            ..Default::default()
        }])
        .send()
        .await
        .unwrap();

    let requests = http.requests();
    assert_eq!(*requests[0].method(), Method::POST);
    assert_eq!(requests[0].uri().path(), "/v2/entries:write");
    assert_eq!(requests[0].headers()["content-type"], "application/json");
    let body: Value = serde_json::from_slice(requests[0].body()).unwrap();
    assert_eq!(body["logName"], "projects/p/logs/app");
    assert_eq!(body["entries"][0]["textPayload"], "hello");
}

#[tokio::test]
async fn payload_values_equal_to_defaults_are_kept() {
    let http = RecordingClient::default();
    http.respond(200, json!({}));
    let client = LoggingServiceV2Client::new(builder(&http).build().unwrap());

    let payload = json!({"count": 0, "ok": false, "name": "", "list": [0, 1], "keep": 7});
    let Value::Object(payload) = payload else {
        unreachable!()
    };
    client
        .write_log_entries()
        .log_name("projects/p/logs/app")
        .entries([LogEntry {
            payload: Some(Payload::JsonPayload(json_to_struct(payload))),
            labels: [("empty".to_string(), String::new())].into_iter().collect(),
            ..Default::default()
        }])
        .send()
        .await
        .unwrap();

    let body: Value = serde_json::from_slice(http.requests()[0].body()).unwrap();
    let entry = &body["entries"][0];
    assert_eq!(entry["jsonPayload"]["count"], 0.0);
    assert_eq!(entry["jsonPayload"]["ok"], false);
    assert_eq!(entry["jsonPayload"]["name"], "");
    assert_eq!(entry["jsonPayload"]["list"], json!([0.0, 1.0]));
    assert_eq!(entry["jsonPayload"]["keep"], 7.0);
    assert_eq!(entry["labels"]["empty"], "");
    // Defaults of the request message itself are left out.
    assert!(body.get("partialSuccess").is_none());
    assert!(body.get("labels").is_none());
}

#[tokio::test]
async fn json_error_status_is_decoded() {
    let http = RecordingClient::default();
    http.respond(
        404,
        json!({"error": {"code": 404, "message": "sink gone", "status": "NOT_FOUND"}}),
    );
    let client = ConfigServiceV2Client::new(builder(&http).build().unwrap());

    let err = client
        .get_sink()
        .sink_name("projects/p/sinks/gone")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    match err {
        Error::Rpc(status) => assert_eq!(status.message, "sink gone"),
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn transient_http_failures_are_retried() {
    let http = RecordingClient::default();
    http.respond(503, json!({}))
        .respond(503, json!({}))
        .respond(200, json!({"logNames": ["projects/p/logs/app"]}));
    let client = LoggingServiceV2Client::new(builder(&http).build().unwrap());

    let page = client.list_logs().parent("projects/p").send().await.unwrap();
    assert_eq!(page.log_names, vec!["projects/p/logs/app"]);
    assert_eq!(http.requests().len(), 3);
}

#[tokio::test]
async fn api_key_is_sent_as_header() {
    let http = RecordingClient::default();
    http.respond(200, json!({}));
    let connection = ClientBuilder::new()
        .with_endpoint("http://localhost:8085")
        .with_transport_kind(TransportKind::Rest)
        .with_api_key("secret-key")
        .with_http_client(http.clone())
        .build()
        .unwrap();

    LoggingServiceV2Client::new(connection)
        .delete_log()
        .log_name("projects/p/logs/app")
        .send()
        .await
        .unwrap();

    let request = &http.requests()[0];
    assert_eq!(*request.method(), Method::DELETE);
    assert_eq!(request.uri().path(), "/v2/projects/p/logs/app");
    assert_eq!(request.headers()["x-goog-api-key"], "secret-key");
}

#[tokio::test]
async fn tailing_is_not_available_over_rest() {
    let http = RecordingClient::default();
    let client = LoggingServiceV2Client::new(builder(&http).build().unwrap());

    let err = client
        .tail_log_entries(futures_util::stream::iter([TailLogEntriesRequest::default()]))
        .await
        .map(|_| ())
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::Unimplemented));
    assert!(http.requests().is_empty());
}
