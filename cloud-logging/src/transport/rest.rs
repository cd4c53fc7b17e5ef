//! JSON over HTTP.
//!
//! Requests are transcoded from each RPC's [`HttpRule`]: path variables are
//! substituted from request fields, the body is the whole message or a single
//! field, and the remaining non-default fields become query parameters.
use super::{CallContext, Transport};
use crate::config::ClientConfig;
use crate::credentials::Authorizer;
use crate::error::{Code, Error, Result, Status};
use crate::internal_logging::{logging_debug, logging_warn};
use crate::rpc::{HttpRule, Rpc, StreamingRpc};
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::{Request, Response, StatusCode};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt::Debug;
use std::sync::Arc;

pub type HttpError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A minimal interface for sending HTTP requests.
///
/// Lets callers bring their own HTTP stack. Non-success statuses must be
/// returned as responses, not errors, so that error bodies can be decoded.
#[async_trait]
pub trait HttpClient: Debug + Send + Sync {
    /// Sends the request and returns the response including status and body.
    ///
    /// Returns an error only if the request could not be completed at all.
    async fn send_bytes(&self, request: Request<Bytes>) -> std::result::Result<Response<Bytes>, HttpError>;
}

#[async_trait]
impl<C: HttpClient + ?Sized> HttpClient for Arc<C> {
    async fn send_bytes(&self, request: Request<Bytes>) -> std::result::Result<Response<Bytes>, HttpError> {
        self.as_ref().send_bytes(request).await
    }
}

#[cfg(feature = "reqwest")]
mod reqwest {
    use super::{async_trait, Bytes, HttpClient, HttpError, Request, Response};
    use crate::internal_logging::logging_debug;

    #[async_trait]
    impl HttpClient for ::reqwest::Client {
        async fn send_bytes(&self, request: Request<Bytes>) -> Result<Response<Bytes>, HttpError> {
            logging_debug!(name: "ReqwestClient.Send", uri = request.uri().to_string());
            let request = request.try_into()?;
            let mut response = self.execute(request).await?;
            let headers = std::mem::take(response.headers_mut());
            let mut http_response = Response::builder()
                .status(response.status())
                .body(response.bytes().await?)?;
            *http_response.headers_mut() = headers;

            Ok(http_response)
        }
    }
}

/// Transport speaking the REST binding of the logging API.
#[derive(Debug, Clone)]
pub struct RestTransport {
    client: Arc<dyn HttpClient>,
    base_url: String,
    authorizer: Authorizer,
}

#[cfg(feature = "reqwest")]
fn default_client(config: &ClientConfig) -> Result<Arc<dyn HttpClient>> {
    let mut builder = ::reqwest::Client::builder();
    if let Some(timeout) = config.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    #[cfg(feature = "reqwest-rustls")]
    if let Some(certificate) = &config.client_certificate {
        let mut pem = certificate.cert_pem.clone();
        pem.extend_from_slice(&certificate.key_pem);
        let identity = ::reqwest::Identity::from_pem(&pem)
            .map_err(|err| Error::Config(format!("invalid client certificate: {err}")))?;
        builder = builder.identity(identity);
    }
    let client = builder
        .build()
        .map_err(|err| Error::Transport(format!("failed to build HTTP client: {err}")))?;
    Ok(Arc::new(client))
}

#[cfg(not(feature = "reqwest"))]
fn default_client(_config: &ClientConfig) -> Result<Arc<dyn HttpClient>> {
    Err(Error::Config(
        "no HTTP client configured, enable the `reqwest` feature or call `with_http_client`".into(),
    ))
}

#[async_trait]
impl Transport for RestTransport {
    async fn connect(config: &ClientConfig) -> Result<Self> {
        let client = match &config.http_client {
            Some(client) => client.clone(),
            None => default_client(config)?,
        };
        let authorizer = Authorizer::new(&config.credentials, config.scopes.clone()).await?;
        let base_url = config.base_url("https");
        logging_debug!(name: "RestClient.Built", endpoint = base_url.as_str());
        Ok(RestTransport {
            client,
            base_url,
            authorizer,
        })
    }

    async fn unary<R: Rpc>(&self, request: R::Request, context: &CallContext) -> Result<R::Response> {
        let rule = R::HTTP;
        let transcoded = transcode(&rule, &request)?;
        let uri = format!("{}{}", self.base_url, transcoded.path_and_query);

        let mut headers = context.headers.clone();
        self.authorizer.authorize(&mut headers).await?;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut http_request = Request::builder()
            .method(rule.method)
            .uri(uri)
            .body(Bytes::from(transcoded.body.unwrap_or_default()))?;
        http_request.headers_mut().extend(headers);

        let response = self
            .client
            .send_bytes(http_request)
            .await
            .map_err(|err| Error::status(Code::Unavailable, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let err = status_error(status, response.body());
            logging_warn!(
                name: "RestClient.CallFailed",
                method = R::METHOD,
                http_status = status.as_u16(),
            );
            return Err(err);
        }
        let body = response.body();
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_slice(b"{}")?);
        }
        Ok(serde_json::from_slice(body)?)
    }

    async fn streaming<R: StreamingRpc>(
        &self,
        _requests: BoxStream<'static, R::Request>,
        _context: &CallContext,
    ) -> Result<BoxStream<'static, Result<R::Response>>> {
        Err(Error::Unimplemented(R::METHOD))
    }
}

/// Path segment encoding: keeps `/` so that resource names map onto the URI
/// path, and `%` so that already escaped log ids pass through.
const PATH_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/')
    .remove(b'%');

#[derive(Debug, PartialEq)]
pub(crate) struct Transcoded {
    pub(crate) path_and_query: String,
    pub(crate) body: Option<Vec<u8>>,
}

pub(crate) fn snake_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

pub(crate) fn transcode<M: serde::Serialize>(rule: &HttpRule, request: &M) -> Result<Transcoded> {
    let Value::Object(mut fields) = serde_json::to_value(request)? else {
        return Err(Error::Serialization("request did not encode to a JSON object".into()));
    };

    let mut path = String::with_capacity(rule.path.len());
    let mut rest = rule.path;
    while let Some(start) = rest.find('{') {
        let end = rest[start..]
            .find('}')
            .map(|offset| start + offset)
            .ok_or_else(|| Error::Config(format!("malformed path template {}", rule.path)))?;
        path.push_str(&rest[..start]);
        let field = &rest[start + 1..end];
        let value = match fields.remove(&snake_to_camel(field)) {
            Some(Value::String(value)) if !value.is_empty() => value,
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "request field `{field}` is required"
                )))
            }
        };
        path.extend(utf8_percent_encode(&value, PATH_VALUE));
        rest = &rest[end + 1..];
    }
    path.push_str(rest);

    let body = match rule.body {
        None => None,
        Some("*") => {
            let body = without_defaults(std::mem::take(&mut fields));
            Some(serde_json::to_vec(&Value::Object(body))?)
        }
        Some(field) => {
            let body = match fields.remove(&snake_to_camel(field)) {
                Some(Value::Object(message)) => without_defaults(message),
                _ => Map::new(),
            };
            Some(serde_json::to_vec(&Value::Object(body))?)
        }
    };

    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in without_defaults(fields) {
        append_query(&mut query, &key, value);
    }
    let query = query.finish();
    if !query.is_empty() {
        path.push('?');
        path.push_str(&query);
    }

    Ok(Transcoded {
        path_and_query: path,
        body,
    })
}

/// Drops the fields of one message that hold their proto3 default. Nested
/// messages, `Struct` payloads, maps and lists are kept as they are, so user
/// data such as `0` or `""` inside a JSON payload survives.
fn without_defaults(fields: Map<String, Value>) -> Map<String, Value> {
    fields
        .into_iter()
        .filter(|(_, value)| !is_default(value))
        .collect()
}

fn is_default(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(true) => false,
    }
}

fn append_query(query: &mut url::form_urlencoded::Serializer<'_, String>, key: &str, value: Value) {
    match value {
        Value::Object(map) => {
            for (child, value) in map {
                append_query(query, &format!("{key}.{child}"), value);
            }
        }
        Value::Array(items) => {
            for item in items {
                append_query(query, key, item);
            }
        }
        Value::Null => {}
        Value::String(s) => {
            query.append_pair(key, &s);
        }
        other => {
            query.append_pair(key, &other.to_string());
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ErrorDetail {
    message: String,
    status: String,
}

/// Maps a failed HTTP response to a status error. The `status` of a Google
/// JSON error body wins over the HTTP status.
pub(crate) fn status_error(status: StatusCode, body: &[u8]) -> Error {
    let detail = serde_json::from_slice::<ErrorBody>(body)
        .map(|body| body.error)
        .unwrap_or_default();
    let code = Code::from_status_name(&detail.status)
        .unwrap_or_else(|| Code::from_http_status(status.as_u16()));
    let message = if !detail.message.is_empty() {
        detail.message
    } else if !body.is_empty() {
        String::from_utf8_lossy(body).into_owned()
    } else {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    };
    Error::Rpc(Status::new(code, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::config::{CreateSink, GetSink, UpdateSink};
    use crate::rpc::logging::{ListLogEntries, ListLogs};
    use cloud_logging_proto::google::logging::v2::{
        CreateSinkRequest, GetSinkRequest, ListLogEntriesRequest, ListLogsRequest, LogSink,
        UpdateSinkRequest,
    };

    #[cfg(feature = "reqwest")]
    #[test]
    fn reqwest_client_is_an_http_client() {
        let client: Arc<dyn HttpClient> = Arc::new(::reqwest::Client::new());
        assert!(format!("{client:?}").contains("Client"));
    }

    #[test]
    fn path_variables_keep_slashes() {
        let request = GetSinkRequest {
            sink_name: "projects/my-project/sinks/my sink".into(),
        };
        let transcoded = transcode(&GetSink::HTTP, &request).unwrap();
        assert_eq!(
            transcoded.path_and_query,
            "/v2/projects/my-project/sinks/my%20sink"
        );
        assert_eq!(transcoded.body, None);
    }

    #[test]
    fn missing_path_variable_is_rejected() {
        let err = transcode(&GetSink::HTTP, &GetSinkRequest::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn remaining_fields_become_query_parameters() {
        let request = ListLogsRequest {
            parent: "projects/p".into(),
            page_size: 10,
            page_token: "next".into(),
            resource_names: vec!["projects/a".into(), "projects/b".into()],
        };
        let transcoded = transcode(&ListLogs::HTTP, &request).unwrap();
        assert_eq!(
            transcoded.path_and_query,
            "/v2/projects/p/logs?pageSize=10&pageToken=next&resourceNames=projects%2Fa&resourceNames=projects%2Fb"
        );
    }

    #[test]
    fn body_field_is_sent_alone() {
        let request = CreateSinkRequest {
            parent: "projects/p".into(),
            sink: Some(LogSink {
                name: "s".into(),
                destination: "storage.googleapis.com/bucket".into(),
                ..Default::default()
            }),
            unique_writer_identity: true,
        };
        let transcoded = transcode(&CreateSink::HTTP, &request).unwrap();
        assert_eq!(
            transcoded.path_and_query,
            "/v2/projects/p/sinks?uniqueWriterIdentity=true"
        );
        let body: Value = serde_json::from_slice(&transcoded.body.unwrap()).unwrap();
        assert_eq!(body["name"], "s");
        assert_eq!(body["destination"], "storage.googleapis.com/bucket");
        assert!(body.get("parent").is_none());
        assert!(body.get("filter").is_none());
    }

    #[test]
    fn field_mask_is_a_query_parameter() {
        let request = UpdateSinkRequest {
            sink_name: "projects/p/sinks/s".into(),
            sink: Some(LogSink::default()),
            update_mask: Some(prost_types::FieldMask {
                paths: vec!["filter".into(), "output_version_format".into()],
            }),
            ..Default::default()
        };
        let transcoded = transcode(&UpdateSink::HTTP, &request).unwrap();
        assert_eq!(
            transcoded.path_and_query,
            "/v2/projects/p/sinks/s?updateMask=filter%2CoutputVersionFormat"
        );
        let body: Value = serde_json::from_slice(&transcoded.body.unwrap()).unwrap();
        assert!(body.get("name").is_none());
        assert!(body.get("updateMask").is_none());
    }

    #[test]
    fn star_body_carries_the_whole_message() {
        let request = ListLogEntriesRequest {
            resource_names: vec!["projects/p".into()],
            filter: "severity>=ERROR".into(),
            ..Default::default()
        };
        let transcoded = transcode(&ListLogEntries::HTTP, &request).unwrap();
        assert_eq!(transcoded.path_and_query, "/v2/entries:list");
        let body: Value = serde_json::from_slice(&transcoded.body.unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"resourceNames": ["projects/p"], "filter": "severity>=ERROR"})
        );
    }

    #[test]
    fn error_body_status_wins() {
        let body = br#"{"error": {"code": 404, "message": "sink gone", "status": "NOT_FOUND"}}"#;
        let err = status_error(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.code(), Some(Code::NotFound));
        assert!(err.to_string().contains("sink gone"));

        let err = status_error(StatusCode::SERVICE_UNAVAILABLE, b"");
        assert_eq!(err.code(), Some(Code::Unavailable));
        assert!(err.is_transient());
    }

    #[test]
    fn camel_case_conversion() {
        assert_eq!(snake_to_camel("cmek_settings"), "cmekSettings");
        assert_eq!(snake_to_camel("parent"), "parent");
    }
}
