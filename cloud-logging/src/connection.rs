use crate::call::{CallOptions, RetrySetting};
use crate::config::ClientConfig;
use crate::error::{Code, Error, Result};
use crate::internal_logging::{logging_debug, logging_warn};
use crate::retry::retry_with_backoff;
use crate::rpc::{Rpc, StreamingRpc};
use crate::transport::{CallContext, DefaultTransport, Transport};
use futures_util::stream::BoxStream;
use http::header::{HeaderName, HeaderValue, USER_AGENT};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

const X_GOOG_REQUEST_PARAMS: HeaderName = HeaderName::from_static("x-goog-request-params");
const X_GOOG_API_CLIENT: HeaderName = HeaderName::from_static("x-goog-api-client");
const X_GOOG_USER_PROJECT: HeaderName = HeaderName::from_static("x-goog-user-project");
const X_GOOG_API_KEY: HeaderName = HeaderName::from_static("x-goog-api-key");

/// Routing values are form encoded, except for `/` which separates resource
/// name segments.
const ROUTING_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Shared state behind every service client: the resolved configuration and
/// the transport, which is created on first use.
///
/// Cloning is cheap and every clone shares the same transport.
pub struct Connection<T = DefaultTransport> {
    inner: Arc<Inner<T>>,
}

struct Inner<T> {
    config: ClientConfig,
    transport: OnceCell<T>,
}

impl<T> Clone for Connection<T> {
    fn clone(&self) -> Self {
        Connection {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for Connection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("config", &self.inner.config)
            .field("connected", &self.inner.transport.initialized())
            .finish()
    }
}

impl<T: Transport> Connection<T> {
    pub(crate) fn new(config: ClientConfig, transport: Option<T>) -> Self {
        Connection {
            inner: Arc::new(Inner {
                config,
                transport: OnceCell::new_with(transport),
            }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Returns the transport, connecting it first if this is the first call.
    /// Concurrent first calls share a single connection attempt.
    pub(crate) async fn transport(&self) -> Result<&T> {
        self.inner
            .transport
            .get_or_try_init(|| async {
                logging_debug!(
                    name: "Connection.Connecting",
                    endpoint = self.inner.config.endpoint(),
                );
                T::connect(&self.inner.config).await
            })
            .await
    }

    /// Issues a unary RPC under the RPC's default policy, as adjusted by
    /// `options`.
    pub(crate) async fn invoke<R: Rpc>(
        &self,
        request: R::Request,
        options: &CallOptions,
    ) -> Result<R::Response> {
        let transport = self.transport().await?;
        let policy = R::policy();
        let retry = match &options.retry {
            RetrySetting::Default => policy.retry,
            RetrySetting::Disabled => None,
            RetrySetting::Policy(retry) => Some(retry.clone()),
        };

        let result = match retry {
            Some(mut retry) => {
                if let Some(timeout) = options.timeout {
                    retry.deadline = timeout;
                }
                retry_with_backoff(&retry, R::METHOD, |remaining| {
                    let context = self.context::<R>(&request, options, Some(remaining));
                    let request = request.clone();
                    async move { attempt::<R, T>(transport, request, context).await }
                })
                .await
            }
            None => {
                let timeout = options.timeout.or(policy.timeout);
                let context = self.context::<R>(&request, options, timeout);
                attempt::<R, T>(transport, request, context).await
            }
        };

        if let Err(err) = &result {
            logging_warn!(
                name: "Rpc.Failed",
                method = R::METHOD,
                code = format!("{:?}", err.code()),
            );
            logging_debug!(name: "Rpc.FailedDetail", method = R::METHOD, error = format!("{err}"));
        }
        result
    }

    /// Opens a bidirectional stream. Streams are never retried because their
    /// requests are consumed as they are sent.
    pub(crate) async fn stream<R: StreamingRpc>(
        &self,
        requests: BoxStream<'static, R::Request>,
        options: &CallOptions,
    ) -> Result<BoxStream<'static, Result<R::Response>>> {
        let transport = self.transport().await?;
        let timeout = options.timeout.or(R::policy().timeout);
        let context = self.context::<R>(&R::Request::default(), options, timeout);
        logging_debug!(name: "Rpc.StreamOpened", method = R::METHOD);
        transport.streaming::<R>(requests, &context).await
    }

    fn context<R: Rpc>(
        &self,
        request: &R::Request,
        options: &CallOptions,
        timeout: Option<Duration>,
    ) -> CallContext {
        let config = &self.inner.config;
        let mut context = CallContext {
            headers: options.headers.clone(),
            timeout,
        };
        let headers = &mut context.headers;

        let routing = R::routing(request)
            .into_iter()
            .map(|(key, value)| format!("{key}={}", utf8_percent_encode(&value, ROUTING_VALUE)))
            .collect::<Vec<_>>()
            .join("&");
        if !routing.is_empty() {
            if let Ok(value) = HeaderValue::from_str(&routing) {
                headers.insert(X_GOOG_REQUEST_PARAMS, value);
            }
        }
        headers.insert(
            X_GOOG_API_CLIENT,
            HeaderValue::from_static(config.api_client_header()),
        );
        if let Ok(value) = HeaderValue::from_str(config.user_agent()) {
            headers.insert(USER_AGENT, value);
        }
        if let Some(value) = config
            .quota_project()
            .and_then(|project| HeaderValue::from_str(project).ok())
        {
            headers.insert(X_GOOG_USER_PROJECT, value);
        }
        if let Some(value) = config
            .api_key
            .as_deref()
            .and_then(|key| HeaderValue::from_str(key).ok())
        {
            headers.insert(X_GOOG_API_KEY, value);
        }
        context
    }
}

/// A single attempt, bounded by the context timeout.
async fn attempt<R: Rpc, T: Transport>(
    transport: &T,
    request: R::Request,
    context: CallContext,
) -> Result<R::Response> {
    logging_debug!(name: "Rpc.Attempt", method = R::METHOD);
    match context.timeout {
        Some(timeout) => tokio::time::timeout(timeout, transport.unary::<R>(request, &context))
            .await
            .map_err(|_| {
                Error::status(
                    Code::DeadlineExceeded,
                    format!("{} did not complete within {timeout:?}", R::METHOD),
                )
            })?,
        None => transport.unary::<R>(request, &context).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientBuilder;
    use crate::retry::RetryPolicy;
    use crate::rpc::config::{CreateSink, GetSink};
    use crate::rpc::logging::WriteLogEntries;
    use crate::testing::InMemoryTransport;
    use cloud_logging_proto::google::logging::v2::{
        CreateSinkRequest, GetSinkRequest, LogSink, WriteLogEntriesRequest,
        WriteLogEntriesResponse,
    };

    fn connection(transport: InMemoryTransport) -> Connection<InMemoryTransport> {
        ClientBuilder::new()
            .with_transport(transport)
            .with_endpoint("logging.googleapis.com")
            .with_quota_project("billing")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn routing_and_client_headers_are_attached() {
        let transport = InMemoryTransport::new();
        transport.push_response::<GetSink>(LogSink::default());
        let connection = connection(transport.clone());

        let request = GetSinkRequest {
            sink_name: "projects/my project/sinks/s".into(),
        };
        connection
            .invoke::<GetSink>(request, &CallOptions::default())
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        let headers = &calls[0].headers;
        assert_eq!(
            headers[&X_GOOG_REQUEST_PARAMS],
            "sink_name=projects/my%20project/sinks/s"
        );
        assert_eq!(headers[&X_GOOG_USER_PROJECT], "billing");
        assert!(headers[&X_GOOG_API_CLIENT]
            .to_str()
            .unwrap()
            .starts_with("gl-rust"));
        assert!(headers.get(&X_GOOG_API_KEY).is_none());
    }

    #[tokio::test]
    async fn transient_failures_are_retried_for_retried_rpcs() {
        let transport = InMemoryTransport::new();
        transport.push_error::<WriteLogEntries>(Code::Unavailable, "try later");
        transport.push_error::<WriteLogEntries>(Code::Internal, "oops");
        transport.push_response::<WriteLogEntries>(WriteLogEntriesResponse {});
        let connection = connection(transport.clone());

        let options = CallOptions::default().with_retry_policy(
            RetryPolicy::standard().with_initial_delay(Duration::from_millis(1)),
        );
        connection
            .invoke::<WriteLogEntries>(WriteLogEntriesRequest::default(), &options)
            .await
            .unwrap();
        assert_eq!(transport.requests::<WriteLogEntries>().len(), 3);
    }

    #[tokio::test]
    async fn create_sink_is_not_retried() {
        let transport = InMemoryTransport::new();
        transport.push_error::<CreateSink>(Code::Unavailable, "try later");
        transport.push_response::<CreateSink>(LogSink::default());
        let connection = connection(transport.clone());

        let err = connection
            .invoke::<CreateSink>(CreateSinkRequest::default(), &CallOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::Unavailable));
        assert_eq!(transport.requests::<CreateSink>().len(), 1);
        assert_eq!(transport.calls()[0].timeout, Some(Duration::from_secs(120)));
    }

    #[tokio::test]
    async fn disabled_retry_makes_a_single_attempt() {
        let transport = InMemoryTransport::new();
        transport.push_error::<GetSink>(Code::Unavailable, "try later");
        let connection = connection(transport.clone());

        let options = CallOptions::default().without_retry();
        let err = connection
            .invoke::<GetSink>(GetSinkRequest::default(), &options)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Rpc(_)));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn slow_attempt_fails_with_deadline_exceeded() {
        let transport = InMemoryTransport::new();
        transport.push_response_after::<CreateSink>(Duration::from_secs(5), LogSink::default());
        let connection = connection(transport.clone());

        let options = CallOptions::default().with_timeout(Duration::from_millis(20));
        let err = connection
            .invoke::<CreateSink>(CreateSinkRequest::default(), &options)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Rpc(_)));
        assert_eq!(err.code(), Some(Code::DeadlineExceeded));
    }

    #[tokio::test]
    async fn api_key_header_is_sent() {
        let transport = InMemoryTransport::new();
        transport.push_response::<GetSink>(LogSink::default());
        let connection = ClientBuilder::new()
            .with_api_key("secret-key")
            .build()
            .map(|connection| (connection.config().clone(), transport.clone()))
            .map(|(config, transport)| Connection::new(config, Some(transport)))
            .unwrap();

        connection
            .invoke::<GetSink>(GetSinkRequest::default(), &CallOptions::default())
            .await
            .unwrap();
        assert_eq!(transport.calls()[0].headers[&X_GOOG_API_KEY], "secret-key");
    }
}
