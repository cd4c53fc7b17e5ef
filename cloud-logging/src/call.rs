//! Typed request builders returned by the service clients.
use crate::connection::Connection;
use crate::error::{Error, Result};
use crate::pager::{BlockingPager, Pager};
use crate::retry::RetryPolicy;
use crate::rpc::{PagedRpc, Rpc};
use crate::transport::{DefaultTransport, Transport};
use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

const REQUEST_CONFLICT: &str =
    "If the request argument is set, then none of the individual field arguments should be set.";

/// Marker for calls that are awaited.
#[derive(Debug, Clone, Copy, Default)]
pub struct Async;

/// Marker for calls that block the calling thread until they complete.
#[derive(Debug, Clone)]
pub struct Blocking {
    pub(crate) runtime: Arc<Runtime>,
}

/// How a call is retried.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RetrySetting {
    /// The RPC's default policy.
    #[default]
    Default,
    Disabled,
    Policy(RetryPolicy),
}

/// Per call overrides of the RPC defaults.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub(crate) timeout: Option<Duration>,
    pub(crate) retry: RetrySetting,
    pub(crate) headers: HeaderMap,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The overall deadline of a retried call, or the timeout of a single
    /// attempt.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = RetrySetting::Policy(policy);
        self
    }

    /// Makes a single attempt, whatever the RPC's default.
    pub fn without_retry(mut self) -> Self {
        self.retry = RetrySetting::Disabled;
        self
    }

    /// Adds a metadata entry sent with every attempt.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

type Edit<Req> = Box<dyn FnOnce(&mut Req) -> Result<()> + Send>;

/// A pending RPC.
///
/// The request is either passed whole with [`Call::with_request`] or built
/// from the flattened field setters generated for each RPC, such as
/// `parent(..)` or `sink_name(..)`. Mixing both is rejected when the call is
/// sent, before anything goes over the wire.
pub struct Call<R: Rpc, T = DefaultTransport, M = Async> {
    connection: Connection<T>,
    mode: M,
    request: Option<R::Request>,
    fields: R::Request,
    flattened: Vec<&'static str>,
    edits: Vec<Edit<R::Request>>,
    options: CallOptions,
}

impl<R: Rpc, T, M: fmt::Debug> fmt::Debug for Call<R, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Call")
            .field("method", &R::METHOD)
            .field("mode", &self.mode)
            .field("request", &self.request)
            .field("fields", &self.fields)
            .field("flattened", &self.flattened)
            .field("options", &self.options)
            .finish()
    }
}

impl<R: Rpc, T, M> Call<R, T, M> {
    pub(crate) fn new(connection: Connection<T>, mode: M) -> Self {
        Call {
            connection,
            mode,
            request: None,
            fields: R::Request::default(),
            flattened: Vec::new(),
            edits: Vec::new(),
            options: CallOptions::default(),
        }
    }

    /// Sends `request` as is.
    pub fn with_request(mut self, request: impl Into<R::Request>) -> Self {
        self.request = Some(request.into());
        self
    }

    pub fn with_options(mut self, options: CallOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options = self.options.with_timeout(timeout);
        self
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.options = self.options.with_retry_policy(policy);
        self
    }

    pub fn without_retry(mut self) -> Self {
        self.options = self.options.without_retry();
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.options = self.options.with_header(name, value);
        self
    }

    pub(crate) fn set_field(
        mut self,
        name: &'static str,
        set: impl FnOnce(&mut R::Request),
    ) -> Self {
        set(&mut self.fields);
        self.flattened.push(name);
        self
    }

    fn edit(mut self, edit: impl FnOnce(&mut R::Request) -> Result<()> + Send + 'static) -> Self {
        self.edits.push(Box::new(edit));
        self
    }

    /// Resolves the request to send and checks it is unambiguous and valid.
    fn into_parts(self) -> Result<(Connection<T>, M, R::Request, CallOptions)> {
        let mut request = match self.request {
            Some(_) if !self.flattened.is_empty() => {
                return Err(Error::InvalidArgument(REQUEST_CONFLICT.into()));
            }
            Some(request) => request,
            None => self.fields,
        };
        for edit in self.edits {
            edit(&mut request)?;
        }
        R::validate(&request)?;
        Ok((self.connection, self.mode, request, self.options))
    }
}

impl<R: PagedRpc, T, M> Call<R, T, M> {
    /// Maximum number of results per page. Zero lets the service decide.
    pub fn page_size(self, page_size: i32) -> Self {
        self.edit(move |request| {
            crate::rpc::check_page_size(page_size)?;
            R::set_page_size(request, page_size);
            Ok(())
        })
    }

    /// Resumes listing from a token returned by an earlier page.
    pub fn page_token(self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.edit(move |request| {
            R::set_page_token(request, token);
            Ok(())
        })
    }
}

impl<R: Rpc, T: Transport> Call<R, T, Async> {
    /// Sends the request and waits for the response.
    pub async fn send(self) -> Result<R::Output> {
        let (connection, _, request, options) = self.into_parts()?;
        let response = connection.invoke::<R>(request, &options).await?;
        Ok(response.into())
    }
}

impl<R: PagedRpc, T: Transport> Call<R, T, Async> {
    /// Fetches the first page and returns a pager over the rest.
    pub async fn paginate(self) -> Result<Pager<R, T>> {
        let (connection, _, request, options) = self.into_parts()?;
        Pager::start(connection, request, options).await
    }
}

impl<R: Rpc, T: Transport> Call<R, T, Blocking> {
    /// Sends the request and blocks until the response arrives.
    ///
    /// Must not be called from within an async runtime.
    pub fn send(self) -> Result<R::Output> {
        let (connection, mode, request, options) = self.into_parts()?;
        let response = mode
            .runtime
            .block_on(connection.invoke::<R>(request, &options))?;
        Ok(response.into())
    }
}

impl<R: PagedRpc, T: Transport> Call<R, T, Blocking> {
    /// Fetches the first page and returns an iterator over pages.
    pub fn paginate(self) -> Result<BlockingPager<R, T>> {
        let (connection, mode, request, options) = self.into_parts()?;
        let pager = mode
            .runtime
            .block_on(Pager::start(connection, request, options))?;
        Ok(BlockingPager::new(pager, mode.runtime))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientBuilder;
    use crate::rpc::config::{ListSinks, UpdateSink};
    use crate::testing::InMemoryTransport;
    use cloud_logging_proto::google::logging::v2::{
        ListSinksRequest, ListSinksResponse, LogSink, UpdateSinkRequest,
    };

    fn call<R: Rpc>(transport: &InMemoryTransport) -> Call<R, InMemoryTransport> {
        let connection = ClientBuilder::new()
            .with_transport(transport.clone())
            .build()
            .unwrap();
        Call::new(connection, Async)
    }

    #[tokio::test]
    async fn request_and_flattened_fields_conflict() {
        let transport = InMemoryTransport::new();
        let err = call::<ListSinks>(&transport)
            .with_request(ListSinksRequest::default())
            .parent("projects/p")
            .send()
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(err.to_string(), REQUEST_CONFLICT);
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn flattened_fields_build_the_request() {
        let transport = InMemoryTransport::new();
        transport.push_response::<UpdateSink>(LogSink::default());

        call::<UpdateSink>(&transport)
            .sink_name("projects/p/sinks/s")
            .sink(LogSink {
                filter: "severity>=ERROR".into(),
                ..Default::default()
            })
            .unique_writer_identity(true)
            .update_mask(["filter"])
            .send()
            .await
            .unwrap();

        let sent = transport.requests::<UpdateSink>();
        assert_eq!(
            sent,
            vec![UpdateSinkRequest {
                sink_name: "projects/p/sinks/s".into(),
                sink: Some(LogSink {
                    filter: "severity>=ERROR".into(),
                    ..Default::default()
                }),
                unique_writer_identity: true,
                update_mask: Some(prost_types::FieldMask {
                    paths: vec!["filter".into()],
                }),
            }]
        );
    }

    #[tokio::test]
    async fn negative_page_size_is_rejected_before_sending() {
        let transport = InMemoryTransport::new();
        transport.push_response::<ListSinks>(ListSinksResponse::default());

        let err = call::<ListSinks>(&transport)
            .parent("projects/p")
            .page_size(-1)
            .paginate()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let err = call::<ListSinks>(&transport)
            .with_request(ListSinksRequest {
                page_size: -5,
                ..Default::default()
            })
            .paginate()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let err = call::<ListSinks>(&transport)
            .with_request(ListSinksRequest {
                parent: "projects/p".into(),
                page_size: -5,
                ..Default::default()
            })
            .send()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn page_options_apply_to_a_whole_request() {
        let transport = InMemoryTransport::new();
        transport.push_response::<ListSinks>(ListSinksResponse::default());

        call::<ListSinks>(&transport)
            .with_request(ListSinksRequest {
                parent: "projects/p".into(),
                ..Default::default()
            })
            .page_size(25)
            .page_token("resume")
            .send()
            .await
            .unwrap();

        let sent = transport.requests::<ListSinks>();
        assert_eq!(sent[0].page_size, 25);
        assert_eq!(sent[0].page_token, "resume");
        assert_eq!(sent[0].parent, "projects/p");
    }
}
