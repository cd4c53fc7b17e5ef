//! An in-memory transport for tests.
//!
//! Responses are queued per RPC ahead of time and handed out in order. Every
//! request is recorded with its metadata so tests can assert on what the
//! client actually sent.
//!
//! ```no_run
//! # async fn run() -> cloud_logging::Result<()> {
//! use cloud_logging::rpc::config::GetSink;
//! use cloud_logging::testing::InMemoryTransport;
//! use cloud_logging::{ClientBuilder, ConfigServiceV2Client};
//! use cloud_logging_proto::google::logging::v2::LogSink;
//!
//! let transport = InMemoryTransport::new();
//! transport.push_response::<GetSink>(LogSink { name: "my-sink".into(), ..Default::default() });
//!
//! let client = ConfigServiceV2Client::new(
//!     ClientBuilder::new().with_transport(transport.clone()).build()?,
//! );
//! let sink = client.get_sink().sink_name("projects/p/sinks/my-sink").send().await?;
//! assert_eq!(sink.name, "my-sink");
//! assert_eq!(transport.requests::<GetSink>().len(), 1);
//! # Ok(())
//! # }
//! ```
use crate::config::ClientConfig;
use crate::error::{Code, Error, Result, Status};
use crate::rpc::{Rpc, StreamingRpc};
use crate::transport::{CallContext, Transport};
use async_trait::async_trait;
use futures_util::stream::{self, BoxStream, StreamExt};
use http::HeaderMap;
use prost::Message;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

#[derive(Debug, Clone)]
enum Reply {
    Message(Vec<u8>),
    Error(Status),
    Delayed(Duration, Box<Reply>),
}

/// A request seen by [`InMemoryTransport`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    /// The encoded request. Use [`InMemoryTransport::requests`] for decoded
    /// requests of one RPC.
    pub request: Vec<u8>,
    pub headers: HeaderMap,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Default)]
struct State {
    replies: HashMap<&'static str, VecDeque<Reply>>,
    streams: HashMap<&'static str, VecDeque<Vec<Reply>>>,
    calls: Vec<RecordedCall>,
}

/// A [`Transport`] that answers from queued responses.
///
/// Clones share their queues and recorded calls, so keep one clone for
/// assertions and hand another to [`ClientBuilder::with_transport`].
///
/// [`ClientBuilder::with_transport`]: crate::ClientBuilder::with_transport
#[derive(Clone, Debug, Default)]
pub struct InMemoryTransport {
    state: Arc<Mutex<State>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push<R: Rpc>(&self, reply: Reply) -> &Self {
        self.state()
            .replies
            .entry(R::METHOD)
            .or_default()
            .push_back(reply);
        self
    }

    /// Queues a successful response for the next call of `R`.
    pub fn push_response<R: Rpc>(&self, response: R::Response) -> &Self {
        self.push::<R>(Reply::Message(response.encode_to_vec()))
    }

    /// Queues a failure for the next call of `R`.
    pub fn push_error<R: Rpc>(&self, code: Code, message: impl Into<String>) -> &Self {
        self.push::<R>(Reply::Error(Status::new(code, message)))
    }

    /// Queues a response that is only returned after `delay`.
    pub fn push_response_after<R: Rpc>(&self, delay: Duration, response: R::Response) -> &Self {
        self.push::<R>(Reply::Delayed(
            delay,
            Box::new(Reply::Message(response.encode_to_vec())),
        ))
    }

    /// Queues the responses of the next stream opened for `R`.
    pub fn push_stream<R: StreamingRpc>(&self, responses: Vec<R::Response>) -> &Self {
        let replies = responses
            .into_iter()
            .map(|response| Reply::Message(response.encode_to_vec()))
            .collect();
        self.state()
            .streams
            .entry(R::METHOD)
            .or_default()
            .push_back(replies);
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state().calls.clone()
    }

    /// The decoded requests sent for `R`, in order.
    pub fn requests<R: Rpc>(&self) -> Vec<R::Request> {
        self.state()
            .calls
            .iter()
            .filter(|call| call.method == R::METHOD)
            .filter_map(|call| R::Request::decode(call.request.as_slice()).ok())
            .collect()
    }

    /// Forgets queued replies and recorded calls.
    pub fn reset(&self) {
        let mut state = self.state();
        state.replies.clear();
        state.streams.clear();
        state.calls.clear();
    }

    fn record<R: Rpc>(&self, request: &R::Request, context: &CallContext) {
        self.state().calls.push(RecordedCall {
            method: R::METHOD,
            request: request.encode_to_vec(),
            headers: context.headers.clone(),
            timeout: context.timeout,
        });
    }
}

async fn resolve<M: Message + Default>(reply: Reply) -> Result<M> {
    let mut reply = reply;
    loop {
        match reply {
            Reply::Message(bytes) => return Ok(M::decode(bytes.as_slice())?),
            Reply::Error(status) => return Err(Error::Rpc(status)),
            Reply::Delayed(delay, inner) => {
                tokio::time::sleep(delay).await;
                reply = *inner;
            }
        }
    }
}

#[async_trait]
impl Transport for InMemoryTransport {
    async fn connect(_config: &ClientConfig) -> Result<Self> {
        Err(Error::Config(
            "InMemoryTransport must be passed to ClientBuilder::with_transport".into(),
        ))
    }

    async fn unary<R: Rpc>(&self, request: R::Request, context: &CallContext) -> Result<R::Response> {
        self.record::<R>(&request, context);
        let reply = self
            .state()
            .replies
            .get_mut(R::METHOD)
            .and_then(VecDeque::pop_front);
        match reply {
            Some(reply) => resolve(reply).await,
            None => Err(Error::status(
                Code::Unimplemented,
                format!("no response queued for {}", R::METHOD),
            )),
        }
    }

    async fn streaming<R: StreamingRpc>(
        &self,
        mut requests: BoxStream<'static, R::Request>,
        context: &CallContext,
    ) -> Result<BoxStream<'static, Result<R::Response>>> {
        // Only the opening request is recorded; the rest stay unconsumed.
        if let Some(first) = requests.next().await {
            self.record::<R>(&first, context);
        }
        let replies = self
            .state()
            .streams
            .get_mut(R::METHOD)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| {
                Error::status(
                    Code::Unimplemented,
                    format!("no stream queued for {}", R::METHOD),
                )
            })?;
        Ok(stream::iter(replies).then(resolve::<R::Response>).boxed())
    }
}
