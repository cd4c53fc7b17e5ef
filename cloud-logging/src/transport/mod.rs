//! Wire transports.
//!
//! A [`Transport`] moves one encoded request to the service and brings back
//! the decoded response. Retries, timeouts and request metadata are handled
//! above it by the connection, so implementations only speak their protocol.
use crate::config::{ClientConfig, TransportKind};
use crate::error::{Error, Result};
use crate::rpc::{Rpc, StreamingRpc};
use async_trait::async_trait;
use futures_util::stream::BoxStream;
use http::HeaderMap;
use std::time::Duration;

#[cfg(feature = "grpc-tonic")]
pub mod grpc;
#[cfg(feature = "rest")]
pub mod rest;

/// Per attempt metadata handed to a transport.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    /// Routing, client identification and caller supplied headers.
    pub headers: HeaderMap,
    /// Time left for this attempt.
    pub timeout: Option<Duration>,
}

/// Sends RPCs described by [`Rpc`] descriptors.
#[async_trait]
pub trait Transport: Sized + Send + Sync + 'static {
    /// Creates the transport from resolved configuration. Called once, on the
    /// first RPC issued through a connection.
    async fn connect(config: &ClientConfig) -> Result<Self>;

    async fn unary<R: Rpc>(&self, request: R::Request, context: &CallContext) -> Result<R::Response>;

    async fn streaming<R: StreamingRpc>(
        &self,
        requests: BoxStream<'static, R::Request>,
        context: &CallContext,
    ) -> Result<BoxStream<'static, Result<R::Response>>>;
}

/// The transport selected by [`ClientConfig::transport_kind`].
#[derive(Debug)]
#[non_exhaustive]
pub enum DefaultTransport {
    #[cfg(feature = "grpc-tonic")]
    Grpc(grpc::GrpcTransport),
    #[cfg(feature = "rest")]
    Rest(rest::RestTransport),
}

#[async_trait]
impl Transport for DefaultTransport {
    async fn connect(config: &ClientConfig) -> Result<Self> {
        match config.transport_kind() {
            #[cfg(feature = "grpc-tonic")]
            TransportKind::Grpc => grpc::GrpcTransport::connect(config)
                .await
                .map(DefaultTransport::Grpc),
            #[cfg(feature = "rest")]
            TransportKind::Rest => rest::RestTransport::connect(config)
                .await
                .map(DefaultTransport::Rest),
            #[allow(unreachable_patterns)]
            kind => Err(Error::Config(format!(
                "the {kind:?} transport is not enabled in this build"
            ))),
        }
    }

    async fn unary<R: Rpc>(&self, request: R::Request, context: &CallContext) -> Result<R::Response> {
        match self {
            #[cfg(feature = "grpc-tonic")]
            DefaultTransport::Grpc(transport) => transport.unary::<R>(request, context).await,
            #[cfg(feature = "rest")]
            DefaultTransport::Rest(transport) => transport.unary::<R>(request, context).await,
        }
    }

    async fn streaming<R: StreamingRpc>(
        &self,
        requests: BoxStream<'static, R::Request>,
        context: &CallContext,
    ) -> Result<BoxStream<'static, Result<R::Response>>> {
        match self {
            #[cfg(feature = "grpc-tonic")]
            DefaultTransport::Grpc(transport) => transport.streaming::<R>(requests, context).await,
            #[cfg(feature = "rest")]
            DefaultTransport::Rest(transport) => transport.streaming::<R>(requests, context).await,
        }
    }
}
