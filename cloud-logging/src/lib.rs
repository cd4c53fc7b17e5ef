//! # Cloud Logging client
//!
//! A client for the Google Cloud Logging v2 API. It writes, lists, tails and
//! deletes log entries and manages sinks, exclusions, buckets, views,
//! logs-based metrics and CMEK settings.
//!
//! Three service clients mirror the API surface one to one:
//! [`LoggingServiceV2Client`], [`ConfigServiceV2Client`] and
//! [`MetricsServiceV2Client`]. Every method returns a [`Call`] that is either
//! built from individual request fields or from a whole request, and is sent
//! with `send()` or, for list methods, `paginate()`.
//!
//! ```no_run
//! # async fn run() -> cloud_logging::Result<()> {
//! use cloud_logging::{ClientBuilder, ConfigServiceV2Client};
//!
//! let connection = ClientBuilder::new().build()?;
//! let client = ConfigServiceV2Client::new(connection);
//!
//! let mut sinks = client.list_sinks().parent("projects/my-project").paginate().await?.items();
//! while let Some(sink) = sinks.next().await {
//!     println!("{}", sink?.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The [`facade`] module offers loggers, batches, sinks and metrics bound to
//! a project, and [`blocking`] has clients for code without an async runtime.
//!
//! # Feature flags
//!
//! - `grpc-tonic` (default): gRPC transport built on `tonic`.
//! - `tls` (default): TLS with native roots for the gRPC transport.
//! - `rest` (default): JSON over HTTP transport, using `reqwest` with the
//!   `reqwest` and `reqwest-rustls` features.
//! - `gcp-auth` (default): application default credentials and service
//!   account keys through `gcp_auth`.
//! - `internal-logs` (default): diagnostics of the client itself through
//!   `tracing`.
//! - `testing`: the in-memory transport in [`testing`].
#![warn(
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    unused
)]
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]

#[cfg(not(any(feature = "grpc-tonic", feature = "rest")))]
compile_error!("at least one of the `grpc-tonic` or `rest` features must be enabled");

mod internal_logging;

mod call;
mod client;
mod connection;
mod credentials;
mod error;
mod pager;

pub mod blocking;
pub mod config;
pub mod facade;
pub mod path;
pub mod retry;
pub mod rpc;
pub mod severity;
#[cfg(any(test, feature = "testing"))]
#[cfg_attr(docsrs, doc(cfg(feature = "testing")))]
pub mod testing;
pub mod transport;

pub use call::{Async, Blocking, Call, CallOptions, RetrySetting};
pub use client::{ConfigServiceV2Client, LoggingServiceV2Client, MetricsServiceV2Client};
pub use config::{ClientBuilder, ClientConfig, MtlsEndpointMode, TransportKind};
pub use connection::Connection;
#[cfg(feature = "gcp-auth")]
pub use credentials::GcpAuthTokenSource;
pub use credentials::{Credentials, TokenSource};
pub use error::{Code, Error, Result, Status};
pub use pager::{BlockingItems, BlockingPager, ItemPager, Pager};
pub use retry::RetryPolicy;

pub use cloud_logging_proto as proto;
