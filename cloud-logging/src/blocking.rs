//! Blocking service clients.
//!
//! These wrap the same [`Connection`] as the async clients and drive every
//! call to completion on a private current-thread runtime, on the calling
//! thread. They must not be used from within an async runtime.
//!
//! ```no_run
//! # fn run() -> cloud_logging::Result<()> {
//! use cloud_logging::blocking::ConfigServiceV2Client;
//! use cloud_logging::ClientBuilder;
//!
//! let client = ConfigServiceV2Client::new(ClientBuilder::new().build()?)?;
//! for sink in client.list_sinks().parent("projects/my-project").paginate()?.items() {
//!     println!("{}", sink?.name);
//! }
//! # Ok(())
//! # }
//! ```
use crate::call::{Blocking, CallOptions};
use crate::client::calls;
use crate::connection::Connection;
use crate::error::{Error, Result};
use crate::rpc::config::*;
use crate::rpc::logging::{
    DeleteLog, ListLogEntries, ListLogs, ListMonitoredResourceDescriptors, WriteLogEntries,
};
use crate::rpc::metrics::{
    CreateLogMetric, DeleteLogMetric, GetLogMetric, ListLogMetrics, UpdateLogMetric,
};
use crate::transport::{DefaultTransport, Transport};
use cloud_logging_proto::google::logging::v2::{TailLogEntriesRequest, TailLogEntriesResponse};
use futures_util::stream::{BoxStream, StreamExt};
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn runtime() -> Result<Arc<Runtime>> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map(Arc::new)
        .map_err(|err| Error::Transport(format!("failed to start the client runtime: {err}")))
}

macro_rules! blocking_client {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<T = DefaultTransport> {
            connection: Connection<T>,
            runtime: Arc<Runtime>,
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                $name {
                    connection: self.connection.clone(),
                    runtime: self.runtime.clone(),
                }
            }
        }

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("connection", &self.connection)
                    .finish_non_exhaustive()
            }
        }

        impl<T: Transport> $name<T> {
            /// Wraps `connection`, starting the runtime the calls run on.
            pub fn new(connection: Connection<T>) -> Result<Self> {
                Ok($name {
                    connection,
                    runtime: runtime()?,
                })
            }

            pub fn connection(&self) -> &Connection<T> {
                &self.connection
            }

            fn mode(&self) -> Blocking {
                Blocking {
                    runtime: self.runtime.clone(),
                }
            }
        }
    };
}

blocking_client! {
    /// Blocking variant of [`crate::LoggingServiceV2Client`].
    LoggingServiceV2Client
}

blocking_client! {
    /// Blocking variant of [`crate::ConfigServiceV2Client`].
    ConfigServiceV2Client
}

blocking_client! {
    /// Blocking variant of [`crate::MetricsServiceV2Client`].
    MetricsServiceV2Client
}

impl<T: Transport> LoggingServiceV2Client<T> {
    calls! { Blocking =>
        delete_log: DeleteLog,
        write_log_entries: WriteLogEntries,
        list_log_entries: ListLogEntries,
        list_monitored_resource_descriptors: ListMonitoredResourceDescriptors,
        list_logs: ListLogs,
    }

    /// Opens a tail session. Responses are pulled lazily by the returned
    /// iterator, which never ends on its own while the service keeps the
    /// session open.
    pub fn tail_log_entries<I>(&self, requests: I) -> Result<TailIter>
    where
        I: IntoIterator<Item = TailLogEntriesRequest>,
        I::IntoIter: Send + 'static,
    {
        self.tail_log_entries_with_options(requests, CallOptions::default())
    }

    pub fn tail_log_entries_with_options<I>(
        &self,
        requests: I,
        options: CallOptions,
    ) -> Result<TailIter>
    where
        I: IntoIterator<Item = TailLogEntriesRequest>,
        I::IntoIter: Send + 'static,
    {
        let requests = futures_util::stream::iter(requests).boxed();
        let stream = self.runtime.block_on(
            self.connection
                .stream::<crate::rpc::logging::TailLogEntries>(requests, &options),
        )?;
        Ok(TailIter {
            stream,
            runtime: self.runtime.clone(),
        })
    }
}

impl<T: Transport> ConfigServiceV2Client<T> {
    calls! { Blocking =>
        list_buckets: ListBuckets,
        get_bucket: GetBucket,
        create_bucket: CreateBucket,
        update_bucket: UpdateBucket,
        delete_bucket: DeleteBucket,
        undelete_bucket: UndeleteBucket,
        list_views: ListViews,
        get_view: GetView,
        create_view: CreateView,
        update_view: UpdateView,
        delete_view: DeleteView,
        list_sinks: ListSinks,
        get_sink: GetSink,
        create_sink: CreateSink,
        update_sink: UpdateSink,
        delete_sink: DeleteSink,
        list_exclusions: ListExclusions,
        get_exclusion: GetExclusion,
        create_exclusion: CreateExclusion,
        update_exclusion: UpdateExclusion,
        delete_exclusion: DeleteExclusion,
        get_cmek_settings: GetCmekSettings,
        update_cmek_settings: UpdateCmekSettings,
        get_settings: GetSettings,
        update_settings: UpdateSettings,
    }
}

impl<T: Transport> MetricsServiceV2Client<T> {
    calls! { Blocking =>
        list_log_metrics: ListLogMetrics,
        get_log_metric: GetLogMetric,
        create_log_metric: CreateLogMetric,
        update_log_metric: UpdateLogMetric,
        delete_log_metric: DeleteLogMetric,
    }
}

/// Responses of a blocking tail session.
pub struct TailIter {
    stream: BoxStream<'static, Result<TailLogEntriesResponse>>,
    runtime: Arc<Runtime>,
}

impl fmt::Debug for TailIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TailIter").finish_non_exhaustive()
    }
}

impl Iterator for TailIter {
    type Item = Result<TailLogEntriesResponse>;

    fn next(&mut self) -> Option<Self::Item> {
        self.runtime.block_on(self.stream.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientBuilder;
    use crate::error::Code;
    use crate::rpc::logging::TailLogEntries;
    use crate::testing::InMemoryTransport;
    use cloud_logging_proto::google::logging::v2::{
        ListLogMetricsResponse, LogEntry, LogMetric, WriteLogEntriesResponse,
    };

    fn connection(transport: &InMemoryTransport) -> Connection<InMemoryTransport> {
        ClientBuilder::new()
            .with_transport(transport.clone())
            .build()
            .unwrap()
    }

    #[test]
    fn blocking_send_runs_on_the_calling_thread() {
        let transport = InMemoryTransport::new();
        transport.push_response::<WriteLogEntries>(WriteLogEntriesResponse {});
        let client = LoggingServiceV2Client::new(connection(&transport)).unwrap();

        client
            .write_log_entries()
            .log_name("projects/p/logs/app")
            .entries([LogEntry::default()])
            .send()
            .unwrap();

        let sent = transport.requests::<WriteLogEntries>();
        assert_eq!(sent[0].log_name, "projects/p/logs/app");
        assert_eq!(sent[0].entries.len(), 1);
    }

    #[test]
    fn blocking_pager_is_an_iterator() {
        let transport = InMemoryTransport::new();
        transport.push_response::<ListLogMetrics>(ListLogMetricsResponse {
            metrics: vec![LogMetric {
                name: "errors".into(),
                ..Default::default()
            }],
            next_page_token: "next".into(),
        });
        transport.push_response::<ListLogMetrics>(ListLogMetricsResponse {
            metrics: vec![LogMetric {
                name: "warnings".into(),
                ..Default::default()
            }],
            next_page_token: String::new(),
        });
        let client = MetricsServiceV2Client::new(connection(&transport)).unwrap();

        let names: Vec<String> = client
            .list_log_metrics()
            .parent("projects/p")
            .paginate()
            .unwrap()
            .items()
            .map(|metric| metric.unwrap().name)
            .collect();
        assert_eq!(names, vec!["errors", "warnings"]);
    }

    #[test]
    fn blocking_errors_propagate() {
        let transport = InMemoryTransport::new();
        transport.push_error::<GetSink>(Code::NotFound, "no such sink");
        let client = ConfigServiceV2Client::new(connection(&transport)).unwrap();

        let err = client
            .get_sink()
            .sink_name("projects/p/sinks/missing")
            .send()
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn blocking_tail_yields_responses() {
        let transport = InMemoryTransport::new();
        transport.push_stream::<TailLogEntries>(vec![
            TailLogEntriesResponse {
                entries: vec![LogEntry::default()],
                ..Default::default()
            },
            TailLogEntriesResponse::default(),
        ]);
        let client = LoggingServiceV2Client::new(connection(&transport)).unwrap();

        let responses: Vec<_> = client
            .tail_log_entries([TailLogEntriesRequest {
                resource_names: vec!["projects/p".into()],
                ..Default::default()
            }])
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].entries.len(), 1);
        assert_eq!(
            transport.requests::<TailLogEntries>()[0].resource_names,
            vec!["projects/p"]
        );
    }
}
