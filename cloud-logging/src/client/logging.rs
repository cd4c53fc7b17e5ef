use super::calls;
use crate::call::{Async, CallOptions};
use crate::config::ClientBuilder;
use crate::connection::Connection;
use crate::error::Result;
use crate::rpc::logging::{
    DeleteLog, ListLogEntries, ListLogs, ListMonitoredResourceDescriptors, TailLogEntries,
    WriteLogEntries,
};
use crate::transport::{DefaultTransport, Transport};
use cloud_logging_proto::google::logging::v2::{TailLogEntriesRequest, TailLogEntriesResponse};
use futures_core::Stream;
use futures_util::stream::{BoxStream, StreamExt};

/// Client for `google.logging.v2.LoggingServiceV2`: writing, listing, tailing
/// and deleting log entries.
#[derive(Debug)]
pub struct LoggingServiceV2Client<T = DefaultTransport> {
    connection: Connection<T>,
}

impl<T> Clone for LoggingServiceV2Client<T> {
    fn clone(&self) -> Self {
        LoggingServiceV2Client {
            connection: self.connection.clone(),
        }
    }
}

impl LoggingServiceV2Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<T: Transport> LoggingServiceV2Client<T> {
    pub fn new(connection: Connection<T>) -> Self {
        LoggingServiceV2Client { connection }
    }

    pub fn connection(&self) -> &Connection<T> {
        &self.connection
    }

    fn mode(&self) -> Async {
        Async
    }

    calls! { Async =>
        /// Deletes all the log entries in a log. Entries received after the
        /// delete started may not be deleted.
        delete_log: DeleteLog,
        /// Writes log entries. Entries without a log name, resource or labels
        /// take the request level values.
        write_log_entries: WriteLogEntries,
        /// Lists log entries from projects, organizations, folders or billing
        /// accounts.
        list_log_entries: ListLogEntries,
        /// Lists the descriptors of monitored resource types.
        list_monitored_resource_descriptors: ListMonitoredResourceDescriptors,
        /// Lists the logs that have entries, by name.
        list_logs: ListLogs,
    }

    /// Streams log entries as they are ingested.
    ///
    /// The first request opens the session and later requests adjust it. The
    /// returned stream is lazy and ends only when the service closes it;
    /// dropping it cancels the call. Only the gRPC transport supports tailing.
    pub async fn tail_log_entries<S>(
        &self,
        requests: S,
    ) -> Result<BoxStream<'static, Result<TailLogEntriesResponse>>>
    where
        S: Stream<Item = TailLogEntriesRequest> + Send + 'static,
    {
        self.tail_log_entries_with_options(requests, CallOptions::default())
            .await
    }

    pub async fn tail_log_entries_with_options<S>(
        &self,
        requests: S,
        options: CallOptions,
    ) -> Result<BoxStream<'static, Result<TailLogEntriesResponse>>>
    where
        S: Stream<Item = TailLogEntriesRequest> + Send + 'static,
    {
        self.connection
            .stream::<TailLogEntries>(requests.boxed(), &options)
            .await
    }
}
