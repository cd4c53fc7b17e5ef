//! `google.logging.v2.LoggingServiceV2`.
use super::{flattened, rpc, CallPolicy, StreamingRpc};
use cloud_logging_proto::google::api::{MonitoredResource, MonitoredResourceDescriptor};
use cloud_logging_proto::google::logging::v2::{
    DeleteLogRequest, ListLogEntriesRequest, ListLogEntriesResponse, ListLogsRequest,
    ListLogsResponse, ListMonitoredResourceDescriptorsRequest,
    ListMonitoredResourceDescriptorsResponse, LogEntry, TailLogEntriesRequest,
    TailLogEntriesResponse, WriteLogEntriesRequest, WriteLogEntriesResponse,
};
use cloud_logging_proto::Empty;
use std::collections::HashMap;
use std::time::Duration;

const DEADLINE: Duration = Duration::from_secs(60);

rpc! {
    /// Deletes all the log entries in a log.
    DeleteLog {
        service: "google.logging.v2.LoggingServiceV2",
        method: "DeleteLog",
        request: DeleteLogRequest,
        response: Empty => (),
        http: DELETE "/v2/{log_name}",
        routing: [log_name],
        policy: CallPolicy::retried(DEADLINE),
    }

    /// Writes log entries to Logging.
    WriteLogEntries {
        service: "google.logging.v2.LoggingServiceV2",
        method: "WriteLogEntries",
        request: WriteLogEntriesRequest,
        response: WriteLogEntriesResponse,
        http: POST "/v2/entries:write" body "*",
        routing: [],
        policy: CallPolicy::retried(DEADLINE),
    }

    /// Lists log entries.
    ListLogEntries {
        service: "google.logging.v2.LoggingServiceV2",
        method: "ListLogEntries",
        request: ListLogEntriesRequest,
        response: ListLogEntriesResponse,
        http: POST "/v2/entries:list" body "*",
        routing: [],
        pages: entries => LogEntry,
        policy: CallPolicy::retried(DEADLINE),
    }

    /// Lists the descriptors for monitored resource types.
    ListMonitoredResourceDescriptors {
        service: "google.logging.v2.LoggingServiceV2",
        method: "ListMonitoredResourceDescriptors",
        request: ListMonitoredResourceDescriptorsRequest,
        response: ListMonitoredResourceDescriptorsResponse,
        http: GET "/v2/monitoredResourceDescriptors",
        routing: [],
        pages: resource_descriptors => MonitoredResourceDescriptor,
        policy: CallPolicy::retried(DEADLINE),
    }

    /// Lists the logs that have entries.
    ListLogs {
        service: "google.logging.v2.LoggingServiceV2",
        method: "ListLogs",
        request: ListLogsRequest,
        response: ListLogsResponse,
        http: GET "/v2/{parent}/logs",
        routing: [parent],
        pages: log_names => String,
        policy: CallPolicy::retried(DEADLINE),
    }

    /// Streams log entries as they are ingested.
    TailLogEntries {
        service: "google.logging.v2.LoggingServiceV2",
        method: "TailLogEntries",
        request: TailLogEntriesRequest,
        response: TailLogEntriesResponse,
        http: POST "/v2/entries:tail" body "*",
        routing: [],
        policy: CallPolicy::once(Duration::from_secs(3600)),
    }
}

impl StreamingRpc for TailLogEntries {}

flattened! {
    DeleteLog { log_name: into String }
    WriteLogEntries {
        log_name: into String,
        resource: some MonitoredResource,
        labels: into HashMap<String, String>,
        entries: each LogEntry,
    }
    ListLogEntries {
        resource_names: each String,
        filter: into String,
        order_by: into String,
    }
    ListLogs { parent: into String }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::Rpc;

    #[test]
    fn paths_follow_the_service_name() {
        assert_eq!(DeleteLog::PATH, "/google.logging.v2.LoggingServiceV2/DeleteLog");
        assert_eq!(TailLogEntries::SERVICE, "google.logging.v2.LoggingServiceV2");
        assert_eq!(WriteLogEntries::HTTP.body, Some("*"));
        assert_eq!(ListLogs::HTTP.body, None);
    }

    #[test]
    fn routing_uses_resource_fields() {
        let request = ListLogsRequest {
            parent: "projects/my-project".into(),
            ..Default::default()
        };
        assert_eq!(
            ListLogs::routing(&request),
            vec![("parent", "projects/my-project".to_string())]
        );
        assert!(WriteLogEntries::routing(&WriteLogEntriesRequest::default()).is_empty());
    }

    #[test]
    fn tail_is_not_retried() {
        let policy = TailLogEntries::policy();
        assert!(policy.retry.is_none());
        assert_eq!(policy.timeout, Some(Duration::from_secs(3600)));
        assert!(ListLogEntries::policy().retry.is_some());
    }
}
