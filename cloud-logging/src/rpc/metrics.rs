//! `google.logging.v2.MetricsServiceV2`.
use super::{flattened, rpc, CallPolicy};
use cloud_logging_proto::google::logging::v2::{
    CreateLogMetricRequest, DeleteLogMetricRequest, GetLogMetricRequest, ListLogMetricsRequest,
    ListLogMetricsResponse, LogMetric, UpdateLogMetricRequest,
};
use cloud_logging_proto::Empty;
use std::time::Duration;

const DEADLINE: Duration = Duration::from_secs(60);

rpc! {
    /// Lists logs-based metrics.
    ListLogMetrics {
        service: "google.logging.v2.MetricsServiceV2",
        method: "ListLogMetrics",
        request: ListLogMetricsRequest,
        response: ListLogMetricsResponse,
        http: GET "/v2/{parent}/metrics",
        routing: [parent],
        pages: metrics => LogMetric,
        policy: CallPolicy::retried(DEADLINE),
    }

    /// Gets a logs-based metric.
    GetLogMetric {
        service: "google.logging.v2.MetricsServiceV2",
        method: "GetLogMetric",
        request: GetLogMetricRequest,
        response: LogMetric,
        http: GET "/v2/{metric_name}",
        routing: [metric_name],
        policy: CallPolicy::retried(DEADLINE),
    }

    /// Creates a logs-based metric.
    CreateLogMetric {
        service: "google.logging.v2.MetricsServiceV2",
        method: "CreateLogMetric",
        request: CreateLogMetricRequest,
        response: LogMetric,
        http: POST "/v2/{parent}/metrics" body "metric",
        routing: [parent],
        policy: CallPolicy::once(DEADLINE),
    }

    /// Creates or updates a logs-based metric.
    UpdateLogMetric {
        service: "google.logging.v2.MetricsServiceV2",
        method: "UpdateLogMetric",
        request: UpdateLogMetricRequest,
        response: LogMetric,
        http: PUT "/v2/{metric_name}" body "metric",
        routing: [metric_name],
        policy: CallPolicy::retried(DEADLINE),
    }

    /// Deletes a logs-based metric.
    DeleteLogMetric {
        service: "google.logging.v2.MetricsServiceV2",
        method: "DeleteLogMetric",
        request: DeleteLogMetricRequest,
        response: Empty => (),
        http: DELETE "/v2/{metric_name}",
        routing: [metric_name],
        policy: CallPolicy::retried(DEADLINE),
    }
}

flattened! {
    ListLogMetrics { parent: into String }
    GetLogMetric { metric_name: into String }
    CreateLogMetric {
        parent: into String,
        metric: some LogMetric,
    }
    UpdateLogMetric {
        metric_name: into String,
        metric: some LogMetric,
    }
    DeleteLogMetric { metric_name: into String }
}
