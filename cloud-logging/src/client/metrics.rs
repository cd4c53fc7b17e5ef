use super::calls;
use crate::call::Async;
use crate::config::ClientBuilder;
use crate::connection::Connection;
use crate::rpc::metrics::{
    CreateLogMetric, DeleteLogMetric, GetLogMetric, ListLogMetrics, UpdateLogMetric,
};
use crate::transport::{DefaultTransport, Transport};

/// Client for `google.logging.v2.MetricsServiceV2`: logs-based metrics.
#[derive(Debug)]
pub struct MetricsServiceV2Client<T = DefaultTransport> {
    connection: Connection<T>,
}

impl<T> Clone for MetricsServiceV2Client<T> {
    fn clone(&self) -> Self {
        MetricsServiceV2Client {
            connection: self.connection.clone(),
        }
    }
}

impl MetricsServiceV2Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<T: Transport> MetricsServiceV2Client<T> {
    pub fn new(connection: Connection<T>) -> Self {
        MetricsServiceV2Client { connection }
    }

    pub fn connection(&self) -> &Connection<T> {
        &self.connection
    }

    fn mode(&self) -> Async {
        Async
    }

    calls! { Async =>
        list_log_metrics: ListLogMetrics,
        get_log_metric: GetLogMetric,
        create_log_metric: CreateLogMetric,
        /// Creates the metric when it does not exist yet.
        update_log_metric: UpdateLogMetric,
        delete_log_metric: DeleteLogMetric,
    }
}
