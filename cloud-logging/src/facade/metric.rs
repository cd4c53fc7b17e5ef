use super::Client;
use crate::error::Result;
use crate::transport::{DefaultTransport, Transport};
use cloud_logging_proto::google::logging::v2::LogMetric;
use std::fmt;

/// A local description of a logs-based metric counting entries that match
/// `filter`.
pub struct Metric<T = DefaultTransport> {
    client: Client<T>,
    name: String,
    pub filter: Option<String>,
    pub description: Option<String>,
}

impl<T> Clone for Metric<T> {
    fn clone(&self) -> Self {
        Metric {
            client: self.client.clone(),
            name: self.name.clone(),
            filter: self.filter.clone(),
            description: self.description.clone(),
        }
    }
}

impl<T> fmt::Debug for Metric<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metric")
            .field("name", &self.name)
            .field("filter", &self.filter)
            .field("description", &self.description)
            .finish()
    }
}

impl<T: Transport> Metric<T> {
    pub(super) fn new(client: Client<T>, name: String) -> Self {
        Metric {
            client,
            name,
            filter: None,
            description: None,
        }
    }

    pub(super) fn from_proto(client: Client<T>, metric: LogMetric) -> Self {
        let mut local = Metric::new(client, metric.name.clone());
        local.apply(metric);
        local
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `projects/<project>/metrics/<name>`.
    pub fn full_name(&self) -> String {
        crate::path::log_metric_path(self.client.project(), &self.name)
    }

    fn to_proto(&self) -> LogMetric {
        LogMetric {
            name: self.name.clone(),
            filter: self.filter.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            ..Default::default()
        }
    }

    fn apply(&mut self, metric: LogMetric) {
        self.filter = (!metric.filter.is_empty()).then_some(metric.filter);
        self.description = (!metric.description.is_empty()).then_some(metric.description);
    }

    pub async fn create(&mut self) -> Result<()> {
        let metric = self
            .client
            .metrics
            .create_log_metric()
            .parent(self.client.project_path())
            .metric(self.to_proto())
            .send()
            .await?;
        self.apply(metric);
        Ok(())
    }

    /// Whether the metric exists. Errors other than `NOT_FOUND` are returned.
    pub async fn exists(&self) -> Result<bool> {
        match self
            .client
            .metrics
            .get_log_metric()
            .metric_name(self.full_name())
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub async fn reload(&mut self) -> Result<()> {
        let metric = self
            .client
            .metrics
            .get_log_metric()
            .metric_name(self.full_name())
            .send()
            .await?;
        self.apply(metric);
        Ok(())
    }

    pub async fn update(&mut self) -> Result<()> {
        let metric = self
            .client
            .metrics
            .update_log_metric()
            .metric_name(self.full_name())
            .metric(self.to_proto())
            .send()
            .await?;
        self.apply(metric);
        Ok(())
    }

    pub async fn delete(&self) -> Result<()> {
        self.client
            .metrics
            .delete_log_metric()
            .metric_name(self.full_name())
            .send()
            .await
    }
}
