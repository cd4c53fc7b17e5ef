//! Higher level objects over the service clients.
//!
//! A [`Client`] is bound to one project. Loggers write to a named log in that
//! project, while [`Sink`] and [`Metric`] are local descriptions of server
//! side resources, synchronized explicitly with `create`, `reload`, `update`
//! and `delete`.
//!
//! ```no_run
//! # async fn run() -> cloud_logging::Result<()> {
//! use cloud_logging::facade::{Client, Entry, EntryQuery};
//! use cloud_logging::severity::LogSeverity;
//! use cloud_logging::ClientBuilder;
//!
//! let client = Client::new(ClientBuilder::new().with_project("my-project").build()?)?;
//! let logger = client.logger("app");
//! logger.log_text("started").await?;
//! logger
//!     .log(Entry::text("disk almost full").with_severity(LogSeverity::Warning))
//!     .await?;
//!
//! let mut entries = logger.list_entries(EntryQuery::new()).await?;
//! while let Some(entry) = entries.next().await {
//!     println!("{:?}", entry?.payload);
//! }
//! # Ok(())
//! # }
//! ```
mod entry;
mod logger;
mod metric;
mod sink;

pub use entry::{Entry, Payload};
pub use logger::{Batch, Logger};
pub use metric::Metric;
pub use sink::Sink;

use crate::client::{ConfigServiceV2Client, LoggingServiceV2Client, MetricsServiceV2Client};
use crate::config::{ClientBuilder, GOOGLE_CLOUD_PROJECT};
use crate::connection::Connection;
use crate::error::{Error, Result};
use crate::pager::ItemPager;
use crate::rpc::logging::ListLogEntries;
use crate::transport::{DefaultTransport, Transport};
use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use futures_core::Stream;
use futures_util::StreamExt;
use std::fmt;

/// Orders listed entries oldest first.
pub const ASCENDING: &str = "timestamp asc";
/// Orders listed entries newest first.
pub const DESCENDING: &str = "timestamp desc";

/// Entry point of the facade, bound to a project.
pub struct Client<T = DefaultTransport> {
    project: String,
    logging: LoggingServiceV2Client<T>,
    config: ConfigServiceV2Client<T>,
    metrics: MetricsServiceV2Client<T>,
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Client {
            project: self.project.clone(),
            logging: self.logging.clone(),
            config: self.config.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("project", &self.project)
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<T: Transport> Client<T> {
    /// Uses the project configured on the connection, which falls back to
    /// `GOOGLE_CLOUD_PROJECT`.
    pub fn new(connection: Connection<T>) -> Result<Self> {
        let project = connection.config().project().map(str::to_string).ok_or_else(|| {
            Error::Config(format!(
                "no project configured, call `with_project` or set `{GOOGLE_CLOUD_PROJECT}`"
            ))
        })?;
        Ok(Self::with_project(connection, project))
    }

    pub fn with_project(connection: Connection<T>, project: impl Into<String>) -> Self {
        Client {
            project: project.into(),
            logging: LoggingServiceV2Client::new(connection.clone()),
            config: ConfigServiceV2Client::new(connection.clone()),
            metrics: MetricsServiceV2Client::new(connection),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    fn project_path(&self) -> String {
        crate::path::common_project_path(&self.project)
    }

    pub fn logging_api(&self) -> &LoggingServiceV2Client<T> {
        &self.logging
    }

    pub fn config_api(&self) -> &ConfigServiceV2Client<T> {
        &self.config
    }

    pub fn metrics_api(&self) -> &MetricsServiceV2Client<T> {
        &self.metrics
    }

    /// A logger writing to `name` in the client's project.
    pub fn logger(&self, name: impl Into<String>) -> Logger<T> {
        Logger::new(self.clone(), name.into())
    }

    /// A local sink description. Nothing is sent until it is created or
    /// reloaded.
    pub fn sink(&self, name: impl Into<String>) -> Sink<T> {
        Sink::new(self.clone(), name.into(), self.project_path())
    }

    pub fn metric(&self, name: impl Into<String>) -> Metric<T> {
        Metric::new(self.clone(), name.into())
    }

    /// Lists entries across the query's resources, the client's project by
    /// default.
    ///
    /// Unless the filter already constrains `timestamp`, only entries from
    /// the last 24 hours are returned.
    pub async fn list_entries(&self, query: EntryQuery) -> Result<Entries<T>> {
        let resource_names = if query.resource_names.is_empty() {
            vec![self.project_path()]
        } else {
            query.resource_names
        };
        let filter = with_default_timestamp(query.filter.as_deref(), Utc::now());

        let mut call = self
            .logging
            .list_log_entries()
            .resource_names(resource_names)
            .filter(filter);
        if let Some(order_by) = query.order_by {
            call = call.order_by(order_by);
        }
        if let Some(page_size) = query.page_size {
            call = call.page_size(page_size);
        }
        if let Some(page_token) = query.page_token {
            call = call.page_token(page_token);
        }
        Ok(Entries {
            items: call.paginate().await?.items(),
        })
    }

    /// Every sink of the client's project.
    pub async fn list_sinks(&self) -> Result<Vec<Sink<T>>> {
        let parent = self.project_path();
        let sinks = self
            .config
            .list_sinks()
            .parent(parent.clone())
            .paginate()
            .await?
            .items()
            .try_collect()
            .await?;
        Ok(sinks
            .into_iter()
            .map(|sink| Sink::from_proto(self.clone(), parent.clone(), sink))
            .collect())
    }

    /// Every logs-based metric of the client's project.
    pub async fn list_metrics(&self) -> Result<Vec<Metric<T>>> {
        let metrics = self
            .metrics
            .list_log_metrics()
            .parent(self.project_path())
            .paginate()
            .await?
            .items()
            .try_collect()
            .await?;
        Ok(metrics
            .into_iter()
            .map(|metric| Metric::from_proto(self.clone(), metric))
            .collect())
    }
}

/// Restricts a filter without a `timestamp` clause to the last day.
fn with_default_timestamp(filter: Option<&str>, now: DateTime<Utc>) -> String {
    let since = (now - TimeDelta::hours(24)).to_rfc3339_opts(SecondsFormat::Micros, true);
    let clause = format!("timestamp>=\"{since}\"");
    match filter {
        None => clause,
        Some(filter) if filter.trim().is_empty() => clause,
        Some(filter) if filter.to_ascii_lowercase().contains("timestamp") => filter.to_string(),
        Some(filter) => format!("{filter} AND {clause}"),
    }
}

/// Parameters of [`Client::list_entries`] and [`Logger::list_entries`].
#[derive(Debug, Clone, Default)]
pub struct EntryQuery {
    resource_names: Vec<String>,
    filter: Option<String>,
    order_by: Option<String>,
    page_size: Option<i32>,
    page_token: Option<String>,
}

impl EntryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parents to list from, such as `projects/p` or `folders/f`.
    pub fn with_resource_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resource_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// An advanced logs filter.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// [`ASCENDING`] or [`DESCENDING`].
    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_page_token(mut self, page_token: impl Into<String>) -> Self {
        self.page_token = Some(page_token.into());
        self
    }
}

/// Entries of a listing, fetched a page at a time.
pub struct Entries<T = DefaultTransport> {
    items: ItemPager<ListLogEntries, T>,
}

impl<T> fmt::Debug for Entries<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entries")
            .field("items", &self.items)
            .finish()
    }
}

impl<T: Transport> Entries<T> {
    pub async fn next(&mut self) -> Option<Result<Entry>> {
        let entry = self.items.next().await?;
        Some(entry.and_then(Entry::try_from))
    }

    pub async fn try_collect(mut self) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();
        while let Some(entry) = self.next().await {
            entries.push(entry?);
        }
        Ok(entries)
    }

    pub fn into_stream(self) -> impl Stream<Item = Result<Entry>> + Send + Unpin {
        self.items
            .into_stream()
            .map(|entry| entry.and_then(Entry::try_from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn missing_timestamp_clause_limits_to_one_day() {
        let now = Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap();
        assert_eq!(
            with_default_timestamp(None, now),
            "timestamp>=\"2024-05-01T08:00:00.000000Z\""
        );
        assert_eq!(
            with_default_timestamp(Some("severity>=ERROR"), now),
            "severity>=ERROR AND timestamp>=\"2024-05-01T08:00:00.000000Z\""
        );
        assert_eq!(
            with_default_timestamp(Some("Timestamp < \"2020-01-01T00:00:00Z\""), now),
            "Timestamp < \"2020-01-01T00:00:00Z\""
        );
    }

    #[test]
    fn client_requires_a_project() {
        temp_env::with_var_unset(GOOGLE_CLOUD_PROJECT, || {
            let connection = ClientBuilder::new()
                .with_transport(crate::testing::InMemoryTransport::new())
                .build()
                .unwrap();
            let err = Client::new(connection).unwrap_err();
            assert!(matches!(err, Error::Config(_)));
        });
    }
}
