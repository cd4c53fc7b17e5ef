use super::{Client, Entries, Entry, EntryQuery, Payload};
use crate::error::Result;
use crate::internal_logging::logging_debug;
use crate::transport::{DefaultTransport, Transport};
use cloud_logging_proto::google::api::MonitoredResource;
use cloud_logging_proto::google::logging::v2::LogEntry;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use prost_types::Any;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

// Log ids may contain `/`, which must be escaped inside the log name.
const LOG_ID: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn global_resource() -> MonitoredResource {
    MonitoredResource {
        r#type: "global".to_string(),
        labels: HashMap::new(),
    }
}

/// Writes to and reads from a single log.
pub struct Logger<T = DefaultTransport> {
    client: Client<T>,
    name: String,
    full_name: String,
    labels: HashMap<String, String>,
    resource: MonitoredResource,
}

impl<T> Clone for Logger<T> {
    fn clone(&self) -> Self {
        Logger {
            client: self.client.clone(),
            name: self.name.clone(),
            full_name: self.full_name.clone(),
            labels: self.labels.clone(),
            resource: self.resource.clone(),
        }
    }
}

impl<T> fmt::Debug for Logger<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("full_name", &self.full_name)
            .field("labels", &self.labels)
            .field("resource", &self.resource)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> Logger<T> {
    pub(super) fn new(client: Client<T>, name: String) -> Self {
        let log_id = utf8_percent_encode(&name, LOG_ID).to_string();
        let full_name = crate::path::log_path(client.project(), &log_id);
        Logger {
            client,
            name,
            full_name,
            labels: HashMap::new(),
            resource: global_resource(),
        }
    }

    /// Labels for entries that carry none of their own.
    pub fn with_labels(mut self, labels: HashMap<String, String>) -> Self {
        self.labels = labels;
        self
    }

    /// The resource of entries that carry none of their own. Defaults to
    /// `global`.
    pub fn with_resource(mut self, resource: MonitoredResource) -> Self {
        self.resource = resource;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `projects/<project>/logs/<escaped name>`.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn client(&self) -> &Client<T> {
        &self.client
    }

    /// Fills in what the entry leaves unset from the logger.
    fn complete(&self, mut entry: Entry) -> LogEntry {
        entry
            .log_name
            .get_or_insert_with(|| self.full_name.clone());
        entry
            .resource
            .get_or_insert_with(|| self.resource.clone());
        if entry.labels.is_none() && !self.labels.is_empty() {
            entry.labels = Some(self.labels.clone());
        }
        entry.into()
    }

    /// Writes a single entry.
    pub async fn log(&self, entry: Entry) -> Result<()> {
        let entry = self.complete(entry);
        logging_debug!(name: "Logger.Write", log = self.full_name.as_str(), entries = 1);
        self.client
            .logging
            .write_log_entries()
            .entries([entry])
            .send()
            .await?;
        Ok(())
    }

    pub async fn log_text(&self, text: impl Into<String>) -> Result<()> {
        self.log(Entry::text(text)).await
    }

    /// Writes a JSON payload. Non-object values are stored under `message`.
    pub async fn log_struct(&self, value: Value) -> Result<()> {
        self.log(Entry::json(value)).await
    }

    pub async fn log_proto(&self, message: Any) -> Result<()> {
        self.log(Entry::proto(message)).await
    }

    /// Writes an entry without payload, useful for labels or HTTP requests
    /// alone.
    pub async fn log_empty(&self) -> Result<()> {
        self.log(Entry::new(Payload::Empty)).await
    }

    /// Starts a batch written in one request by [`Batch::commit`].
    pub fn batch(&self) -> Batch<T> {
        Batch {
            logger: self.clone(),
            entries: Vec::new(),
        }
    }

    /// Deletes every entry of the log.
    pub async fn delete(&self) -> Result<()> {
        self.client
            .logging
            .delete_log()
            .log_name(self.full_name.clone())
            .send()
            .await
    }

    /// Lists entries of this log only. Defaults are the same as
    /// [`Client::list_entries`].
    pub async fn list_entries(&self, mut query: EntryQuery) -> Result<Entries<T>> {
        let log_filter = format!("logName=\"{}\"", self.full_name);
        query.filter = Some(match query.filter.take() {
            Some(filter) if !filter.trim().is_empty() => format!("{filter} AND {log_filter}"),
            _ => log_filter,
        });
        self.client.list_entries(query).await
    }
}

/// Entries accumulated locally and written together.
///
/// The logger's name, resource and labels are sent once for the whole
/// request; entries only carry what they set themselves.
pub struct Batch<T = DefaultTransport> {
    logger: Logger<T>,
    entries: Vec<Entry>,
}

impl<T> fmt::Debug for Batch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Batch")
            .field("logger", &self.logger)
            .field("entries", &self.entries)
            .finish()
    }
}

impl<T: Transport> Batch<T> {
    pub fn log(&mut self, entry: Entry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    pub fn log_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.log(Entry::text(text))
    }

    pub fn log_struct(&mut self, value: Value) -> &mut Self {
        self.log(Entry::json(value))
    }

    pub fn log_proto(&mut self, message: Any) -> &mut Self {
        self.log(Entry::proto(message))
    }

    pub fn log_empty(&mut self) -> &mut Self {
        self.log(Entry::new(Payload::Empty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the pending entries. They are kept if the write fails, so the
    /// commit can be attempted again.
    pub async fn commit(&mut self) -> Result<()> {
        if self.entries.is_empty() {
            return Ok(());
        }
        let entries: Vec<LogEntry> = self.entries.iter().cloned().map(LogEntry::from).collect();
        logging_debug!(
            name: "Batch.Commit",
            log = self.logger.full_name.as_str(),
            entries = entries.len(),
        );
        let logger = &self.logger;
        let mut call = logger
            .client
            .logging
            .write_log_entries()
            .log_name(logger.full_name.clone())
            .resource(logger.resource.clone())
            .entries(entries);
        if !logger.labels.is_empty() {
            call = call.labels(logger.labels.clone());
        }
        call.send().await?;
        self.entries.clear();
        Ok(())
    }
}
