use super::Client;
use crate::error::Result;
use crate::transport::{DefaultTransport, Transport};
use cloud_logging_proto::google::logging::v2::LogSink;
use std::fmt;

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// A local description of a sink, exported entries matching `filter` to
/// `destination`.
pub struct Sink<T = DefaultTransport> {
    client: Client<T>,
    name: String,
    parent: String,
    pub filter: Option<String>,
    pub destination: Option<String>,
    writer_identity: Option<String>,
}

impl<T> Clone for Sink<T> {
    fn clone(&self) -> Self {
        Sink {
            client: self.client.clone(),
            name: self.name.clone(),
            parent: self.parent.clone(),
            filter: self.filter.clone(),
            destination: self.destination.clone(),
            writer_identity: self.writer_identity.clone(),
        }
    }
}

impl<T> fmt::Debug for Sink<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("filter", &self.filter)
            .field("destination", &self.destination)
            .field("writer_identity", &self.writer_identity)
            .finish()
    }
}

impl<T: Transport> Sink<T> {
    pub(super) fn new(client: Client<T>, name: String, parent: String) -> Self {
        Sink {
            client,
            name,
            parent,
            filter: None,
            destination: None,
            writer_identity: None,
        }
    }

    pub(super) fn from_proto(client: Client<T>, parent: String, sink: LogSink) -> Self {
        let mut local = Sink::new(client, sink.name.clone(), parent);
        local.apply(sink);
        local
    }

    /// Moves the sink under another parent, such as `organizations/123` or
    /// `folders/456`.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = parent.into();
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// `<parent>/sinks/<name>`.
    pub fn full_name(&self) -> String {
        format!("{}/sinks/{}", self.parent, self.name)
    }

    /// The identity the service exports with. Known after `create` or
    /// `reload`.
    pub fn writer_identity(&self) -> Option<&str> {
        self.writer_identity.as_deref()
    }

    fn to_proto(&self) -> LogSink {
        LogSink {
            name: self.name.clone(),
            filter: self.filter.clone().unwrap_or_default(),
            destination: self.destination.clone().unwrap_or_default(),
            ..Default::default()
        }
    }

    fn apply(&mut self, sink: LogSink) {
        self.filter = non_empty(sink.filter);
        self.destination = non_empty(sink.destination);
        self.writer_identity = non_empty(sink.writer_identity);
    }

    /// Creates the sink, then takes over the server's view of it, including
    /// the assigned writer identity.
    pub async fn create(&mut self, unique_writer_identity: bool) -> Result<()> {
        let sink = self
            .client
            .config
            .create_sink()
            .parent(self.parent.clone())
            .sink(self.to_proto())
            .unique_writer_identity(unique_writer_identity)
            .send()
            .await?;
        self.apply(sink);
        Ok(())
    }

    /// Whether the sink exists. Errors other than `NOT_FOUND` are returned.
    pub async fn exists(&self) -> Result<bool> {
        match self
            .client
            .config
            .get_sink()
            .sink_name(self.full_name())
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Replaces the local fields with the server's.
    pub async fn reload(&mut self) -> Result<()> {
        let sink = self
            .client
            .config
            .get_sink()
            .sink_name(self.full_name())
            .send()
            .await?;
        self.apply(sink);
        Ok(())
    }

    /// Sends the local filter and destination.
    pub async fn update(&mut self, unique_writer_identity: bool) -> Result<()> {
        let sink = self
            .client
            .config
            .update_sink()
            .sink_name(self.full_name())
            .sink(self.to_proto())
            .unique_writer_identity(unique_writer_identity)
            .send()
            .await?;
        self.apply(sink);
        Ok(())
    }

    pub async fn delete(&self) -> Result<()> {
        self.client
            .config
            .delete_sink()
            .sink_name(self.full_name())
            .send()
            .await
    }
}
