use super::calls;
use crate::call::Async;
use crate::config::ClientBuilder;
use crate::connection::Connection;
use crate::rpc::config::*;
use crate::transport::{DefaultTransport, Transport};

/// Client for `google.logging.v2.ConfigServiceV2`: buckets, views, sinks,
/// exclusions and CMEK settings.
#[derive(Debug)]
pub struct ConfigServiceV2Client<T = DefaultTransport> {
    connection: Connection<T>,
}

impl<T> Clone for ConfigServiceV2Client<T> {
    fn clone(&self) -> Self {
        ConfigServiceV2Client {
            connection: self.connection.clone(),
        }
    }
}

impl ConfigServiceV2Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<T: Transport> ConfigServiceV2Client<T> {
    pub fn new(connection: Connection<T>) -> Self {
        ConfigServiceV2Client { connection }
    }

    pub fn connection(&self) -> &Connection<T> {
        &self.connection
    }

    fn mode(&self) -> Async {
        Async
    }

    calls! { Async =>
        /// Lists the log buckets under a location.
        list_buckets: ListBuckets,
        get_bucket: GetBucket,
        /// Creates a log bucket. The bucket id cannot be changed later.
        create_bucket: CreateBucket,
        /// Updates a log bucket. Locked buckets only accept changes to
        /// `locked` itself.
        update_bucket: UpdateBucket,
        /// Marks a bucket for deletion. It is purged after 7 days.
        delete_bucket: DeleteBucket,
        /// Restores a bucket that is still in the grace period.
        undelete_bucket: UndeleteBucket,
        list_views: ListViews,
        get_view: GetView,
        create_view: CreateView,
        update_view: UpdateView,
        delete_view: DeleteView,
        list_sinks: ListSinks,
        get_sink: GetSink,
        /// Creates a sink. The returned sink carries the writer identity that
        /// must be granted access to the destination.
        create_sink: CreateSink,
        /// Updates a sink, replacing the fields named by the update mask, or
        /// `destination`, `filter` and `include_children` when there is none.
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
