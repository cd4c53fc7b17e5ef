//! `google.logging.v2.ConfigServiceV2`.
//!
//! Bucket, view, CMEK and settings RPCs carry no default retry or timeout.
use super::{flattened, rpc, CallPolicy};
use cloud_logging_proto::google::logging::v2::{
    CmekSettings, CreateBucketRequest, CreateExclusionRequest, CreateSinkRequest,
    CreateViewRequest, DeleteBucketRequest, DeleteExclusionRequest, DeleteSinkRequest,
    DeleteViewRequest, GetBucketRequest, GetCmekSettingsRequest, GetExclusionRequest,
    GetSettingsRequest, GetSinkRequest, GetViewRequest, ListBucketsRequest, ListBucketsResponse,
    ListExclusionsRequest, ListExclusionsResponse, ListSinksRequest, ListSinksResponse,
    ListViewsRequest, ListViewsResponse, LogBucket, LogExclusion, LogSink, LogView, Settings,
    UndeleteBucketRequest, UpdateBucketRequest, UpdateCmekSettingsRequest,
    UpdateExclusionRequest, UpdateSettingsRequest, UpdateSinkRequest, UpdateViewRequest,
};
use cloud_logging_proto::Empty;
use prost_types::FieldMask;
use std::time::Duration;

const DEADLINE: Duration = Duration::from_secs(60);
const CREATE_TIMEOUT: Duration = Duration::from_secs(120);

rpc! {
    /// Lists log buckets.
    ListBuckets {
        service: "google.logging.v2.ConfigServiceV2",
        method: "ListBuckets",
        request: ListBucketsRequest,
        response: ListBucketsResponse,
        http: GET "/v2/{parent}/buckets",
        routing: [parent],
        pages: buckets => LogBucket,
        policy: CallPolicy::default(),
    }

    /// Gets a log bucket.
    GetBucket {
        service: "google.logging.v2.ConfigServiceV2",
        method: "GetBucket",
        request: GetBucketRequest,
        response: LogBucket,
        http: GET "/v2/{name}",
        routing: [name],
        policy: CallPolicy::default(),
    }

    /// Creates a log bucket.
    CreateBucket {
        service: "google.logging.v2.ConfigServiceV2",
        method: "CreateBucket",
        request: CreateBucketRequest,
        response: LogBucket,
        http: POST "/v2/{parent}/buckets" body "bucket",
        routing: [parent],
        policy: CallPolicy::default(),
    }

    /// Updates a log bucket.
    UpdateBucket {
        service: "google.logging.v2.ConfigServiceV2",
        method: "UpdateBucket",
        request: UpdateBucketRequest,
        response: LogBucket,
        http: PATCH "/v2/{name}" body "bucket",
        routing: [name],
        policy: CallPolicy::default(),
    }

    /// Moves a log bucket to the `DELETE_REQUESTED` state.
    DeleteBucket {
        service: "google.logging.v2.ConfigServiceV2",
        method: "DeleteBucket",
        request: DeleteBucketRequest,
        response: Empty => (),
        http: DELETE "/v2/{name}",
        routing: [name],
        policy: CallPolicy::default(),
    }

    /// Restores a log bucket in the `DELETE_REQUESTED` state.
    UndeleteBucket {
        service: "google.logging.v2.ConfigServiceV2",
        method: "UndeleteBucket",
        request: UndeleteBucketRequest,
        response: Empty => (),
        http: POST "/v2/{name}:undelete" body "*",
        routing: [name],
        policy: CallPolicy::default(),
    }

    /// Lists the views of a bucket.
    ListViews {
        service: "google.logging.v2.ConfigServiceV2",
        method: "ListViews",
        request: ListViewsRequest,
        response: ListViewsResponse,
        http: GET "/v2/{parent}/views",
        routing: [parent],
        pages: views => LogView,
        policy: CallPolicy::default(),
    }

    /// Gets a view.
    GetView {
        service: "google.logging.v2.ConfigServiceV2",
        method: "GetView",
        request: GetViewRequest,
        response: LogView,
        http: GET "/v2/{name}",
        routing: [name],
        policy: CallPolicy::default(),
    }

    /// Creates a view over a bucket.
    CreateView {
        service: "google.logging.v2.ConfigServiceV2",
        method: "CreateView",
        request: CreateViewRequest,
        response: LogView,
        http: POST "/v2/{parent}/views" body "view",
        routing: [parent],
        policy: CallPolicy::default(),
    }

    /// Updates a view.
    UpdateView {
        service: "google.logging.v2.ConfigServiceV2",
        method: "UpdateView",
        request: UpdateViewRequest,
        response: LogView,
        http: PATCH "/v2/{name}" body "view",
        routing: [name],
        policy: CallPolicy::default(),
    }

    /// Deletes a view.
    DeleteView {
        service: "google.logging.v2.ConfigServiceV2",
        method: "DeleteView",
        request: DeleteViewRequest,
        response: Empty => (),
        http: DELETE "/v2/{name}",
        routing: [name],
        policy: CallPolicy::default(),
    }

    /// Lists sinks.
    ListSinks {
        service: "google.logging.v2.ConfigServiceV2",
        method: "ListSinks",
        request: ListSinksRequest,
        response: ListSinksResponse,
        http: GET "/v2/{parent}/sinks",
        routing: [parent],
        pages: sinks => LogSink,
        policy: CallPolicy::retried(DEADLINE),
    }

    /// Gets a sink.
    GetSink {
        service: "google.logging.v2.ConfigServiceV2",
        method: "GetSink",
        request: GetSinkRequest,
        response: LogSink,
        http: GET "/v2/{sink_name}",
        routing: [sink_name],
        policy: CallPolicy::retried(DEADLINE),
    }

    /// Creates a sink that exports matching entries to a destination.
    CreateSink {
        service: "google.logging.v2.ConfigServiceV2",
        method: "CreateSink",
        request: CreateSinkRequest,
        response: LogSink,
        http: POST "/v2/{parent}/sinks" body "sink",
        routing: [parent],
        policy: CallPolicy::once(CREATE_TIMEOUT),
    }

    /// Updates a sink.
    UpdateSink {
        service: "google.logging.v2.ConfigServiceV2",
        method: "UpdateSink",
        request: UpdateSinkRequest,
        response: LogSink,
        http: PUT "/v2/{sink_name}" body "sink",
        routing: [sink_name],
        policy: CallPolicy::retried(DEADLINE),
    }

    /// Deletes a sink.
    DeleteSink {
        service: "google.logging.v2.ConfigServiceV2",
        method: "DeleteSink",
        request: DeleteSinkRequest,
        response: Empty => (),
        http: DELETE "/v2/{sink_name}",
        routing: [sink_name],
        policy: CallPolicy::retried(DEADLINE),
    }

    /// Lists the exclusions on the `_Default` sink.
    ListExclusions {
        service: "google.logging.v2.ConfigServiceV2",
        method: "ListExclusions",
        request: ListExclusionsRequest,
        response: ListExclusionsResponse,
        http: GET "/v2/{parent}/exclusions",
        routing: [parent],
        pages: exclusions => LogExclusion,
        policy: CallPolicy::retried(DEADLINE),
    }

    /// Gets an exclusion.
    GetExclusion {
        service: "google.logging.v2.ConfigServiceV2",
        method: "GetExclusion",
        request: GetExclusionRequest,
        response: LogExclusion,
        http: GET "/v2/{name}",
        routing: [name],
        policy: CallPolicy::retried(DEADLINE),
    }

    /// Creates an exclusion.
    CreateExclusion {
        service: "google.logging.v2.ConfigServiceV2",
        method: "CreateExclusion",
        request: CreateExclusionRequest,
        response: LogExclusion,
        http: POST "/v2/{parent}/exclusions" body "exclusion",
        routing: [parent],
        policy: CallPolicy::once(CREATE_TIMEOUT),
    }

    /// Changes an exclusion.
    UpdateExclusion {
        service: "google.logging.v2.ConfigServiceV2",
        method: "UpdateExclusion",
        request: UpdateExclusionRequest,
        response: LogExclusion,
        http: PATCH "/v2/{name}" body "exclusion",
        routing: [name],
        policy: CallPolicy::retried(DEADLINE),
    }

    /// Deletes an exclusion.
    DeleteExclusion {
        service: "google.logging.v2.ConfigServiceV2",
        method: "DeleteExclusion",
        request: DeleteExclusionRequest,
        response: Empty => (),
        http: DELETE "/v2/{name}",
        routing: [name],
        policy: CallPolicy::retried(DEADLINE),
    }

    /// Gets the customer managed encryption key settings.
    GetCmekSettings {
        service: "google.logging.v2.ConfigServiceV2",
        method: "GetCmekSettings",
        request: GetCmekSettingsRequest,
        response: CmekSettings,
        http: GET "/v2/{name}/cmekSettings",
        routing: [name],
        policy: CallPolicy::default(),
    }

    /// Updates the customer managed encryption key settings.
    UpdateCmekSettings {
        service: "google.logging.v2.ConfigServiceV2",
        method: "UpdateCmekSettings",
        request: UpdateCmekSettingsRequest,
        response: CmekSettings,
        http: PATCH "/v2/{name}/cmekSettings" body "cmek_settings",
        routing: [name],
        policy: CallPolicy::default(),
    }

    /// Gets the settings of an organization, folder or project.
    GetSettings {
        service: "google.logging.v2.ConfigServiceV2",
        method: "GetSettings",
        request: GetSettingsRequest,
        response: Settings,
        http: GET "/v2/{name}/settings",
        routing: [name],
        policy: CallPolicy::default(),
    }

    /// Updates the settings of an organization or folder.
    UpdateSettings {
        service: "google.logging.v2.ConfigServiceV2",
        method: "UpdateSettings",
        request: UpdateSettingsRequest,
        response: Settings,
        http: PATCH "/v2/{name}/settings" body "settings",
        routing: [name],
        policy: CallPolicy::default(),
    }
}

flattened! {
    ListBuckets { parent: into String }
    GetBucket { name: into String }
    CreateBucket {
        parent: into String,
        bucket_id: into String,
        bucket: some LogBucket,
    }
    UpdateBucket {
        name: into String,
        bucket: some LogBucket,
        update_mask: mask FieldMask,
    }
    DeleteBucket { name: into String }
    UndeleteBucket { name: into String }
    ListViews { parent: into String }
    GetView { name: into String }
    CreateView {
        parent: into String,
        view_id: into String,
        view: some LogView,
    }
    UpdateView {
        name: into String,
        view: some LogView,
        update_mask: mask FieldMask,
    }
    DeleteView { name: into String }
    ListSinks { parent: into String }
    GetSink { sink_name: into String }
    CreateSink {
        parent: into String,
        sink: some LogSink,
        unique_writer_identity: into bool,
    }
    UpdateSink {
        sink_name: into String,
        sink: some LogSink,
        unique_writer_identity: into bool,
        update_mask: mask FieldMask,
    }
    DeleteSink { sink_name: into String }
    ListExclusions { parent: into String }
    GetExclusion { name: into String }
    CreateExclusion {
        parent: into String,
        exclusion: some LogExclusion,
    }
    UpdateExclusion {
        name: into String,
        exclusion: some LogExclusion,
        update_mask: mask FieldMask,
    }
    DeleteExclusion { name: into String }
    GetCmekSettings { name: into String }
    UpdateCmekSettings {
        name: into String,
        cmek_settings: some CmekSettings,
        update_mask: mask FieldMask,
    }
    GetSettings { name: into String }
    UpdateSettings {
        name: into String,
        settings: some Settings,
        update_mask: mask FieldMask,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::Rpc;

    #[test]
    fn create_rpcs_are_attempted_once() {
        assert_eq!(CreateSink::policy(), CallPolicy::once(CREATE_TIMEOUT));
        assert_eq!(CreateExclusion::policy(), CallPolicy::once(CREATE_TIMEOUT));
        assert_eq!(UpdateSink::policy(), CallPolicy::retried(DEADLINE));
    }

    #[test]
    fn bucket_rpcs_have_no_default_policy() {
        assert_eq!(CreateBucket::policy(), CallPolicy::default());
        assert_eq!(UpdateSettings::policy(), CallPolicy::default());
    }

    #[test]
    fn sink_routing_uses_sink_name() {
        let request = DeleteSinkRequest {
            sink_name: "projects/p/sinks/s".into(),
        };
        assert_eq!(
            DeleteSink::routing(&request),
            vec![("sink_name", "projects/p/sinks/s".to_string())]
        );
        assert_eq!(UpdateSink::HTTP.method, http::Method::PUT);
        assert_eq!(UpdateCmekSettings::HTTP.body, Some("cmek_settings"));
    }
}
