/// Describes a repository in which log entries are stored.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct LogBucket {
    /// Output only. The resource name of the bucket, for example
    /// `projects/my-project/locations/global/buckets/my-bucket`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Describes this bucket.
    #[prost(string, tag = "3")]
    pub description: ::prost::alloc::string::String,
    /// Output only. The creation timestamp of the bucket.
    #[prost(message, optional, tag = "4")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::timestamp"))]
    pub create_time: ::core::option::Option<::prost_types::Timestamp>,
    /// Output only. The last update timestamp of the bucket.
    #[prost(message, optional, tag = "5")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::timestamp"))]
    pub update_time: ::core::option::Option<::prost_types::Timestamp>,
    /// Logs will be retained by default for this amount of time, after which
    /// they will automatically be deleted.
    #[prost(int32, tag = "11")]
    pub retention_days: i32,
    /// Whether the bucket is locked. A locked bucket may only be deleted if it
    /// is empty.
    #[prost(bool, tag = "9")]
    pub locked: bool,
    /// Output only. The bucket lifecycle state.
    #[prost(enumeration = "LifecycleState", tag = "12")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::lifecycle_state"))]
    pub lifecycle_state: i32,
    /// Whether log analytics is enabled for this bucket.
    #[prost(bool, tag = "14")]
    pub analytics_enabled: bool,
    /// Log entry field paths that are denied access in this bucket.
    #[prost(string, repeated, tag = "15")]
    pub restricted_fields: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// A list of indexed fields and related configuration data.
    #[prost(message, repeated, tag = "17")]
    pub index_configs: ::prost::alloc::vec::Vec<IndexConfig>,
    /// The CMEK settings of the log bucket.
    #[prost(message, optional, tag = "19")]
    pub cmek_settings: ::core::option::Option<CmekSettings>,
}

/// Configuration for an indexed field.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct IndexConfig {
    /// Required. The LogEntry field path to index, for example
    /// `jsonPayload.request.status`.
    #[prost(string, tag = "1")]
    pub field_path: ::prost::alloc::string::String,
    /// Required. The type of data in this index.
    #[prost(enumeration = "IndexType", tag = "2")]
    #[cfg_attr(
        feature = "with-serde",
        serde(rename = "type", with = "crate::serializers::index_type")
    )]
    pub r#type: i32,
    /// Output only. The timestamp when the index was last modified.
    #[prost(message, optional, tag = "3")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::timestamp"))]
    pub create_time: ::core::option::Option<::prost_types::Timestamp>,
}

/// Describes a view over log entries in a bucket.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct LogView {
    /// The resource name of the view, for example
    /// `projects/my-project/locations/global/buckets/my-bucket/views/my-view`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Describes this view.
    #[prost(string, tag = "3")]
    pub description: ::prost::alloc::string::String,
    /// Output only. The creation timestamp of the view.
    #[prost(message, optional, tag = "4")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::timestamp"))]
    pub create_time: ::core::option::Option<::prost_types::Timestamp>,
    /// Output only. The last update timestamp of the view.
    #[prost(message, optional, tag = "5")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::timestamp"))]
    pub update_time: ::core::option::Option<::prost_types::Timestamp>,
    /// Filter that restricts which log entries in a bucket are visible in this
    /// view.
    #[prost(string, tag = "7")]
    pub filter: ::prost::alloc::string::String,
}

/// Describes a sink used to export log entries to one of the following
/// destinations in any project: a Cloud Storage bucket, a BigQuery dataset, a
/// Pub/Sub topic or a Cloud Logging log bucket.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct LogSink {
    /// Required. The client-assigned sink identifier, unique within the
    /// project. For example: `"my-syslog-errors-to-pubsub"`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Required. The export destination, for example
    /// `"storage.googleapis.com/\[GCS_BUCKET\]"`.
    #[prost(string, tag = "3")]
    pub destination: ::prost::alloc::string::String,
    /// Optional. An advanced logs filter. The only exported log entries are
    /// those that are in the resource owning the sink and that match the
    /// filter.
    #[prost(string, tag = "5")]
    pub filter: ::prost::alloc::string::String,
    /// Optional. A description of this sink.
    #[prost(string, tag = "18")]
    pub description: ::prost::alloc::string::String,
    /// Optional. If set to true, then this sink is disabled and it does not
    /// export any log entries.
    #[prost(bool, tag = "19")]
    pub disabled: bool,
    /// Optional. Log entries that match any of these exclusion filters will not
    /// be exported.
    #[prost(message, repeated, tag = "16")]
    pub exclusions: ::prost::alloc::vec::Vec<LogExclusion>,
    /// Deprecated. This field is unused.
    #[prost(enumeration = "log_sink::VersionFormat", tag = "6")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::version_format"))]
    pub output_version_format: i32,
    /// Output only. An IAM identity, either a Google service account or a group,
    /// under which Cloud Logging writes the exported log entries to the sink's
    /// destination.
    #[prost(string, tag = "8")]
    pub writer_identity: ::prost::alloc::string::String,
    /// Optional. This field applies only to sinks owned by organizations and
    /// folders. If true, the sink also exports log entries from the child
    /// resources.
    #[prost(bool, tag = "9")]
    pub include_children: bool,
    /// Output only. The creation timestamp of the sink.
    #[prost(message, optional, tag = "13")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::timestamp"))]
    pub create_time: ::core::option::Option<::prost_types::Timestamp>,
    /// Output only. The last update timestamp of the sink.
    #[prost(message, optional, tag = "14")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::timestamp"))]
    pub update_time: ::core::option::Option<::prost_types::Timestamp>,
    /// Destination dependent options.
    #[prost(oneof = "log_sink::Options", tags = "12")]
    #[cfg_attr(feature = "with-serde", serde(flatten))]
    pub options: ::core::option::Option<log_sink::Options>,
}

/// Nested message and enum types in `LogSink`.
pub mod log_sink {
    /// Deprecated. This is unused.
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum VersionFormat {
        /// An unspecified format version that will default to V2.
        Unspecified = 0,
        /// `LogEntry` version 2 format.
        V2 = 1,
        /// `LogEntry` version 1 format.
        V1 = 2,
    }

    impl VersionFormat {
        /// String value of the enum field names used in the ProtoBuf definition.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Unspecified => "VERSION_FORMAT_UNSPECIFIED",
                Self::V2 => "V2",
                Self::V1 => "V1",
            }
        }

        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "VERSION_FORMAT_UNSPECIFIED" => Some(Self::Unspecified),
                "V2" => Some(Self::V2),
                "V1" => Some(Self::V1),
                _ => None,
            }
        }
    }

    /// Destination dependent options.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, Copy, PartialEq, ::prost::Oneof)]
    #[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
    pub enum Options {
        /// Optional. Options that affect sinks exporting data to BigQuery.
        #[prost(message, tag = "12")]
        BigqueryOptions(super::BigQueryOptions),
    }
}

/// Options that change functionality of a sink exporting data to BigQuery.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct BigQueryOptions {
    /// Optional. Whether to use BigQuery's partition tables.
    #[prost(bool, tag = "1")]
    pub use_partitioned_tables: bool,
    /// Output only. True if new timestamp column based partitioning is in use.
    #[prost(bool, tag = "3")]
    pub uses_timestamp_column_partitioning: bool,
}

/// Specifies a set of log entries that are filtered out by a sink.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct LogExclusion {
    /// Required. A client-assigned identifier, such as
    /// `"load-balancer-exclusion"`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Optional. A description of this exclusion.
    #[prost(string, tag = "2")]
    pub description: ::prost::alloc::string::String,
    /// Required. An advanced logs filter that matches the log entries to be
    /// excluded.
    #[prost(string, tag = "3")]
    pub filter: ::prost::alloc::string::String,
    /// Optional. If set to True, then this exclusion is disabled and it does
    /// not exclude any log entries.
    #[prost(bool, tag = "4")]
    pub disabled: bool,
    /// Output only. The creation timestamp of the exclusion.
    #[prost(message, optional, tag = "5")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::timestamp"))]
    pub create_time: ::core::option::Option<::prost_types::Timestamp>,
    /// Output only. The last update timestamp of the exclusion.
    #[prost(message, optional, tag = "6")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::timestamp"))]
    pub update_time: ::core::option::Option<::prost_types::Timestamp>,
}

/// Describes the customer-managed encryption key (CMEK) settings associated
/// with a project, folder, organization, billing account, or flexible
/// resource.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct CmekSettings {
    /// Output only. The resource name of the CMEK settings.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// The resource name for the configured Cloud KMS key.
    #[prost(string, tag = "2")]
    pub kms_key_name: ::prost::alloc::string::String,
    /// Output only. The CryptoKeyVersion resource name for the configured Cloud
    /// KMS key.
    #[prost(string, tag = "4")]
    pub kms_key_version_name: ::prost::alloc::string::String,
    /// Output only. The service account that will be used by the Log Router to
    /// access your Cloud KMS key.
    #[prost(string, tag = "3")]
    pub service_account_id: ::prost::alloc::string::String,
}

/// Describes the settings associated with a project, folder, organization,
/// billing account, or flexible resource.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct Settings {
    /// Output only. The resource name of the settings.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Optional. The resource name for the configured Cloud KMS key.
    #[prost(string, tag = "2")]
    pub kms_key_name: ::prost::alloc::string::String,
    /// Output only. The service account that will be used by the Log Router to
    /// access your Cloud KMS key.
    #[prost(string, tag = "3")]
    pub kms_service_account_id: ::prost::alloc::string::String,
    /// Optional. The Cloud region that will be used for _Default and _Required
    /// log buckets for newly created projects and folders.
    #[prost(string, tag = "4")]
    pub storage_location: ::prost::alloc::string::String,
    /// Optional. If set to true, the _Default sink in newly created projects
    /// and folders will created in a disabled state.
    #[prost(bool, tag = "5")]
    pub disable_default_sink: bool,
}

/// The parameters to `ListBuckets`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct ListBucketsRequest {
    /// Required. The parent resource whose buckets are to be listed, for
    /// example `projects/my-project/locations/-`.
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    /// Optional. If present, then retrieve the next batch of results.
    #[prost(string, tag = "2")]
    pub page_token: ::prost::alloc::string::String,
    /// Optional. The maximum number of results to return from this request.
    #[prost(int32, tag = "3")]
    pub page_size: i32,
}

/// The response from ListBuckets.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct ListBucketsResponse {
    /// A list of buckets.
    #[prost(message, repeated, tag = "1")]
    pub buckets: ::prost::alloc::vec::Vec<LogBucket>,
    /// If there might be more results than appear in this response, then
    /// `nextPageToken` is included.
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
}

/// The parameters to `CreateBucket`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct CreateBucketRequest {
    /// Required. The resource in which to create the log bucket, for example
    /// `"projects/my-project/locations/global"`.
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    /// Required. A client-assigned identifier such as `"my-bucket"`.
    #[prost(string, tag = "2")]
    pub bucket_id: ::prost::alloc::string::String,
    /// Required. The new bucket. The region specified in the new bucket must be
    /// compliant with any Location Restriction Org Policy.
    #[prost(message, optional, tag = "3")]
    pub bucket: ::core::option::Option<LogBucket>,
}

/// The parameters to `UpdateBucket`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct UpdateBucketRequest {
    /// Required. The full resource name of the bucket to update.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Required. The updated bucket.
    #[prost(message, optional, tag = "2")]
    pub bucket: ::core::option::Option<LogBucket>,
    /// Required. Field mask that specifies the fields in `bucket` that need an
    /// update.
    #[prost(message, optional, tag = "4")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::field_mask"))]
    pub update_mask: ::core::option::Option<::prost_types::FieldMask>,
}

/// The parameters to `GetBucket`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct GetBucketRequest {
    /// Required. The resource name of the bucket.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// The parameters to `DeleteBucket`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct DeleteBucketRequest {
    /// Required. The full resource name of the bucket to delete.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// The parameters to `UndeleteBucket`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct UndeleteBucketRequest {
    /// Required. The full resource name of the bucket to undelete.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// The parameters to `ListViews`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct ListViewsRequest {
    /// Required. The bucket whose views are to be listed.
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    /// Optional. If present, then retrieve the next batch of results.
    #[prost(string, tag = "2")]
    pub page_token: ::prost::alloc::string::String,
    /// Optional. The maximum number of results to return from this request.
    #[prost(int32, tag = "3")]
    pub page_size: i32,
}

/// The response from ListViews.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct ListViewsResponse {
    /// A list of views.
    #[prost(message, repeated, tag = "1")]
    pub views: ::prost::alloc::vec::Vec<LogView>,
    /// If there might be more results than appear in this response, then
    /// `nextPageToken` is included.
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
}

/// The parameters to `CreateView`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct CreateViewRequest {
    /// Required. The bucket in which to create the view.
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    /// Required. A client-assigned identifier such as `"my-view"`.
    #[prost(string, tag = "2")]
    pub view_id: ::prost::alloc::string::String,
    /// Required. The new view.
    #[prost(message, optional, tag = "3")]
    pub view: ::core::option::Option<LogView>,
}

/// The parameters to `UpdateView`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct UpdateViewRequest {
    /// Required. The full resource name of the view to update.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Required. The updated view.
    #[prost(message, optional, tag = "2")]
    pub view: ::core::option::Option<LogView>,
    /// Optional. Field mask that specifies the fields in `view` that need an
    /// update.
    #[prost(message, optional, tag = "4")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::field_mask"))]
    pub update_mask: ::core::option::Option<::prost_types::FieldMask>,
}

/// The parameters to `GetView`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct GetViewRequest {
    /// Required. The resource name of the policy.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// The parameters to `DeleteView`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct DeleteViewRequest {
    /// Required. The full resource name of the view to delete.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// The parameters to `ListSinks`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct ListSinksRequest {
    /// Required. The parent resource whose sinks are to be listed, such as
    /// `"projects/\[PROJECT_ID\]"`.
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    /// Optional. If present, then retrieve the next batch of results.
    #[prost(string, tag = "2")]
    pub page_token: ::prost::alloc::string::String,
    /// Optional. The maximum number of results to return from this request.
    #[prost(int32, tag = "3")]
    pub page_size: i32,
}

/// Result returned from `ListSinks`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct ListSinksResponse {
    /// A list of sinks.
    #[prost(message, repeated, tag = "1")]
    pub sinks: ::prost::alloc::vec::Vec<LogSink>,
    /// If there might be more results than appear in this response, then
    /// `nextPageToken` is included.
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
}

/// The parameters to `GetSink`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct GetSinkRequest {
    /// Required. The resource name of the sink, such as
    /// `"projects/\[PROJECT_ID]/sinks/[SINK_ID\]"`.
    #[prost(string, tag = "1")]
    pub sink_name: ::prost::alloc::string::String,
}

/// The parameters to `CreateSink`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct CreateSinkRequest {
    /// Required. The resource in which to create the sink, such as
    /// `"projects/\[PROJECT_ID\]"`.
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    /// Required. The new sink, whose `name` parameter is a sink identifier that
    /// is not already in use.
    #[prost(message, optional, tag = "2")]
    pub sink: ::core::option::Option<LogSink>,
    /// Optional. Determines the kind of IAM identity returned as
    /// `writer_identity` in the new sink.
    #[prost(bool, tag = "3")]
    pub unique_writer_identity: bool,
}

/// The parameters to `UpdateSink`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct UpdateSinkRequest {
    /// Required. The full resource name of the sink to update, including the
    /// parent resource and the sink identifier.
    #[prost(string, tag = "1")]
    pub sink_name: ::prost::alloc::string::String,
    /// Required. The updated sink, whose name is the same identifier that
    /// appears as part of `sink_name`.
    #[prost(message, optional, tag = "2")]
    pub sink: ::core::option::Option<LogSink>,
    /// Optional. See \[sinks.create\] for a description of this field.
    #[prost(bool, tag = "3")]
    pub unique_writer_identity: bool,
    /// Optional. Field mask that specifies the fields in `sink` that need an
    /// update.
    #[prost(message, optional, tag = "4")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::field_mask"))]
    pub update_mask: ::core::option::Option<::prost_types::FieldMask>,
}

/// The parameters to `DeleteSink`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct DeleteSinkRequest {
    /// Required. The full resource name of the sink to delete.
    #[prost(string, tag = "1")]
    pub sink_name: ::prost::alloc::string::String,
}

/// The parameters to `ListExclusions`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct ListExclusionsRequest {
    /// Required. The parent resource whose exclusions are to be listed.
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    /// Optional. If present, then retrieve the next batch of results.
    #[prost(string, tag = "2")]
    pub page_token: ::prost::alloc::string::String,
    /// Optional. The maximum number of results to return from this request.
    #[prost(int32, tag = "3")]
    pub page_size: i32,
}

/// Result returned from `ListExclusions`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct ListExclusionsResponse {
    /// A list of exclusions.
    #[prost(message, repeated, tag = "1")]
    pub exclusions: ::prost::alloc::vec::Vec<LogExclusion>,
    /// If there might be more results than appear in this response, then
    /// `nextPageToken` is included.
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
}

/// The parameters to `GetExclusion`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct GetExclusionRequest {
    /// Required. The resource name of an existing exclusion.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// The parameters to `CreateExclusion`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct CreateExclusionRequest {
    /// Required. The parent resource in which to create the exclusion.
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    /// Required. The new exclusion, whose `name` parameter is an exclusion name
    /// that is not already used in the parent resource.
    #[prost(message, optional, tag = "2")]
    pub exclusion: ::core::option::Option<LogExclusion>,
}

/// The parameters to `UpdateExclusion`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct UpdateExclusionRequest {
    /// Required. The resource name of the exclusion to update.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Required. New values for the existing exclusion. Only the fields
    /// specified in `update_mask` are relevant.
    #[prost(message, optional, tag = "2")]
    pub exclusion: ::core::option::Option<LogExclusion>,
    /// Required. A non-empty list of fields to change in the existing
    /// exclusion.
    #[prost(message, optional, tag = "3")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::field_mask"))]
    pub update_mask: ::core::option::Option<::prost_types::FieldMask>,
}

/// The parameters to `DeleteExclusion`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct DeleteExclusionRequest {
    /// Required. The resource name of an existing exclusion to delete.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// The parameters to
/// \[GetCmekSettings][google.logging.v2.ConfigServiceV2.GetCmekSettings\].
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct GetCmekSettingsRequest {
    /// Required. The resource for which to retrieve CMEK settings, such as
    /// `"projects/\[PROJECT_ID\]/cmekSettings"`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// The parameters to
/// \[UpdateCmekSettings][google.logging.v2.ConfigServiceV2.UpdateCmekSettings\].
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct UpdateCmekSettingsRequest {
    /// Required. The resource name for the CMEK settings to update.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Required. The CMEK settings to update.
    #[prost(message, optional, tag = "2")]
    pub cmek_settings: ::core::option::Option<CmekSettings>,
    /// Optional. Field mask identifying which fields from `cmek_settings` should
    /// be updated.
    #[prost(message, optional, tag = "3")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::field_mask"))]
    pub update_mask: ::core::option::Option<::prost_types::FieldMask>,
}

/// The parameters to
/// \[GetSettings][google.logging.v2.ConfigServiceV2.GetSettings\].
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct GetSettingsRequest {
    /// Required. The resource for which to retrieve settings, such as
    /// `"projects/\[PROJECT_ID\]/settings"`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// The parameters to
/// \[UpdateSettings][google.logging.v2.ConfigServiceV2.UpdateSettings\].
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct UpdateSettingsRequest {
    /// Required. The name for the settings to update.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Required. The settings to update.
    #[prost(message, optional, tag = "2")]
    pub settings: ::core::option::Option<Settings>,
    /// Optional. Field mask identifying which fields from `settings` should be
    /// updated.
    #[prost(message, optional, tag = "3")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::field_mask"))]
    pub update_mask: ::core::option::Option<::prost_types::FieldMask>,
}

/// LogBucket lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LifecycleState {
    /// Unspecified state. This is only used/useful for distinguishing unset
    /// values.
    Unspecified = 0,
    /// The normal and active state.
    Active = 1,
    /// The resource has been marked for deletion by the user.
    DeleteRequested = 2,
    /// The resource has been marked for an update by the user.
    Updating = 3,
    /// The resource has been marked for creation by the user.
    Creating = 4,
    /// The resource is in an INTERNAL error state.
    Failed = 5,
}

impl LifecycleState {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "LIFECYCLE_STATE_UNSPECIFIED",
            Self::Active => "ACTIVE",
            Self::DeleteRequested => "DELETE_REQUESTED",
            Self::Updating => "UPDATING",
            Self::Creating => "CREATING",
            Self::Failed => "FAILED",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "LIFECYCLE_STATE_UNSPECIFIED" => Some(Self::Unspecified),
            "ACTIVE" => Some(Self::Active),
            "DELETE_REQUESTED" => Some(Self::DeleteRequested),
            "UPDATING" => Some(Self::Updating),
            "CREATING" => Some(Self::Creating),
            "FAILED" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// IndexType is used for custom indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum IndexType {
    /// The index's type is unspecified.
    Unspecified = 0,
    /// The index is a string-type index.
    String = 1,
    /// The index is a integer-type index.
    Integer = 2,
}

impl IndexType {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "INDEX_TYPE_UNSPECIFIED",
            Self::String => "INDEX_TYPE_STRING",
            Self::Integer => "INDEX_TYPE_INTEGER",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "INDEX_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
            "INDEX_TYPE_STRING" => Some(Self::String),
            "INDEX_TYPE_INTEGER" => Some(Self::Integer),
            _ => None,
        }
    }
}
