use crate::google::api::{distribution::BucketOptions, MetricDescriptor};

/// Describes a logs-based metric. The value of the metric is the number of log
/// entries that match a logs filter in a given time interval.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct LogMetric {
    /// Required. The client-assigned metric identifier, for example
    /// `"severe_errors"`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Optional. A description of this metric, which is used in documentation.
    #[prost(string, tag = "2")]
    pub description: ::prost::alloc::string::String,
    /// Required. An advanced logs filter which is used to match log entries,
    /// for example `"resource.type=gae_app AND severity>=ERROR"`.
    #[prost(string, tag = "3")]
    pub filter: ::prost::alloc::string::String,
    /// Optional. The resource name of the Log Bucket that owns the Log Metric.
    /// Only Log Buckets in projects are supported.
    #[prost(string, tag = "13")]
    pub bucket_name: ::prost::alloc::string::String,
    /// Optional. If set to True, then this metric is disabled and it does not
    /// generate any points.
    #[prost(bool, tag = "12")]
    pub disabled: bool,
    /// Optional. The metric descriptor associated with the logs-based metric.
    #[prost(message, optional, tag = "5")]
    pub metric_descriptor: ::core::option::Option<MetricDescriptor>,
    /// Optional. A `value_extractor` is required when using a distribution
    /// logs-based metric to extract the values to record from a log entry.
    #[prost(string, tag = "6")]
    pub value_extractor: ::prost::alloc::string::String,
    /// Optional. A map from a label key string to an extractor expression
    /// which is used to extract data from a log entry field and assign as the
    /// label value.
    #[prost(map = "string, string", tag = "7")]
    pub label_extractors:
        ::std::collections::HashMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
    /// Optional. The `bucket_options` are required when the logs-based metric
    /// is using a DISTRIBUTION value type.
    #[prost(message, optional, tag = "8")]
    pub bucket_options: ::core::option::Option<BucketOptions>,
    /// Output only. The creation timestamp of the metric.
    #[prost(message, optional, tag = "9")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::timestamp"))]
    pub create_time: ::core::option::Option<::prost_types::Timestamp>,
    /// Output only. The last update timestamp of the metric.
    #[prost(message, optional, tag = "10")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::timestamp"))]
    pub update_time: ::core::option::Option<::prost_types::Timestamp>,
    /// Deprecated. The API version that created or updated this metric.
    #[prost(enumeration = "log_metric::ApiVersion", tag = "4")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::api_version"))]
    pub version: i32,
}

/// Nested message and enum types in `LogMetric`.
pub mod log_metric {
    /// Logging API version.
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum ApiVersion {
        /// Logging API v2.
        V2 = 0,
        /// Logging API v1.
        V1 = 1,
    }

    impl ApiVersion {
        /// String value of the enum field names used in the ProtoBuf definition.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::V2 => "V2",
                Self::V1 => "V1",
            }
        }

        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "V2" => Some(Self::V2),
                "V1" => Some(Self::V1),
                _ => None,
            }
        }
    }
}

/// The parameters to ListLogMetrics.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct ListLogMetricsRequest {
    /// Required. The name of the project containing the metrics:
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

/// Result returned from ListLogMetrics.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct ListLogMetricsResponse {
    /// A list of logs-based metrics.
    #[prost(message, repeated, tag = "1")]
    pub metrics: ::prost::alloc::vec::Vec<LogMetric>,
    /// If there might be more results than appear in this response, then
    /// `nextPageToken` is included.
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
}

/// The parameters to GetLogMetric.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct GetLogMetricRequest {
    /// Required. The resource name of the desired metric:
    /// `"projects/\[PROJECT_ID]/metrics/[METRIC_ID\]"`.
    #[prost(string, tag = "1")]
    pub metric_name: ::prost::alloc::string::String,
}

/// The parameters to CreateLogMetric.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct CreateLogMetricRequest {
    /// Required. The resource name of the project in which to create the
    /// metric: `"projects/\[PROJECT_ID\]"`.
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    /// Required. The new logs-based metric, which must not have an identifier
    /// that already exists.
    #[prost(message, optional, tag = "2")]
    pub metric: ::core::option::Option<LogMetric>,
}

/// The parameters to UpdateLogMetric.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct UpdateLogMetricRequest {
    /// Required. The resource name of the metric to update:
    /// `"projects/\[PROJECT_ID]/metrics/[METRIC_ID\]"`.
    ///
    /// The updated metric must be provided in the request and it's `name` field
    /// must be the same as `\[METRIC_ID\]`. If the metric does not exist in
    /// `\[PROJECT_ID\]`, then a new metric is created.
    #[prost(string, tag = "1")]
    pub metric_name: ::prost::alloc::string::String,
    /// Required. The updated metric.
    #[prost(message, optional, tag = "2")]
    pub metric: ::core::option::Option<LogMetric>,
}

/// The parameters to DeleteLogMetric.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct DeleteLogMetricRequest {
    /// Required. The resource name of the metric to delete:
    /// `"projects/\[PROJECT_ID]/metrics/[METRIC_ID\]"`.
    #[prost(string, tag = "1")]
    pub metric_name: ::prost::alloc::string::String,
}
