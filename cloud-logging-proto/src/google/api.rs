/// An object representing a resource that can be used for monitoring, logging,
/// billing, or other purposes.
///
/// For example, a Compute Engine VM instance is `{"type": "gce_instance",
/// "labels": {"project_id": "my-project", "instance_id": "12345678901234",
/// "zone": "us-central1-a"}}`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct MonitoredResource {
    /// Required. The monitored resource type, for example `gce_instance`.
    #[prost(string, tag = "1")]
    #[cfg_attr(feature = "with-serde", serde(rename = "type"))]
    pub r#type: ::prost::alloc::string::String,
    /// Required. Values for all of the labels listed in the associated monitored
    /// resource descriptor.
    #[prost(map = "string, string", tag = "2")]
    pub labels:
        ::std::collections::HashMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
}

/// Describes the schema of a [`MonitoredResource`] using a type name and a set
/// of labels.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct MonitoredResourceDescriptor {
    /// Optional. The resource name of the monitored resource descriptor.
    #[prost(string, tag = "5")]
    pub name: ::prost::alloc::string::String,
    /// Required. The monitored resource type.
    #[prost(string, tag = "1")]
    #[cfg_attr(feature = "with-serde", serde(rename = "type"))]
    pub r#type: ::prost::alloc::string::String,
    /// Optional. A concise name for the monitored resource type.
    #[prost(string, tag = "2")]
    pub display_name: ::prost::alloc::string::String,
    /// Optional. A detailed description of the monitored resource type.
    #[prost(string, tag = "3")]
    pub description: ::prost::alloc::string::String,
    /// Required. A set of labels used to describe instances of this monitored
    /// resource type.
    #[prost(message, repeated, tag = "4")]
    pub labels: ::prost::alloc::vec::Vec<LabelDescriptor>,
    /// Optional. The launch stage of the monitored resource definition.
    #[prost(enumeration = "LaunchStage", tag = "7")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::launch_stage"))]
    pub launch_stage: i32,
}

/// A description of a label.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct LabelDescriptor {
    /// The label key.
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
    /// The type of data that can be assigned to the label.
    #[prost(enumeration = "label_descriptor::ValueType", tag = "2")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::label_value_type"))]
    pub value_type: i32,
    /// A human-readable description for the label.
    #[prost(string, tag = "3")]
    pub description: ::prost::alloc::string::String,
}

/// Nested message and enum types in `LabelDescriptor`.
pub mod label_descriptor {
    /// Value types that can be used as label values.
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum ValueType {
        String = 0,
        Bool = 1,
        Int64 = 2,
    }

    impl ValueType {
        /// String value of the enum field names used in the ProtoBuf definition.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::String => "STRING",
                Self::Bool => "BOOL",
                Self::Int64 => "INT64",
            }
        }

        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "STRING" => Some(Self::String),
                "BOOL" => Some(Self::Bool),
                "INT64" => Some(Self::Int64),
                _ => None,
            }
        }
    }
}

/// The launch stage as defined by Google Cloud Platform Launch Stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LaunchStage {
    Unspecified = 0,
    Unimplemented = 6,
    Prelaunch = 7,
    EarlyAccess = 1,
    Alpha = 2,
    Beta = 3,
    Ga = 4,
    Deprecated = 5,
}

impl LaunchStage {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "LAUNCH_STAGE_UNSPECIFIED",
            Self::Unimplemented => "UNIMPLEMENTED",
            Self::Prelaunch => "PRELAUNCH",
            Self::EarlyAccess => "EARLY_ACCESS",
            Self::Alpha => "ALPHA",
            Self::Beta => "BETA",
            Self::Ga => "GA",
            Self::Deprecated => "DEPRECATED",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "LAUNCH_STAGE_UNSPECIFIED" => Some(Self::Unspecified),
            "UNIMPLEMENTED" => Some(Self::Unimplemented),
            "PRELAUNCH" => Some(Self::Prelaunch),
            "EARLY_ACCESS" => Some(Self::EarlyAccess),
            "ALPHA" => Some(Self::Alpha),
            "BETA" => Some(Self::Beta),
            "GA" => Some(Self::Ga),
            "DEPRECATED" => Some(Self::Deprecated),
            _ => None,
        }
    }
}

/// Defines a metric type and its schema.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct MetricDescriptor {
    /// The resource name of the metric descriptor.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// The metric type, including its DNS name prefix.
    #[prost(string, tag = "8")]
    #[cfg_attr(feature = "with-serde", serde(rename = "type"))]
    pub r#type: ::prost::alloc::string::String,
    /// The set of labels that can be used to describe a specific instance of
    /// this metric type.
    #[prost(message, repeated, tag = "2")]
    pub labels: ::prost::alloc::vec::Vec<LabelDescriptor>,
    /// Whether the metric records instantaneous values, changes to a value, etc.
    #[prost(enumeration = "metric_descriptor::MetricKind", tag = "3")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::metric_kind"))]
    pub metric_kind: i32,
    /// Whether the measurement is an integer, a floating-point number, etc.
    #[prost(enumeration = "metric_descriptor::ValueType", tag = "4")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::metric_value_type"))]
    pub value_type: i32,
    /// The units in which the metric value is reported.
    #[prost(string, tag = "5")]
    pub unit: ::prost::alloc::string::String,
    /// A detailed description of the metric.
    #[prost(string, tag = "6")]
    pub description: ::prost::alloc::string::String,
    /// A concise name for the metric, which can be displayed in user interfaces.
    #[prost(string, tag = "7")]
    pub display_name: ::prost::alloc::string::String,
    /// Optional. The launch stage of the metric definition.
    #[prost(enumeration = "LaunchStage", tag = "12")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::launch_stage"))]
    pub launch_stage: i32,
    /// Read-only. Monitored resource types this metric can be associated with.
    #[prost(string, repeated, tag = "13")]
    pub monitored_resource_types: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

/// Nested message and enum types in `MetricDescriptor`.
pub mod metric_descriptor {
    /// The kind of measurement.
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum MetricKind {
        Unspecified = 0,
        Gauge = 1,
        Delta = 2,
        Cumulative = 3,
    }

    impl MetricKind {
        /// String value of the enum field names used in the ProtoBuf definition.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Unspecified => "METRIC_KIND_UNSPECIFIED",
                Self::Gauge => "GAUGE",
                Self::Delta => "DELTA",
                Self::Cumulative => "CUMULATIVE",
            }
        }

        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "METRIC_KIND_UNSPECIFIED" => Some(Self::Unspecified),
                "GAUGE" => Some(Self::Gauge),
                "DELTA" => Some(Self::Delta),
                "CUMULATIVE" => Some(Self::Cumulative),
                _ => None,
            }
        }
    }

    /// The value type of a metric.
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum ValueType {
        Unspecified = 0,
        Bool = 1,
        Int64 = 2,
        Double = 3,
        String = 4,
        Distribution = 5,
        Money = 6,
    }

    impl ValueType {
        /// String value of the enum field names used in the ProtoBuf definition.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Unspecified => "VALUE_TYPE_UNSPECIFIED",
                Self::Bool => "BOOL",
                Self::Int64 => "INT64",
                Self::Double => "DOUBLE",
                Self::String => "STRING",
                Self::Distribution => "DISTRIBUTION",
                Self::Money => "MONEY",
            }
        }

        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "VALUE_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
                "BOOL" => Some(Self::Bool),
                "INT64" => Some(Self::Int64),
                "DOUBLE" => Some(Self::Double),
                "STRING" => Some(Self::String),
                "DISTRIBUTION" => Some(Self::Distribution),
                "MONEY" => Some(Self::Money),
                _ => None,
            }
        }
    }
}

/// Nested message types in `Distribution`. Only the bucket layout is used by
/// the logging API.
pub mod distribution {
    /// Specifies histogram bucket boundaries.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    #[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
    pub struct BucketOptions {
        /// Exactly one of these three fields must be set.
        #[prost(oneof = "bucket_options::Options", tags = "1, 2, 3")]
        #[cfg_attr(feature = "with-serde", serde(flatten))]
        pub options: ::core::option::Option<bucket_options::Options>,
    }

    /// Nested message and enum types in `BucketOptions`.
    pub mod bucket_options {
        /// Buckets of equal width.
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, Copy, PartialEq, ::prost::Message)]
        #[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
        pub struct Linear {
            /// Must be greater than 0.
            #[prost(int32, tag = "1")]
            pub num_finite_buckets: i32,
            /// Must be greater than 0.
            #[prost(double, tag = "2")]
            pub width: f64,
            /// Lower bound of the first bucket.
            #[prost(double, tag = "3")]
            pub offset: f64,
        }

        /// Buckets whose width grows with the bucket index.
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, Copy, PartialEq, ::prost::Message)]
        #[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
        pub struct Exponential {
            /// Must be greater than 0.
            #[prost(int32, tag = "1")]
            pub num_finite_buckets: i32,
            /// Must be greater than 1.
            #[prost(double, tag = "2")]
            pub growth_factor: f64,
            /// Must be greater than 0.
            #[prost(double, tag = "3")]
            pub scale: f64,
        }

        /// Buckets with arbitrary, strictly increasing boundaries.
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        #[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
        pub struct Explicit {
            /// The values must be monotonically increasing.
            #[prost(double, repeated, tag = "1")]
            pub bounds: ::prost::alloc::vec::Vec<f64>,
        }

        /// Exactly one of these three fields must be set.
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        #[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
        pub enum Options {
            /// The linear bucket.
            #[prost(message, tag = "1")]
            LinearBuckets(Linear),
            /// The exponential buckets.
            #[prost(message, tag = "2")]
            ExponentialBuckets(Exponential),
            /// The explicit buckets.
            #[prost(message, tag = "3")]
            ExplicitBuckets(Explicit),
        }
    }
}
