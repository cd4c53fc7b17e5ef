/// An individual entry in a log.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct LogEntry {
    /// Required. The resource name of the log to which this log entry belongs:
    ///
    ///      "projects/\[PROJECT_ID]/logs/[LOG_ID\]"
    ///      "organizations/\[ORGANIZATION_ID]/logs/[LOG_ID\]"
    ///      "billingAccounts/\[BILLING_ACCOUNT_ID]/logs/[LOG_ID\]"
    ///      "folders/\[FOLDER_ID]/logs/[LOG_ID\]"
    ///
    /// `\[LOG_ID\]` must be URL-encoded within `log_name`.
    #[prost(string, tag = "12")]
    pub log_name: ::prost::alloc::string::String,
    /// Required. The monitored resource that produced this log entry.
    #[prost(message, optional, tag = "8")]
    pub resource: ::core::option::Option<crate::google::api::MonitoredResource>,
    /// Optional. The time the event described by the log entry occurred. If
    /// omitted, Logging assigns it the current time.
    #[prost(message, optional, tag = "9")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::timestamp"))]
    pub timestamp: ::core::option::Option<::prost_types::Timestamp>,
    /// Output only. The time the log entry was received by Logging.
    #[prost(message, optional, tag = "24")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::timestamp"))]
    pub receive_timestamp: ::core::option::Option<::prost_types::Timestamp>,
    /// Optional. The severity of the log entry. The default value is
    /// `LogSeverity.DEFAULT`.
    #[prost(enumeration = "crate::google::logging::r#type::LogSeverity", tag = "10")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::log_severity"))]
    pub severity: i32,
    /// Optional. A unique identifier for the log entry. Entries with the same
    /// `timestamp` and `insert_id` are treated as duplicates.
    #[prost(string, tag = "4")]
    pub insert_id: ::prost::alloc::string::String,
    /// Optional. Information about the HTTP request associated with this log
    /// entry, if applicable.
    #[prost(message, optional, tag = "7")]
    pub http_request: ::core::option::Option<crate::google::logging::r#type::HttpRequest>,
    /// Optional. A map of key, value pairs that provides additional information
    /// about the log entry.
    #[prost(map = "string, string", tag = "11")]
    pub labels:
        ::std::collections::HashMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
    /// Optional. Information about an operation associated with the log entry,
    /// if applicable.
    #[prost(message, optional, tag = "15")]
    pub operation: ::core::option::Option<LogEntryOperation>,
    /// Optional. Resource name of the trace associated with the log entry, if
    /// any. Example: `projects/my-projectid/traces/06796866738c859f2f19b7cfb3214824`
    #[prost(string, tag = "22")]
    pub trace: ::prost::alloc::string::String,
    /// Optional. The span ID within the trace associated with the log entry.
    #[prost(string, tag = "27")]
    pub span_id: ::prost::alloc::string::String,
    /// Optional. The sampling decision of the trace associated with the log
    /// entry.
    #[prost(bool, tag = "30")]
    pub trace_sampled: bool,
    /// Optional. Source code location information associated with the log
    /// entry, if any.
    #[prost(message, optional, tag = "23")]
    pub source_location: ::core::option::Option<LogEntrySourceLocation>,
    /// Optional. Information indicating this LogEntry is part of a sequence of
    /// multiple log entries split from a single LogEntry.
    #[prost(message, optional, tag = "35")]
    pub split: ::core::option::Option<LogSplit>,
    /// The log entry payload, which can be one of multiple types.
    #[prost(oneof = "log_entry::Payload", tags = "2, 3, 6")]
    #[cfg_attr(feature = "with-serde", serde(flatten))]
    pub payload: ::core::option::Option<log_entry::Payload>,
}

/// Nested message and enum types in `LogEntry`.
pub mod log_entry {
    /// The log entry payload, which can be one of multiple types.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    #[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
    pub enum Payload {
        /// The log entry payload, represented as a protocol buffer.
        #[prost(message, tag = "2")]
        #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::any_value"))]
        ProtoPayload(::prost_types::Any),
        /// The log entry payload, represented as a Unicode string (UTF-8).
        #[prost(string, tag = "3")]
        TextPayload(::prost::alloc::string::String),
        /// The log entry payload, represented as a structure that is
        /// expressed as a JSON object.
        #[prost(message, tag = "6")]
        #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::struct_value"))]
        JsonPayload(::prost_types::Struct),
    }
}

/// Additional information about a potentially long-running operation with
/// which a log entry is associated.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct LogEntryOperation {
    /// Optional. An arbitrary operation identifier.
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    /// Optional. An arbitrary producer identifier.
    #[prost(string, tag = "2")]
    pub producer: ::prost::alloc::string::String,
    /// Optional. Set this to True if this is the first log entry in the
    /// operation.
    #[prost(bool, tag = "3")]
    pub first: bool,
    /// Optional. Set this to True if this is the last log entry in the
    /// operation.
    #[prost(bool, tag = "4")]
    pub last: bool,
}

/// Additional information about the source code location that produced the log
/// entry.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct LogEntrySourceLocation {
    /// Optional. Source file name.
    #[prost(string, tag = "1")]
    pub file: ::prost::alloc::string::String,
    /// Optional. Line within the source file. 1-based; 0 indicates no line
    /// number available.
    #[prost(int64, tag = "2")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::i64_string"))]
    pub line: i64,
    /// Optional. Human-readable name of the function or method being invoked.
    #[prost(string, tag = "3")]
    pub function: ::prost::alloc::string::String,
}

/// Additional information used to correlate multiple log entries. Used when a
/// single LogEntry would exceed the Google Cloud Logging size limit and is
/// split across multiple log entries.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct LogSplit {
    /// A globally unique identifier for all log entries in a sequence of split
    /// log entries.
    #[prost(string, tag = "1")]
    pub uid: ::prost::alloc::string::String,
    /// The index of this LogEntry in the sequence of split log entries.
    #[prost(int32, tag = "2")]
    pub index: i32,
    /// The total number of log entries that the original LogEntry was split
    /// into.
    #[prost(int32, tag = "3")]
    pub total_splits: i32,
}
