//! Protobuf types for the Cloud Logging v2 API.
//!
//! The messages mirror `google/logging/v2/*.proto` together with the parts of
//! `google.api`, `google.logging.type`, `google.rpc` and `google.protobuf`
//! they reference. They are checked in rather than generated at build time,
//! so the crate builds without `protoc`.
//!
//! # Feature flags
//!
//! - `with-serde`: derive `serde` traits following the proto3 JSON mapping
//!   (lowerCamelCase field names, enums by name, int64 as strings, RFC 3339
//!   timestamps). Used by the REST transport of `cloud-logging`.
//! - `full` (default): every feature above.
#![warn(
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![allow(clippy::doc_lazy_continuation)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod google;

#[cfg(feature = "with-serde")]
pub mod serializers;

pub use google::logging::r#type::LogSeverity;
pub use google::protobuf::Empty;
