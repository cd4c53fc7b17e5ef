/// The `Status` type defines a logical error model. Each status carries an
/// error code, a developer-facing message and optional details.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase", default))]
pub struct Status {
    /// The status code, which should be an enum value of `google.rpc.Code`.
    #[prost(int32, tag = "1")]
    pub code: i32,
    /// A developer-facing error message, in English.
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
    /// Messages that carry the error details.
    #[prost(message, repeated, tag = "3")]
    #[cfg_attr(feature = "with-serde", serde(with = "crate::serializers::any_list"))]
    pub details: ::prost::alloc::vec::Vec<::prost_types::Any>,
}
