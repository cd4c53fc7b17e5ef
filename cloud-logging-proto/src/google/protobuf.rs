/// A generic empty message, returned by the delete and undelete RPCs.
///
/// Unlike `prost_types::Empty` this carries the JSON mapping, so a `{}` REST
/// response body decodes into it.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Empty {}

impl From<Empty> for () {
    fn from(_: Empty) -> Self {}
}
