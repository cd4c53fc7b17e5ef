//! Error types returned by the logging clients.
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Canonical status codes shared by the gRPC and REST transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Code {
    Ok,
    Cancelled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
}

impl Code {
    /// Maps the numeric gRPC code. Unknown numbers become [`Code::Unknown`].
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => Code::Ok,
            1 => Code::Cancelled,
            3 => Code::InvalidArgument,
            4 => Code::DeadlineExceeded,
            5 => Code::NotFound,
            6 => Code::AlreadyExists,
            7 => Code::PermissionDenied,
            8 => Code::ResourceExhausted,
            9 => Code::FailedPrecondition,
            10 => Code::Aborted,
            11 => Code::OutOfRange,
            12 => Code::Unimplemented,
            13 => Code::Internal,
            14 => Code::Unavailable,
            15 => Code::DataLoss,
            16 => Code::Unauthenticated,
            _ => Code::Unknown,
        }
    }

    /// Parses the `status` string of a Google JSON error body, such as
    /// `"NOT_FOUND"`.
    pub fn from_status_name(name: &str) -> Option<Self> {
        Some(match name {
            "OK" => Code::Ok,
            "CANCELLED" => Code::Cancelled,
            "UNKNOWN" => Code::Unknown,
            "INVALID_ARGUMENT" => Code::InvalidArgument,
            "DEADLINE_EXCEEDED" => Code::DeadlineExceeded,
            "NOT_FOUND" => Code::NotFound,
            "ALREADY_EXISTS" => Code::AlreadyExists,
            "PERMISSION_DENIED" => Code::PermissionDenied,
            "RESOURCE_EXHAUSTED" => Code::ResourceExhausted,
            "FAILED_PRECONDITION" => Code::FailedPrecondition,
            "ABORTED" => Code::Aborted,
            "OUT_OF_RANGE" => Code::OutOfRange,
            "UNIMPLEMENTED" => Code::Unimplemented,
            "INTERNAL" => Code::Internal,
            "UNAVAILABLE" => Code::Unavailable,
            "DATA_LOSS" => Code::DataLoss,
            "UNAUTHENTICATED" => Code::Unauthenticated,
            _ => return None,
        })
    }

    /// Maps an HTTP status to the closest canonical code.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            200..=299 => Code::Ok,
            400 => Code::InvalidArgument,
            401 => Code::Unauthenticated,
            403 => Code::PermissionDenied,
            404 => Code::NotFound,
            409 => Code::Aborted,
            412 => Code::FailedPrecondition,
            416 => Code::OutOfRange,
            429 => Code::ResourceExhausted,
            499 => Code::Cancelled,
            500 => Code::Internal,
            501 => Code::Unimplemented,
            503 => Code::Unavailable,
            504 => Code::DeadlineExceeded,
            400..=499 => Code::FailedPrecondition,
            _ => Code::Unknown,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "grpc-tonic")]
impl From<tonic::Code> for Code {
    fn from(code: tonic::Code) -> Self {
        Code::from_i32(code as i32)
    }
}

/// The status an RPC completed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub code: Code,
    pub message: String,
}

impl Status {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Status {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

#[cfg(feature = "grpc-tonic")]
impl From<tonic::Status> for Status {
    fn from(status: tonic::Status) -> Self {
        Status::new(status.code().into(), status.message())
    }
}

/// Errors returned by the logging clients.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The client configuration is invalid. Raised while building a client.
    #[error("{0}")]
    Config(String),

    /// The call was used incorrectly. Raised before any network activity.
    #[error("{0}")]
    InvalidArgument(String),

    /// The service answered with a non-OK status.
    #[error("rpc failed with {0}")]
    Rpc(Status),

    /// A retried call stopped because the next attempt would pass the retry
    /// deadline.
    #[error("retry deadline of {deadline:?} exceeded after {attempts} attempt(s): {source}")]
    RetryExhausted {
        attempts: u32,
        deadline: Duration,
        source: Box<Error>,
    },

    /// The RPC is not available on the selected transport.
    #[error("{0} is not supported by this transport")]
    Unimplemented(&'static str),

    /// Building or using the underlying connection failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// Obtaining credentials failed.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Encoding a request or decoding a response failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl Error {
    pub(crate) fn status(code: Code, message: impl Into<String>) -> Self {
        Error::Rpc(Status::new(code, message))
    }

    /// The status code this error carries, looking through retry exhaustion.
    pub fn code(&self) -> Option<Code> {
        match self {
            Error::Rpc(status) => Some(status.code),
            Error::RetryExhausted { source, .. } => source.code(),
            Error::Unimplemented(_) => Some(Code::Unimplemented),
            _ => None,
        }
    }

    /// Whether the error is a `NOT_FOUND` status.
    pub fn is_not_found(&self) -> bool {
        self.code() == Some(Code::NotFound)
    }

    /// Whether the call may succeed if attempted again.
    ///
    /// Only statuses are considered; configuration, usage and plumbing errors
    /// are permanent.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Rpc(status) if crate::retry::is_transient(status.code))
    }
}

#[cfg(feature = "grpc-tonic")]
impl From<tonic::Status> for Error {
    fn from(status: tonic::Status) -> Self {
        Error::Rpc(status.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

impl From<prost::DecodeError> for Error {
    fn from(err: prost::DecodeError) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Shorthand for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_statuses_map_to_codes() {
        assert_eq!(Code::from_http_status(404), Code::NotFound);
        assert_eq!(Code::from_http_status(429), Code::ResourceExhausted);
        assert_eq!(Code::from_http_status(503), Code::Unavailable);
        assert_eq!(Code::from_http_status(418), Code::FailedPrecondition);
        assert_eq!(Code::from_http_status(502), Code::Unknown);
    }

    #[test]
    fn retry_exhausted_exposes_last_cause() {
        let err = Error::RetryExhausted {
            attempts: 3,
            deadline: Duration::from_secs(1),
            source: Box::new(Error::status(Code::Unavailable, "backend down")),
        };
        assert_eq!(err.code(), Some(Code::Unavailable));
        assert!(!err.is_transient());
        assert!(err.to_string().contains("backend down"));
    }

    #[test]
    fn only_statuses_are_transient() {
        assert!(Error::status(Code::Internal, "boom").is_transient());
        assert!(!Error::status(Code::NotFound, "gone").is_transient());
        assert!(!Error::Transport("refused".into()).is_transient());
        assert!(Error::status(Code::NotFound, "gone").is_not_found());
    }
}
