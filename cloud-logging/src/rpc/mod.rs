//! Static descriptions of every RPC the clients can issue.
//!
//! Each RPC is a zero sized type implementing [`Rpc`]. It names the gRPC
//! method, the HTTP binding used by the REST transport, the request fields
//! that feed the routing header and the default retry and timeout policy.
//! Transports, pagers and the typed [`Call`](crate::Call) builder are generic
//! over these descriptors.
use crate::error::{Error, Result};
use crate::retry::RetryPolicy;
use prost::Message;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

pub mod config;
pub mod logging;
pub mod metrics;

/// How an RPC maps onto a REST request.
#[derive(Debug, Clone)]
pub struct HttpRule {
    pub method: http::Method,
    /// URI template relative to the endpoint, such as `/v2/{parent}/sinks`.
    /// Each `{field}` is substituted with the request field of that name.
    pub path: &'static str,
    /// `"*"` to send every remaining field as the body, the name of a single
    /// field to send only that field, or `None` for no body at all.
    pub body: Option<&'static str>,
}

/// Retry and timeout applied when the caller does not override them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallPolicy {
    /// `None` means a single attempt.
    pub retry: Option<RetryPolicy>,
    /// Timeout of a single, non retried attempt.
    pub timeout: Option<Duration>,
}

impl CallPolicy {
    /// Retries transient failures with the standard backoff for up to
    /// `deadline`.
    pub fn retried(deadline: Duration) -> Self {
        CallPolicy {
            retry: Some(RetryPolicy::standard().with_deadline(deadline)),
            timeout: Some(deadline),
        }
    }

    /// A single attempt bounded by `timeout`.
    pub fn once(timeout: Duration) -> Self {
        CallPolicy {
            retry: None,
            timeout: Some(timeout),
        }
    }
}

/// A unary RPC.
pub trait Rpc: Send + Sync + 'static {
    type Request: Message + fmt::Debug + Default + Clone + Serialize + DeserializeOwned + Send + Sync + 'static;
    type Response: Message + fmt::Debug + Default + Serialize + DeserializeOwned + Send + Sync + 'static;
    /// What callers receive. `Empty` responses surface as `()`.
    type Output: From<Self::Response> + Send + 'static;

    /// Fully qualified service name, such as `google.logging.v2.ConfigServiceV2`.
    const SERVICE: &'static str;
    const METHOD: &'static str;
    /// The gRPC path, `/{SERVICE}/{METHOD}`.
    const PATH: &'static str;
    const HTTP: HttpRule;

    /// Request fields sent in `x-goog-request-params`, in declaration order.
    fn routing(request: &Self::Request) -> Vec<(&'static str, String)>;

    fn policy() -> CallPolicy;

    /// Usage checks run on the final request before any attempt.
    fn validate(request: &Self::Request) -> Result<()> {
        let _ = request;
        Ok(())
    }
}

/// An RPC whose response is one page of a longer list.
pub trait PagedRpc: Rpc {
    type Item: Send + 'static;

    fn page_size(request: &Self::Request) -> i32;
    fn set_page_size(request: &mut Self::Request, page_size: i32);
    fn set_page_token(request: &mut Self::Request, token: String);
    fn next_page_token(response: &Self::Response) -> &str;
    fn into_items(response: Self::Response) -> Vec<Self::Item>;
}

pub(crate) fn check_page_size(page_size: i32) -> Result<()> {
    if page_size < 0 {
        return Err(Error::InvalidArgument(format!(
            "page_size must not be negative, got {page_size}"
        )));
    }
    Ok(())
}

/// An RPC with a stream of requests and a stream of responses.
pub trait StreamingRpc: Rpc {}

macro_rules! rpc {
    (@output $resp:ty) => { $resp };
    (@output $resp:ty, $out:ty) => { $out };
    (@body) => { None };
    (@body $body:literal) => { Some($body) };
    (@validate $items:ident) => {
        fn validate(request: &Self::Request) -> $crate::error::Result<()> {
            $crate::rpc::check_page_size(request.page_size)
        }
    };
    ($(
        $(#[$meta:meta])*
        $name:ident {
            service: $service:literal,
            method: $method:literal,
            request: $req:ty,
            response: $resp:ty $(=> $out:ty)?,
            http: $verb:ident $path:literal $(body $body:literal)?,
            routing: [$($field:ident),*],
            $(pages: $items:ident => $item:ty,)?
            policy: $policy:expr $(,)?
        }
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $crate::rpc::Rpc for $name {
            type Request = $req;
            type Response = $resp;
            type Output = rpc!(@output $resp $(, $out)?);

            const SERVICE: &'static str = $service;
            const METHOD: &'static str = $method;
            const PATH: &'static str = concat!("/", $service, "/", $method);
            const HTTP: $crate::rpc::HttpRule = $crate::rpc::HttpRule {
                method: http::Method::$verb,
                path: $path,
                body: rpc!(@body $($body)?),
            };

            fn routing(request: &Self::Request) -> Vec<(&'static str, String)> {
                let _ = request;
                vec![$((stringify!($field), request.$field.clone())),*]
            }

            fn policy() -> $crate::rpc::CallPolicy {
                $policy
            }

            $(rpc!(@validate $items);)?
        }

        $($crate::rpc::paged!($name => $items: $item);)?
    )*};
}

macro_rules! paged {
    ($($name:ident => $items:ident: $item:ty),* $(,)?) => {$(
        impl $crate::rpc::PagedRpc for $name {
            type Item = $item;

            fn page_size(request: &Self::Request) -> i32 {
                request.page_size
            }

            fn set_page_size(request: &mut Self::Request, page_size: i32) {
                request.page_size = page_size;
            }

            fn set_page_token(request: &mut Self::Request, token: String) {
                request.page_token = token;
            }

            fn next_page_token(response: &Self::Response) -> &str {
                &response.next_page_token
            }

            fn into_items(response: Self::Response) -> Vec<Self::Item> {
                response.$items
            }
        }
    )*};
}

/// Generates setters on `Call` for the flattened request fields of an RPC.
///
/// `into` assigns `value.into()`, `some` wraps it in `Some`, `each` collects an
/// iterator into a `Vec` and `mask` builds a `FieldMask` from field paths.
macro_rules! flattened {
    (@setter $field:ident into $ty:ty) => {
        #[doc = concat!("Sets the `", stringify!($field), "` field of the request.")]
        pub fn $field(self, value: impl Into<$ty>) -> Self {
            let value = value.into();
            self.set_field(stringify!($field), move |request| request.$field = value)
        }
    };
    (@setter $field:ident some $ty:ty) => {
        #[doc = concat!("Sets the `", stringify!($field), "` field of the request.")]
        pub fn $field(self, value: impl Into<$ty>) -> Self {
            let value = value.into();
            self.set_field(stringify!($field), move |request| request.$field = Some(value))
        }
    };
    (@setter $field:ident each $ty:ty) => {
        #[doc = concat!("Sets the `", stringify!($field), "` field of the request.")]
        pub fn $field<I, V>(self, values: I) -> Self
        where
            I: IntoIterator<Item = V>,
            V: Into<$ty>,
        {
            let values: Vec<$ty> = values.into_iter().map(Into::into).collect();
            self.set_field(stringify!($field), move |request| request.$field = values)
        }
    };
    (@setter $field:ident mask $ty:ty) => {
        #[doc = concat!("Sets the `", stringify!($field), "` field mask from field paths.")]
        pub fn $field<I, V>(self, paths: I) -> Self
        where
            I: IntoIterator<Item = V>,
            V: Into<String>,
        {
            let mask = <$ty>::from(prost_types::FieldMask {
                paths: paths.into_iter().map(Into::into).collect(),
            });
            self.set_field(stringify!($field), move |request| request.$field = Some(mask))
        }
    };
    ($($name:ident { $($field:ident: $kind:ident $ty:ty),* $(,)? })*) => {$(
        impl<T, M> $crate::call::Call<$name, T, M> {
            $(flattened!(@setter $field $kind $ty);)*
        }
    )*};
}

pub(crate) use {flattened, paged, rpc};
