//! Async service clients.
//!
//! Each method returns a [`Call`](crate::Call) that is configured with the
//! RPC's flattened field setters or a whole request, then sent with `send()`
//! or, for list RPCs, `paginate()`.
mod config;
mod logging;
mod metrics;

pub use config::ConfigServiceV2Client;
pub use logging::LoggingServiceV2Client;
pub use metrics::MetricsServiceV2Client;

/// Declares one method per RPC, each returning a fresh `Call` in the
/// client's mode.
macro_rules! calls {
    ($mode:ty => $($(#[$meta:meta])* $method:ident: $rpc:ty),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $method(&self) -> $crate::call::Call<$rpc, T, $mode> {
                $crate::call::Call::new(self.connection.clone(), self.mode())
            }
        )*
    };
}

pub(crate) use calls;
