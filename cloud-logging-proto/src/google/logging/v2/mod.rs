//! Messages of the `google.logging.v2` package.
//!
//! The messages are split by the proto file that defines them upstream but are
//! all exported from this one module, as generated code would be.

mod entry;
mod logging;
mod logging_config;
mod logging_metrics;

pub use entry::*;
pub use logging::*;
pub use logging_config::*;
pub use logging_metrics::*;
