//! Diagnostics emitted by the client itself.
//!
//! The macros forward to `tracing` when the `internal-logs` feature is on, with
//! the crate name as target. Test builds also print each event to stdout,
//! which shows up when tests run with `--nocapture`.
//!
//! Every event carries a `name` and at least one `key = value` attribute,
//! where each value implements both `Display` and `tracing::Value`:
//!
//! ```ignore
//! logging_debug!(name: "GrpcChannel.Built", endpoint = endpoint.as_str());
//! ```

macro_rules! logging_event {
    ($level:ident, $label:literal, $name:expr, $($key:ident = $value:expr),+) => {
        #[cfg(feature = "internal-logs")]
        {
            tracing::event!(
                name: $name,
                target: env!("CARGO_PKG_NAME"),
                tracing::Level::$level,
                name = $name,
                $($key = $value),+
            );
        }

        #[cfg(test)]
        {
            print!("{}: name={}", $label, $name);
            $(
                print!(", {}={}", stringify!($key), $value);
            )+
            println!();
        }

        #[cfg(all(not(feature = "internal-logs"), not(test)))]
        {
            let _ = (&$name, $(&$value),+);
        }
    };
}

macro_rules! logging_warn {
    (name: $name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        $crate::internal_logging::logging_event!(WARN, "logging_warn", $name, $($key = $value),+)
    };
}

macro_rules! logging_debug {
    (name: $name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        $crate::internal_logging::logging_event!(DEBUG, "logging_debug", $name, $($key = $value),+)
    };
}

pub(crate) use logging_debug;
pub(crate) use logging_event;
pub(crate) use logging_warn;

#[cfg(test)]
mod tests {
    #[test]
    fn events_take_a_name_and_attributes() {
        let endpoint = String::from("logging.googleapis.com");
        logging_debug!(name: "GrpcChannel.Built", endpoint = endpoint.as_str());
        logging_warn!(
            name: "Retry.GaveUp",
            rpc = "WriteLogEntries",
            attempts = 3,
        );
        assert_eq!(endpoint, "logging.googleapis.com");
    }
}
