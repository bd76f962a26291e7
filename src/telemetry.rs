//! Telemetry helpers for applications embedding `langscope`.
//!
//! Nothing is installed unless a host calls `init_default_tracing`. Scene
//! builders and statistics emit `debug!`/`trace!` events under the `langscope`
//! target; filter them with `LANGSCOPE_LOG=langscope::core=trace` or `RUST_LOG`.

/// Environment variable read first for the subscriber filter, before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "LANGSCOPE_LOG";

/// Filter used when neither `LANGSCOPE_LOG` nor `RUST_LOG` parses.
pub const DEFAULT_FILTER: &str = "langscope=info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when nothing is initialized (feature disabled) or when the
/// host application already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
