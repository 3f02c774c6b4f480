//! Optional log output for hosts that have no `tracing` setup of their own.
//!
//! Render, destroy and every value change emit `tracing` events under
//! `thermo_chart::*` targets. Nothing is printed until a subscriber is installed,
//! either by the host or through `init_default_tracing`.

/// Filter used when `RUST_LOG` is unset or unparsable.
#[cfg(feature = "telemetry")]
const FALLBACK_FILTER: &str = "info";

/// Installs a global compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Returns whether this call installed it: `false` without the `telemetry`
/// feature, or when some subscriber is already in place.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
