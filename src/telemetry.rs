//! Tracing setup for hosts embedding `chartspec`.
//!
//! The pipeline only emits `tracing` events; installing a subscriber is left
//! to the host. Headless tools and tests can opt into the default one here.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive` (for example `"chartspec=debug"`).
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing(default_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_directive;
        false
    }
}
