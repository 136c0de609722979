//! Opt-in tracing bootstrap for hosts that do not bring their own subscriber.
//!
//! The library itself only emits `tracing` events; nothing is installed
//! globally unless the host asks for it here.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`, falling back
/// to the `info` level.
///
/// Does nothing unless the `telemetry` feature is enabled. Returns `true`
/// when this call installed the global subscriber, `false` when the feature
/// is off or the host already set one.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_subscriber()
}

#[cfg(feature = "telemetry")]
fn init_subscriber() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(not(feature = "telemetry"))]
fn init_subscriber() -> bool {
    false
}
