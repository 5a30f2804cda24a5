//! Tracing subscriber setup for binaries and examples.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Verbosity is taken from `RUST_LOG`, so for example
/// `RUST_LOG=order_registry=debug` surfaces per-order decisions while the
/// default stays quiet.
///
/// # Notes
/// Call once at startup. A second call panics because the global subscriber
/// is already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
