//! Tracing and logging (shared setup).

/// Environment-driven configuration for the logging layer.
pub mod config;

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
