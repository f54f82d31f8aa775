//! Tracing/logging initialization.
//!
//! Installs a `tracing-subscriber` fmt layer, filtered by `EnvFilter` and
//! rendered in the configured [`LogFormat`].

use tracing_subscriber::EnvFilter;

use keystone_core::{DomainError, DomainResult};

use crate::config::{LogFormat, ObservabilityConfig};

/// Initialize tracing/logging from the process environment.
///
/// Safe to call multiple times (subsequent calls are no-ops). An invalid
/// environment falls back to the default config and reports it once the
/// subscriber is up.
pub fn init() {
    match ObservabilityConfig::from_env() {
        Ok(config) => {
            if let Err(err) = init_with(&config) {
                let _ = init_with(&ObservabilityConfig::default());
                ::tracing::warn!(error = %err, "observability_config_invalid using=defaults");
            }
        }
        Err(err) => {
            let _ = init_with(&ObservabilityConfig::default());
            ::tracing::warn!(error = %err, "observability_config_invalid using=defaults");
        }
    }
}

/// Initialize tracing/logging with an explicit config.
///
/// Returns `Validation` when the filter directives do not parse. If a global
/// subscriber is already installed this is a no-op.
pub fn init_with(config: &ObservabilityConfig) -> DomainResult<()> {
    let filter = build_filter(&config.filter)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    Ok(())
}

fn build_filter(directives: &str) -> DomainResult<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|e| DomainError::validation(format!("invalid log filter {directives:?}: {e}")))
}
