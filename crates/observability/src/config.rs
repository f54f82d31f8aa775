//! Environment-driven logging configuration.

use core::str::FromStr;

use keystone_core::{DomainError, DomainResult};

/// Filter directives (same syntax as `RUST_LOG`).
pub const FILTER_ENV: &str = "RUST_LOG";
/// Output format selector: `json`, `pretty` or `compact`.
pub const FORMAT_ENV: &str = "KEYSTONE_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// How log lines are rendered.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Multi-line, human oriented.
    Pretty,
    /// Single-line, human oriented.
    Compact,
}

impl FromStr for LogFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(DomainError::validation(format!("unknown log format: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read [`FILTER_ENV`] and [`FORMAT_ENV`] from the process environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset or blank keys keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let present = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());

        let filter = present(FILTER_ENV).unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = match present(FORMAT_ENV) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self { filter, format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[
            (FILTER_ENV, "keystone_people=debug"),
            (FORMAT_ENV, "Compact"),
        ]))
        .unwrap();

        assert_eq!(config.filter, "keystone_people=debug");
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[
            (FILTER_ENV, "   "),
            (FORMAT_ENV, ""),
        ]))
        .unwrap();

        assert_eq!(config, ObservabilityConfig::default());
    }

    #[test]
    fn rejects_unknown_format() {
        let err = ObservabilityConfig::from_lookup(lookup_from(&[(FORMAT_ENV, "xml")]))
            .unwrap_err();

        match err {
            DomainError::Validation(msg) if msg.contains("xml") => {}
            other => panic!("Expected Validation error for unknown format, got {other:?}"),
        }
    }

    #[test]
    fn parses_formats_case_insensitively() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" pretty ".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    }
}
