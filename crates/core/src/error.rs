//! Domain error model.

use thiserror::Error;

/// Result type used across the workspace.
pub type DomainResult<T> = Result<T, DomainError>;

/// Base error for every fallible operation in the workspace.
///
/// Failures are deterministic and surfaced at the call that detected them;
/// nothing here is retried or recovered internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was never supplied before construction.
    #[error("{field} cannot be null")]
    MissingField { field: &'static str },

    /// A numeric value fell outside its permitted range.
    #[error("{0}")]
    OutOfRange(String),

    /// A required argument was absent.
    #[error("{argument} cannot be null")]
    NullArgument { argument: &'static str },

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    pub fn null_argument(argument: &'static str) -> Self {
        Self::NullArgument { argument }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = DomainError::missing_field("firstName");
        assert_eq!(err.to_string(), "firstName cannot be null");
        assert_eq!(err, DomainError::MissingField { field: "firstName" });
    }

    #[test]
    fn out_of_range_keeps_message_verbatim() {
        let err = DomainError::out_of_range("age cannot be negative");
        assert_eq!(err.to_string(), "age cannot be negative");
    }

    #[test]
    fn null_argument_names_the_argument() {
        let err = DomainError::null_argument("delimiter");
        assert_eq!(err.to_string(), "delimiter cannot be null");
    }

    #[test]
    fn validation_is_prefixed() {
        let err = DomainError::validation("unknown log format: xml");
        assert_eq!(err.to_string(), "validation failed: unknown log format: xml");
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_std_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_std_error(&DomainError::missing_field("lastName"));
    }
}
