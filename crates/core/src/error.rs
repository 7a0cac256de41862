//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Two families of failure exist in the stock domain: the caller passed a
/// malformed value (`Validation`), or the request was well-formed but the
/// current state cannot satisfy it (`InvariantViolation`). Crates with richer
/// error enums convert into this one at their boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty identifier, non-positive amount).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant would be violated by the requested change.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// True when the caller may retry with other parameters or after other
    /// state changes.
    pub fn is_state_conflict(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_family_prefix() {
        assert_eq!(
            DomainError::validation("amount must be positive").to_string(),
            "validation failed: amount must be positive"
        );
        assert_eq!(
            DomainError::invariant("reserved exceeds on hand").to_string(),
            "invariant violated: reserved exceeds on hand"
        );
    }

    #[test]
    fn only_invariant_violations_are_state_conflicts() {
        assert!(DomainError::invariant("x").is_state_conflict());
        assert!(!DomainError::validation("x").is_state_conflict());
    }
}
