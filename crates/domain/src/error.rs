//! Unified error types for the domain layer
//!
//! Value objects return `DomainError` from their constructors so adapters can
//! surface invariant violations without resorting to String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl DomainError {
    /// Creates a validation error for invariant violations.
    ///
    /// Use this when a value cannot be constructed:
    /// - Required text is empty or blank
    /// - Values are outside allowed lengths
    /// - Collections that must hold at least one element are empty
    ///
    /// # Example
    /// ```ignore
    /// if entries.is_empty() {
    ///     return Err(DomainError::validation("Greeting catalog cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("greeting cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: greeting cannot be empty");
    }

    #[test]
    fn test_constraint_error() {
        let err = DomainError::constraint("catalog holds too many greetings");
        assert!(matches!(err, DomainError::Constraint(_)));
        assert_eq!(
            err.to_string(),
            "Constraint violation: catalog holds too many greetings"
        );
    }
}
