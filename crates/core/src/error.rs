//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// invariants). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A debit was requested for more than the account holds.
    ///
    /// The message is part of the contract: callers match on the exact text
    /// `"Insufficient Funds"`.
    #[error("Insufficient Funds")]
    InsufficientFunds,

    /// A value failed validation (e.g. a non-positive amount).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn insufficient_funds() -> Self {
        Self::InsufficientFunds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_funds_displays_fixed_message() {
        assert_eq!(
            DomainError::insufficient_funds().to_string(),
            "Insufficient Funds"
        );
    }

    #[test]
    fn validation_carries_message() {
        let err = DomainError::validation("amount must be positive");
        assert_eq!(err.to_string(), "validation failed: amount must be positive");
    }
}
