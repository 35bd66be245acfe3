//! # Error Module
//!
//! Domain errors for Minibank, defined with thiserror.

use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
///
/// Every variant is recoverable: the shell reports it to the user and the
/// menu continues. Nothing here terminates the process.
#[derive(Debug, Error)]
pub enum LedgerError {
    // === Authentication errors ===
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists: {0}")]
    DuplicateUser(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    // === Account errors ===
    #[error("Account not found: {0}")]
    AccountNotFound(u32),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    // === Amount errors ===
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),
}

/// Result type alias with LedgerError
pub type LedgerResult<T> = Result<T, LedgerError>;

impl LedgerError {
    /// Check for insufficient funds
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, LedgerError::InsufficientFunds { .. })
    }

    /// Check for an authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidCredentials | LedgerError::DuplicateUser(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = LedgerError::InsufficientFunds {
            requested: dec!(200),
            available: dec!(150),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 200, available 150"
        );

        let err = LedgerError::AccountNotFound(1001);
        assert_eq!(err.to_string(), "Account not found: 1001");

        let err = LedgerError::InvalidAmount(dec!(-5));
        assert_eq!(err.to_string(), "Invalid amount: -5");
    }

    #[test]
    fn test_error_checks() {
        let err = LedgerError::InsufficientFunds {
            requested: dec!(100),
            available: dec!(50),
        };
        assert!(err.is_insufficient_funds());

        assert!(LedgerError::InvalidCredentials.is_auth_error());
        assert!(LedgerError::DuplicateUser("alice".to_string()).is_auth_error());
        assert!(!LedgerError::AccountNotFound(1000).is_auth_error());
    }
}
