use thiserror::Error;
use uuid::Uuid;

/// Error type for rejected ledger operations. A returned error always means
/// the ledger was left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("Amount must be a positive number (got {0})")]
    NonPositiveAmount(f64),
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: f64, available: f64 },
    #[error(
        "Loan of {requested} needs at least one past movement of {required} or more"
    )]
    InsufficientCollateral { requested: f64, required: f64 },
    #[error("No pending loan at position {} ({len} pending)", .position + 1)]
    /// `position` is zero-based; the message shows it one-based.
    LoanPositionOutOfRange { position: usize, len: usize },
    #[error("Pending loan not found: {0}")]
    LoanNotFound(Uuid),
    #[error("Invalid email or PIN")]
    InvalidCredentials,
    #[error("Account not found: {0}")]
    AccountNotFound(String),
}
