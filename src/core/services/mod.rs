//! Session-aware operations used by the shell.
//!
//! Services accept raw user text, parse it the way the form inputs are read,
//! and forward to the ledger types.

pub mod loan_service;
pub mod session_service;
pub mod summary_service;
pub mod transaction_service;

pub use loan_service::{LoanService, LoanTarget, SHORT_ID_LEN};
pub use session_service::SessionService;
pub use summary_service::{Statement, SummaryService};
pub use transaction_service::TransactionService;

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
}

/// Reads an amount field. Blank input counts as zero and is then rejected by
/// the ledger guards.
pub(crate) fn parse_amount(raw: &str) -> ServiceResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| ServiceError::Invalid(format!("`{}` is not a number", trimmed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_accepts_decimals_and_blank() {
        assert_eq!(parse_amount(" 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_amount("").unwrap(), 0.0);
    }

    #[test]
    fn parse_amount_rejects_text() {
        let err = parse_amount("ten").unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(ref message) if message.contains("ten")));
    }
}
