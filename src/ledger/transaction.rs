use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single signed movement on an account ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    /// Positive for money in, negative for money out.
    pub amount: f64,
    pub counterparty: String,
    pub purpose: String,
    pub timestamp: DateTime<Utc>,
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn new(
        amount: f64,
        counterparty: impl Into<String>,
        purpose: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self::at(amount, counterparty, purpose, kind, Utc::now())
    }

    pub fn at(
        amount: f64,
        counterparty: impl Into<String>,
        purpose: impl Into<String>,
        kind: TransactionKind,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            counterparty: counterparty.into(),
            purpose: purpose.into(),
            timestamp,
            kind,
        }
    }

    pub fn is_deposit(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount < 0.0
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    /// Seeded history present when the bank starts.
    Opening,
    Deposit,
    Withdrawal,
    /// Money sent out to a borrower; mirrored by a pending loan entry.
    LoanRequest,
    /// An approved loan credited back to the approving account.
    LoanDisbursement,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Opening => "Opening",
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::LoanRequest => "Loan request",
            TransactionKind::LoanDisbursement => "Loan approved",
        }
    }
}
