use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::LedgerError;

use super::{
    balance::{compute_balance, Summary},
    loan::{LoanEntry, LoanLedger},
    transaction::{Transaction, TransactionKind},
};

/// Fraction of a requested loan that a single past movement must cover.
pub const COLLATERAL_RATIO: f64 = 0.1;

/// A bank account with an append-only ledger of movements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    #[serde(skip_serializing, default)]
    pub pin: u32,
    pub owner: String,
    pub currency: String,
    pub locale: String,
    transactions: Vec<Transaction>,
    balance: f64,
}

/// Identifiers produced by an accepted loan request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanReceipt {
    pub transaction_id: Uuid,
    pub loan_id: Uuid,
}

impl Account {
    pub fn new(email: impl Into<String>, pin: u32, owner: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            pin,
            owner: owner.into(),
            currency: "NPR".into(),
            locale: "en-US".into(),
            transactions: Vec::new(),
            balance: 0.0,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>, locale: impl Into<String>) -> Self {
        self.currency = currency.into();
        self.locale = locale.into();
        self
    }

    /// Seeds history; used for the fixed start-up records.
    pub fn with_history(mut self, history: impl IntoIterator<Item = Transaction>) -> Self {
        self.transactions.extend(history);
        self.recompute();
        self
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Balance from the most recent recomputation.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.transactions)
    }

    pub fn pin_matches(&self, pin: u32) -> bool {
        self.pin == pin
    }

    /// Appends without any guard and refreshes the cached balance.
    pub fn append_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        debug!(
            account = %self.email,
            amount = transaction.amount,
            kind = transaction.kind.label(),
            "appending transaction"
        );
        self.transactions.push(transaction);
        self.recompute();
        id
    }

    pub fn record_deposit(
        &mut self,
        amount: f64,
        counterparty: &str,
        purpose: &str,
    ) -> Result<Uuid, LedgerError> {
        ensure_positive(amount)?;
        Ok(self.append_transaction(Transaction::new(
            amount,
            counterparty,
            purpose,
            TransactionKind::Deposit,
        )))
    }

    pub fn record_withdrawal(
        &mut self,
        amount: f64,
        counterparty: &str,
        purpose: &str,
    ) -> Result<Uuid, LedgerError> {
        ensure_positive(amount)?;
        if amount > self.balance {
            warn!(account = %self.email, amount, balance = self.balance, "withdrawal exceeds balance");
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        Ok(self.append_transaction(Transaction::new(
            -amount,
            counterparty,
            purpose,
            TransactionKind::Withdrawal,
        )))
    }

    /// Sends `amount` out as a loan and queues it on the shared loan ledger.
    ///
    /// Accepted only when some single past movement is at least
    /// [`COLLATERAL_RATIO`] of the requested amount. The cumulative balance is
    /// not consulted.
    pub fn record_loan_request(
        &mut self,
        loans: &mut LoanLedger,
        amount: f64,
        counterparty: &str,
        purpose: &str,
    ) -> Result<LoanReceipt, LedgerError> {
        ensure_positive(amount)?;
        let required = COLLATERAL_RATIO * amount;
        if !self.has_collateral_for(amount) {
            warn!(account = %self.email, amount, required, "loan request lacks collateral");
            return Err(LedgerError::InsufficientCollateral {
                requested: amount,
                required,
            });
        }
        let transaction_id = self.append_transaction(Transaction::new(
            -amount,
            counterparty,
            purpose,
            TransactionKind::LoanRequest,
        ));
        let loan_id = loans.push(LoanEntry::new(counterparty, purpose, amount));
        Ok(LoanReceipt {
            transaction_id,
            loan_id,
        })
    }

    pub fn has_collateral_for(&self, amount: f64) -> bool {
        let required = COLLATERAL_RATIO * amount;
        self.transactions.iter().any(|txn| txn.amount >= required)
    }

    /// Credits an approved loan entry to this account.
    pub fn credit_loan(&mut self, entry: &LoanEntry) -> Uuid {
        self.append_transaction(Transaction::new(
            entry.amount,
            entry.counterparty.clone(),
            entry.purpose.clone(),
            TransactionKind::LoanDisbursement,
        ))
    }

    fn recompute(&mut self) {
        self.balance = compute_balance(&self.transactions);
    }
}

fn ensure_positive(amount: f64) -> Result<(), LedgerError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(LedgerError::NonPositiveAmount(amount))
    }
}
