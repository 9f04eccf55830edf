//! Derived figures for a sequence of movements.
//!
//! Nothing here is stored authoritatively; callers recompute after every
//! mutation. Amounts are plain `f64` with no rounding.

use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// Sum of all positive movements.
pub fn compute_income(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.is_deposit())
        .fold(0.0, |acc, txn| acc + txn.amount)
}

/// Absolute value of the sum of all negative movements.
pub fn compute_expense(transactions: &[Transaction]) -> f64 {
    negative_total(transactions).abs()
}

/// Income plus the (negative) outgoing total.
pub fn compute_saving(transactions: &[Transaction]) -> f64 {
    compute_income(transactions) + negative_total(transactions)
}

/// Sum of every movement.
pub fn compute_balance(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .fold(0.0, |acc, txn| acc + txn.amount)
}

fn negative_total(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.is_withdrawal())
        .fold(0.0, |acc, txn| acc + txn.amount)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub income: f64,
    pub expense: f64,
    pub saving: f64,
    pub balance: f64,
}

impl Summary {
    pub fn of(transactions: &[Transaction]) -> Self {
        Self {
            income: compute_income(transactions),
            expense: compute_expense(transactions),
            saving: compute_saving(transactions),
            balance: compute_balance(transactions),
        }
    }
}
