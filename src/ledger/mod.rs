//! Account ledgers, derived balances, and the shared loan queue.

pub mod account;
pub mod balance;
pub mod bank;
pub mod loan;
pub mod sample;
pub mod transaction;

pub use account::{Account, LoanReceipt, COLLATERAL_RATIO};
pub use balance::{compute_balance, compute_expense, compute_income, compute_saving, Summary};
pub use bank::{Approval, Bank, Session};
pub use loan::{LoanEntry, LoanLedger};
pub use sample::{sample_bank, SAMPLE_PIN};
pub use transaction::{Transaction, TransactionKind};
