use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::LedgerError;

use super::{
    account::{Account, LoanReceipt},
    loan::{LoanEntry, LoanLedger},
};

/// Proof of a successful login. Every account-scoped operation takes one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    email: String,
}

impl Session {
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Outcome of approving a pending loan.
#[derive(Debug, Clone, PartialEq)]
pub struct Approval {
    pub loan: LoanEntry,
    pub transaction_id: Uuid,
}

/// The fixed set of accounts plus the shared loan ledger.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    accounts: Vec<Account>,
    loans: LoanLedger,
}

impl Bank {
    pub fn new(accounts: Vec<Account>, loans: LoanLedger) -> Self {
        Self { accounts, loans }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn loans(&self) -> &LoanLedger {
        &self.loans
    }

    pub fn login(&self, email: &str, pin: u32) -> Result<Session, LedgerError> {
        let email = email.trim();
        match self.find(email) {
            Some(account) if account.pin_matches(pin) => {
                info!(account = %account.email, "login succeeded");
                Ok(Session {
                    email: account.email.clone(),
                })
            }
            _ => {
                warn!(email, "login rejected");
                Err(LedgerError::InvalidCredentials)
            }
        }
    }

    pub fn account(&self, session: &Session) -> Result<&Account, LedgerError> {
        self.find(&session.email)
            .ok_or_else(|| LedgerError::AccountNotFound(session.email.clone()))
    }

    pub fn account_mut(&mut self, session: &Session) -> Result<&mut Account, LedgerError> {
        self.accounts
            .iter_mut()
            .find(|account| account.email == session.email)
            .ok_or_else(|| LedgerError::AccountNotFound(session.email.clone()))
    }

    pub fn deposit(
        &mut self,
        session: &Session,
        amount: f64,
        counterparty: &str,
        purpose: &str,
    ) -> Result<Uuid, LedgerError> {
        self.account_mut(session)?
            .record_deposit(amount, counterparty, purpose)
    }

    pub fn withdraw(
        &mut self,
        session: &Session,
        amount: f64,
        counterparty: &str,
        purpose: &str,
    ) -> Result<Uuid, LedgerError> {
        self.account_mut(session)?
            .record_withdrawal(amount, counterparty, purpose)
    }

    pub fn request_loan(
        &mut self,
        session: &Session,
        amount: f64,
        counterparty: &str,
        purpose: &str,
    ) -> Result<LoanReceipt, LedgerError> {
        let Self { accounts, loans } = self;
        let account = accounts
            .iter_mut()
            .find(|account| account.email == session.email)
            .ok_or_else(|| LedgerError::AccountNotFound(session.email.clone()))?;
        account.record_loan_request(loans, amount, counterparty, purpose)
    }

    /// Approves the pending loan at zero-based `position` into the session's
    /// account.
    pub fn approve_at(&mut self, session: &Session, position: usize) -> Result<Approval, LedgerError> {
        // Resolve the account first so a bad session cannot drop a loan.
        self.account(session)?;
        let loan = self.loans.take_at(position)?;
        self.credit(session, loan)
    }

    pub fn approve(&mut self, session: &Session, loan_id: Uuid) -> Result<Approval, LedgerError> {
        self.account(session)?;
        let loan = self.loans.take(loan_id)?;
        self.credit(session, loan)
    }

    fn credit(&mut self, session: &Session, loan: LoanEntry) -> Result<Approval, LedgerError> {
        let transaction_id = self.account_mut(session)?.credit_loan(&loan);
        info!(
            account = %session.email,
            loan = %loan.id,
            amount = loan.amount,
            "loan approved"
        );
        Ok(Approval {
            loan,
            transaction_id,
        })
    }

    fn find(&self, email: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.email == email)
    }
}
