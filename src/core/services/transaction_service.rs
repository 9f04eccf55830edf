//! Deposit, withdrawal, and loan-request entry points.

use tracing::info;
use uuid::Uuid;

use crate::ledger::{Bank, LoanReceipt, Session};

use super::{parse_amount, ServiceResult};

pub struct TransactionService;

impl TransactionService {
    pub fn deposit(
        bank: &mut Bank,
        session: &Session,
        amount: &str,
        counterparty: &str,
        purpose: &str,
    ) -> ServiceResult<Uuid> {
        let amount = parse_amount(amount)?;
        let id = bank.deposit(session, amount, counterparty, purpose)?;
        info!(account = session.email(), amount, "deposit recorded");
        Ok(id)
    }

    pub fn withdraw(
        bank: &mut Bank,
        session: &Session,
        amount: &str,
        counterparty: &str,
        purpose: &str,
    ) -> ServiceResult<Uuid> {
        let amount = parse_amount(amount)?;
        let id = bank.withdraw(session, amount, counterparty, purpose)?;
        info!(account = session.email(), amount, "withdrawal recorded");
        Ok(id)
    }

    pub fn request_loan(
        bank: &mut Bank,
        session: &Session,
        amount: &str,
        counterparty: &str,
        purpose: &str,
    ) -> ServiceResult<LoanReceipt> {
        let amount = parse_amount(amount)?;
        let receipt = bank.request_loan(session, amount, counterparty, purpose)?;
        info!(
            account = session.email(),
            amount,
            loan = %receipt.loan_id,
            "loan request queued"
        );
        Ok(receipt)
    }
}
