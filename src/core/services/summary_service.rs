use serde::Serialize;

use crate::ledger::{Bank, Session, Summary, Transaction};

use super::ServiceResult;

/// Serializable snapshot of one account, used by `export`.
#[derive(Debug, Clone, Serialize)]
pub struct Statement<'a> {
    pub owner: &'a str,
    pub email: &'a str,
    pub currency: &'a str,
    pub summary: Summary,
    pub transactions: &'a [Transaction],
}

pub struct SummaryService;

impl SummaryService {
    pub fn summary(bank: &Bank, session: &Session) -> ServiceResult<Summary> {
        Ok(bank.account(session)?.summary())
    }

    pub fn statement<'a>(bank: &'a Bank, session: &Session) -> ServiceResult<Statement<'a>> {
        let account = bank.account(session)?;
        Ok(Statement {
            owner: &account.owner,
            email: &account.email,
            currency: &account.currency,
            summary: account.summary(),
            transactions: account.transactions(),
        })
    }
}
