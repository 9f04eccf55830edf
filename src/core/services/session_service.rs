use crate::errors::LedgerError;
use crate::ledger::{Bank, Session};

use super::ServiceResult;

pub struct SessionService;

impl SessionService {
    /// Matches `email` and the numeric `pin` text against the bank's records.
    /// A PIN that is not a number can never match.
    pub fn login(bank: &Bank, email: &str, pin: &str) -> ServiceResult<Session> {
        let pin = pin
            .trim()
            .parse::<u32>()
            .map_err(|_| LedgerError::InvalidCredentials)?;
        Ok(bank.login(email, pin)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::ServiceError;
    use crate::ledger::sample_bank;

    #[test]
    fn login_with_sample_credentials() {
        let bank = sample_bank();
        let session = SessionService::login(&bank, "dxngrg2058@gmail.com", "2222").unwrap();
        assert_eq!(session.email(), "dxngrg2058@gmail.com");
    }

    #[test]
    fn non_numeric_pin_is_invalid_credentials() {
        let bank = sample_bank();
        let err = SessionService::login(&bank, "dxngrg2058@gmail.com", "abcd").unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Ledger(LedgerError::InvalidCredentials)
        ));
    }
}
