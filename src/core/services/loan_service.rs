use uuid::Uuid;

use crate::ledger::{Approval, Bank, LoanEntry, Session};

use super::{ServiceError, ServiceResult};

/// Length of the id prefix shown in loan listings.
pub const SHORT_ID_LEN: usize = 8;

/// How the user picked a pending loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanTarget {
    /// Zero-based position in the pending list.
    Position(usize),
    Id(Uuid),
}

pub struct LoanService;

impl LoanService {
    pub fn pending(bank: &Bank) -> &[LoanEntry] {
        bank.loans().entries()
    }

    /// Parses `#N` or a short `N` (1-based position), a full loan id, or a
    /// unique prefix of one. Bare numbers of [`SHORT_ID_LEN`] digits or more
    /// are treated as id prefixes.
    pub fn resolve(bank: &Bank, raw: &str) -> ServiceResult<LoanTarget> {
        let trimmed = raw.trim();
        let (explicit, digits) = match trimmed.strip_prefix('#') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        if explicit || digits.len() < SHORT_ID_LEN {
            if let Ok(number) = digits.parse::<usize>() {
                if number == 0 {
                    return Err(ServiceError::Invalid("Loan positions start at 1".into()));
                }
                return Ok(LoanTarget::Position(number - 1));
            }
        }
        if let Ok(id) = Uuid::parse_str(trimmed) {
            return Ok(LoanTarget::Id(id));
        }

        let needle = trimmed.to_ascii_lowercase();
        let mut matches = Self::pending(bank)
            .iter()
            .filter(|entry| entry.id.to_string().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(LoanTarget::Id(entry.id)),
            (Some(_), Some(_)) => Err(ServiceError::Invalid(format!(
                "Loan reference `{}` is ambiguous",
                trimmed
            ))),
            (None, _) => Err(ServiceError::Invalid(format!(
                "No pending loan matches `{}`",
                trimmed
            ))),
        }
    }

    pub fn approve(bank: &mut Bank, session: &Session, target: LoanTarget) -> ServiceResult<Approval> {
        let approval = match target {
            LoanTarget::Position(position) => bank.approve_at(session, position)?,
            LoanTarget::Id(id) => bank.approve(session, id)?,
        };
        Ok(approval)
    }
}
