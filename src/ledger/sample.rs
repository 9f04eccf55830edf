//! Fixed demo records loaded at start-up.

use chrono::{DateTime, Utc};

use super::{
    account::Account,
    bank::Bank,
    loan::{LoanEntry, LoanLedger},
    transaction::{Transaction, TransactionKind},
};

pub const SAMPLE_PIN: u32 = 2222;

const FALLBACK_TIMESTAMP: &str = "2020-01-01T00:00:00Z";
const LOAN_TIMESTAMP: &str = "2020-09-11T00:00:00Z";

struct Seed {
    owner: &'static str,
    email: &'static str,
    currency: &'static str,
    locale: &'static str,
    movements: &'static [f64],
    counterparties: &'static [&'static str],
    purposes: &'static [&'static str],
    dates: &'static [&'static str],
}

const SEEDS: [Seed; 3] = [
    Seed {
        owner: "Dikshan Gurung",
        email: "dxngrg2058@gmail.com",
        currency: "EUR",
        locale: "pt-PT",
        movements: &[200.0, 450.0, -400.0],
        counterparties: &["Sakar Adhikari", "Satya Dahal", "Kushal Pariyar"],
        purposes: &["College Fee", "Khaja", "Travel"],
        dates: &[
            "2022-12-16T17:01:17.194Z",
            "2022-12-11T23:36:17.929Z",
            "2020-07-12T10:51:36.790Z",
        ],
    },
    Seed {
        owner: "Satya Prakash Dahal",
        email: "dxngrg2048@gmail.com",
        currency: "USD",
        locale: "en-US",
        movements: &[100.0, 250.0, -100.0],
        counterparties: &["Dikshan Gurung", "Satya Dahal", "Kushal Pariyar"],
        purposes: &["College Fee", "Khaja", "Travel"],
        dates: &[
            "2019-11-01T13:15:33.035Z",
            "2019-11-30T09:48:16.867Z",
            "2019-12-25T06:04:23.907Z",
        ],
    },
    Seed {
        owner: "Kushal Pariyar",
        email: "dxngrg2038@gmail.com",
        currency: "NPR",
        locale: "en-US",
        movements: &[200.0, 450.0, -400.0, 3000.0, -650.0, -130.0, 70.0, 1300.0],
        counterparties: &[],
        purposes: &["College Fee", "Khaja", "Travel"],
        dates: &[],
    },
];

const LOANS: [(&str, &str, f64); 4] = [
    ("Satya Dahal", "Khaja", 400.0),
    ("Kushal Pariyar", "Khaja Naan house", 400.0),
    ("Sakar Adhikari", "Khaja Naan house", 400.0),
    ("Sushant Poudel", "Khaja Naan house", 200.0),
];

/// Builds the demo bank: three accounts sharing PIN [`SAMPLE_PIN`] and four
/// pending loans.
///
/// Seed rows missing a label fall back to `Unknown`/empty and rows missing a
/// date use 2020-01-01.
pub fn sample_bank() -> Bank {
    let accounts = SEEDS.iter().map(seed_account).collect();
    let requested_at = timestamp(LOAN_TIMESTAMP);
    let mut loans = LoanLedger::new();
    for (counterparty, purpose, amount) in LOANS {
        loans.push(LoanEntry::at(counterparty, purpose, amount, requested_at));
    }
    Bank::new(accounts, loans)
}

fn seed_account(seed: &Seed) -> Account {
    let history = seed.movements.iter().enumerate().map(|(idx, amount)| {
        let counterparty = seed.counterparties.get(idx).copied().unwrap_or("Unknown");
        let purpose = seed.purposes.get(idx).copied().unwrap_or_default();
        let when = seed
            .dates
            .get(idx)
            .map(|raw| timestamp(raw))
            .unwrap_or_else(|| timestamp(FALLBACK_TIMESTAMP));
        Transaction::at(*amount, counterparty, purpose, TransactionKind::Opening, when)
    });
    Account::new(seed.email, SAMPLE_PIN, seed.owner)
        .with_currency(seed.currency, seed.locale)
        .with_history(history)
}

fn timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap_or(DateTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_balances_match_seed_movements() {
        let bank = sample_bank();
        let balances: Vec<f64> = bank.accounts().iter().map(Account::balance).collect();
        assert_eq!(balances, vec![250.0, 250.0, 3840.0]);
        assert_eq!(bank.loans().len(), 4);
    }

    #[test]
    fn short_seed_rows_are_padded() {
        let bank = sample_bank();
        let kushal = &bank.accounts()[2];
        assert_eq!(kushal.transactions().len(), 8);
        let last = kushal.transactions().last().unwrap();
        assert_eq!(last.counterparty, "Unknown");
        assert_eq!(last.purpose, "");
        assert_eq!(last.timestamp, timestamp(FALLBACK_TIMESTAMP));
    }

    #[test]
    fn seed_dates_are_parsed() {
        let bank = sample_bank();
        let first = &bank.accounts()[0].transactions()[0];
        assert_eq!(first.timestamp.to_rfc3339(), "2022-12-16T17:01:17.194+00:00");
    }
}
