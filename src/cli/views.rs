//! Row models for the movement and loan lists.

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::core::services::SHORT_ID_LEN;
use crate::currency::{format_money, format_movement_date};
use crate::ledger::{Account, LoanEntry, Transaction};

/// Display order for an account's movements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ledger order, newest entry on top.
    #[default]
    NewestFirst,
    /// Amount order, largest on top.
    ByAmount,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::NewestFirst => SortOrder::ByAmount,
            SortOrder::ByAmount => SortOrder::NewestFirst,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            SortOrder::NewestFirst => "newest first",
            SortOrder::ByAmount => "by amount, largest first",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementRow {
    pub number: usize,
    pub direction: &'static str,
    pub description: String,
    pub when: String,
    pub amount: String,
}

impl MovementRow {
    pub fn cells(&self) -> Vec<String> {
        vec![
            format!("{} {}", self.number, self.direction),
            self.description.clone(),
            self.when.clone(),
            self.amount.clone(),
        ]
    }
}

/// Builds the rows shown for `account`.
///
/// The sequence is chronological, or ascending by amount when sorted, and is
/// shown last entry first. Row numbers are 1-based positions in the sequence,
/// so both lists count down.
pub fn movement_rows(
    account: &Account,
    order: SortOrder,
    config: &Config,
    now: DateTime<Utc>,
) -> Vec<MovementRow> {
    let mut sequence: Vec<&Transaction> = account.transactions().iter().collect();
    if order == SortOrder::ByAmount {
        sequence.sort_by(|a, b| a.amount.total_cmp(&b.amount));
    }

    sequence
        .iter()
        .enumerate()
        .map(|(idx, txn)| MovementRow {
            number: idx + 1,
            direction: if txn.is_withdrawal() { "Withdraw" } else { "Deposit" },
            description: describe(&txn.counterparty, &txn.purpose),
            when: format_movement_date(txn.timestamp, now, config.recent_days),
            amount: format_money(&config.currency_label, txn.amount),
        })
        .rev()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanRow {
    pub position: usize,
    pub short_id: String,
    pub description: String,
    pub requested: String,
    pub amount: String,
}

impl LoanRow {
    pub fn cells(&self) -> Vec<String> {
        vec![
            format!("#{}", self.position),
            self.short_id.clone(),
            self.description.clone(),
            self.requested.clone(),
            self.amount.clone(),
        ]
    }
}

/// Pending loans in queue order, oldest first.
pub fn loan_rows(loans: &[LoanEntry], config: &Config) -> Vec<LoanRow> {
    loans
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let id = entry.id.to_string();
            LoanRow {
                position: idx + 1,
                short_id: id[..SHORT_ID_LEN].to_string(),
                description: describe(&entry.counterparty, &entry.purpose),
                requested: entry.requested_at.format("%Y/%m/%d").to_string(),
                amount: format_money(&config.currency_label, entry.amount),
            }
        })
        .collect()
}

fn describe(counterparty: &str, purpose: &str) -> String {
    if purpose.is_empty() {
        counterparty.to_string()
    } else {
        format!("{}, {}", counterparty, purpose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{sample_bank, TransactionKind};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn account() -> Account {
        let now = now();
        Account::new("t@example.com", 1, "T").with_history(vec![
            Transaction::at(200.0, "Sakar", "Fee", TransactionKind::Opening, now - Duration::days(30)),
            Transaction::at(450.0, "Satya", "Khaja", TransactionKind::Opening, now - Duration::days(1)),
            Transaction::at(-400.0, "Kushal", "Travel", TransactionKind::Opening, now),
        ])
    }

    #[test]
    fn default_order_is_newest_first() {
        let rows = movement_rows(&account(), SortOrder::NewestFirst, &Config::default(), now());
        let numbers: Vec<usize> = rows.iter().map(|row| row.number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
        assert_eq!(rows[0].direction, "Withdraw");
        assert_eq!(rows[0].amount, "Nrs. 400");
        assert_eq!(rows[0].when, "Today");
        assert_eq!(rows[1].when, "Yesterday");
        assert_eq!(rows[2].when, "2024/02/14");
        assert_eq!(rows[2].description, "Sakar, Fee");
    }

    #[test]
    fn sorted_order_puts_largest_amount_on_top() {
        let rows = movement_rows(
            &account(),
            SortOrder::ByAmount,
            &Config::default(),
            now(),
        );
        let amounts: Vec<&str> = rows.iter().map(|row| row.amount.as_str()).collect();
        assert_eq!(amounts, vec!["Nrs. 450", "Nrs. 200", "Nrs. 400"]);
        let numbers: Vec<usize> = rows.iter().map(|row| row.number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
        assert_eq!(rows[0].direction, "Deposit");
        assert_eq!(rows[2].direction, "Withdraw");
    }

    #[test]
    fn toggle_flips_between_orders() {
        assert_eq!(SortOrder::default().toggled(), SortOrder::ByAmount);
        assert_eq!(SortOrder::ByAmount.toggled(), SortOrder::NewestFirst);
    }

    #[test]
    fn loan_rows_keep_queue_order() {
        let bank = sample_bank();
        let rows = loan_rows(bank.loans().entries(), &Config::default());
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].description, "Satya Dahal, Khaja");
        assert_eq!(rows[3].amount, "Nrs. 200");
        assert_eq!(rows[3].requested, "2020/09/11");
        assert_eq!(rows[0].short_id.len(), SHORT_ID_LEN);
    }
}
