mod common;

use bank_core::errors::LedgerError;
use bank_core::ledger::{
    compute_balance, compute_expense, compute_income, compute_saving, Account, Transaction,
    TransactionKind,
};
use common::{amounts, bank_with_session, DIKSHAN, KUSHAL};

fn history(values: &[f64]) -> Vec<Transaction> {
    values
        .iter()
        .map(|amount| {
            let kind = if *amount < 0.0 {
                TransactionKind::Withdrawal
            } else {
                TransactionKind::Deposit
            };
            Transaction::new(*amount, "Someone", "Something", kind)
        })
        .collect()
}

#[test]
fn saving_equals_income_minus_expense() {
    let txns = history(&[200.0, 450.0, -400.0, 3000.0, -650.0, -130.0, 70.0, 1300.0]);
    let income = compute_income(&txns);
    let expense = compute_expense(&txns);
    assert_eq!(income, 5020.0);
    assert_eq!(expense, 1180.0);
    assert_eq!(compute_saving(&txns), income - expense);
    assert_eq!(compute_balance(&txns), 3840.0);
}

#[test]
fn empty_history_has_zero_summary() {
    let txns = history(&[]);
    assert_eq!(compute_income(&txns), 0.0);
    assert_eq!(compute_expense(&txns), 0.0);
    assert_eq!(compute_saving(&txns), 0.0);
    assert_eq!(compute_balance(&txns), 0.0);
}

#[test]
fn balance_always_matches_transactions() {
    let (mut bank, session) = bank_with_session(KUSHAL);
    bank.deposit(&session, 25.5, "Satya", "Tea").unwrap();
    bank.withdraw(&session, 100.0, "Shop", "Rice").unwrap();
    bank.request_loan(&session, 300.0, "Sakar", "Books").unwrap();
    let account = bank.account(&session).unwrap();
    assert_eq!(account.balance(), compute_balance(account.transactions()));
    assert_eq!(account.balance(), 3840.0 + 25.5 - 100.0 - 300.0);
}

#[test]
fn rejected_operations_leave_movements_unchanged() {
    let (mut bank, session) = bank_with_session(DIKSHAN);
    let before = amounts(&bank, &session);

    assert!(matches!(
        bank.deposit(&session, 0.0, "A", "B"),
        Err(LedgerError::NonPositiveAmount(_))
    ));
    assert!(matches!(
        bank.deposit(&session, f64::NAN, "A", "B"),
        Err(LedgerError::NonPositiveAmount(_))
    ));
    assert!(matches!(
        bank.withdraw(&session, 250.01, "A", "B"),
        Err(LedgerError::InsufficientFunds { .. })
    ));
    assert!(matches!(
        bank.request_loan(&session, 5000.0, "A", "B"),
        Err(LedgerError::InsufficientCollateral { .. })
    ));

    assert_eq!(amounts(&bank, &session), before);
    assert_eq!(bank.loans().len(), 4);
}

#[test]
fn zero_and_negative_withdrawals_and_loans_change_nothing() {
    let (mut bank, session) = bank_with_session(DIKSHAN);
    let before = amounts(&bank, &session);

    for amount in [0.0, -100.0] {
        assert!(matches!(
            bank.withdraw(&session, amount, "Shop", "Food"),
            Err(LedgerError::NonPositiveAmount(_))
        ));
        assert!(matches!(
            bank.request_loan(&session, amount, "Kushal", "Khaja"),
            Err(LedgerError::NonPositiveAmount(_))
        ));
    }

    assert_eq!(amounts(&bank, &session), before);
    assert_eq!(bank.loans().len(), 4);
    assert_eq!(bank.loans().total_pending(), 1400.0);
}

#[test]
fn withdrawing_the_whole_balance_is_allowed() {
    let (mut bank, session) = bank_with_session(DIKSHAN);
    bank.withdraw(&session, 250.0, "Shop", "Everything").unwrap();
    assert_eq!(bank.account(&session).unwrap().balance(), 0.0);
}

#[test]
fn accounts_are_isolated() {
    let fresh = Account::new("someone@example.com", 1234, "Some One");
    assert!(fresh.transactions().is_empty());
    assert_eq!(fresh.balance(), 0.0);
}
