use crate::cli::commands::{join_rest, movements::show_account};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::core::services::{TransactionService, SHORT_ID_LEN};
use crate::currency::format_money;

const DEPOSIT_USAGE: &str = "deposit <amount> <from> [purpose]";
const WITHDRAW_USAGE: &str = "withdraw <amount> <to> [purpose]";
const LOAN_USAGE: &str = "loan <amount> <from> [purpose]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("deposit", "Record money received", DEPOSIT_USAGE, cmd_deposit)
            .with_session(),
        CommandEntry::new("withdraw", "Record money paid out", WITHDRAW_USAGE, cmd_withdraw)
            .with_session(),
        CommandEntry::new(
            "loan",
            "Request a loan; the amount is debited until approved",
            LOAN_USAGE,
            cmd_loan,
        )
        .with_session(),
    ]
}

struct MovementArgs<'a> {
    amount: &'a str,
    counterparty: &'a str,
    purpose: String,
}

fn parse_args<'a>(args: &[&'a str], usage: &str) -> Result<MovementArgs<'a>, CommandError> {
    match args {
        [amount, counterparty, rest @ ..] => Ok(MovementArgs {
            amount: *amount,
            counterparty: *counterparty,
            purpose: join_rest(rest),
        }),
        _ => Err(CommandError::usage(usage)),
    }
}

fn cmd_deposit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let session = context.require_session()?;
    let input = parse_args(args, DEPOSIT_USAGE)?;
    TransactionService::deposit(
        &mut context.bank,
        &session,
        input.amount,
        input.counterparty,
        &input.purpose,
    )?;
    io::print_success(format!("Deposit from {} recorded.", input.counterparty));
    show_account(context, &session)
}

fn cmd_withdraw(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let session = context.require_session()?;
    let input = parse_args(args, WITHDRAW_USAGE)?;
    TransactionService::withdraw(
        &mut context.bank,
        &session,
        input.amount,
        input.counterparty,
        &input.purpose,
    )?;
    io::print_success(format!("Withdrawal to {} recorded.", input.counterparty));
    show_account(context, &session)
}

fn cmd_loan(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let session = context.require_session()?;
    let input = parse_args(args, LOAN_USAGE)?;
    let receipt = TransactionService::request_loan(
        &mut context.bank,
        &session,
        input.amount,
        input.counterparty,
        &input.purpose,
    )?;
    let amount = context
        .bank
        .loans()
        .get(receipt.loan_id)
        .map(|entry| format_money(&context.config.currency_label, entry.amount))
        .unwrap_or_default();
    let id = receipt.loan_id.to_string();
    io::print_success(format!(
        "Loan of {} from {} queued as {}.",
        amount,
        input.counterparty,
        &id[..SHORT_ID_LEN]
    ));
    show_account(context, &session)
}

#[cfg(test)]
mod tests {
    use crate::cli::core::{test_context, CommandError};
    use crate::core::services::ServiceError;
    use crate::errors::LedgerError;

    fn balance(context: &crate::cli::core::ShellContext) -> f64 {
        let session = context.session.clone().unwrap();
        context.bank.account(&session).unwrap().balance()
    }

    #[test]
    fn deposit_accepts_multi_word_purpose() {
        let (mut context, _home) = test_context();
        context.process_line("login dxngrg2058@gmail.com 2222").unwrap();
        context
            .process_line(r#"deposit 150 "Satya Dahal" College fee refund"#)
            .unwrap();
        let session = context.session.clone().unwrap();
        let account = context.bank.account(&session).unwrap();
        let last = account.transactions().last().unwrap();
        assert_eq!(last.counterparty, "Satya Dahal");
        assert_eq!(last.purpose, "College fee refund");
        assert_eq!(account.balance(), 400.0);
    }

    #[test]
    fn overdraft_is_reported_and_state_kept() {
        let (mut context, _home) = test_context();
        context.process_line("login dxngrg2058@gmail.com 2222").unwrap();
        let err = context.process_line("withdraw 1000 Shop Food").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Service(ServiceError::Ledger(LedgerError::InsufficientFunds { .. }))
        ));
        assert_eq!(balance(&context), 250.0);
    }

    #[test]
    fn loan_command_debits_and_queues() {
        let (mut context, _home) = test_context();
        context.process_line("login dxngrg2058@gmail.com 2222").unwrap();
        context.process_line("loan 1000 Kushal Khaja").unwrap();
        assert_eq!(balance(&context), -750.0);
        assert_eq!(context.bank.loans().len(), 5);
    }

    #[test]
    fn missing_counterparty_is_a_usage_error() {
        let (mut context, _home) = test_context();
        context.process_line("login dxngrg2058@gmail.com 2222").unwrap();
        let err = context.process_line("deposit 10").unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
    }
}
