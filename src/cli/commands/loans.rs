use crate::cli::commands::movements::show_account;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::table_renderer::{Table, TableColumn};
use crate::cli::views::loan_rows;
use crate::core::services::LoanService;
use crate::currency::{format_money, format_signed};

const APPROVE_USAGE: &str = "approve <#position|loan-id>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("loans", "List pending loan requests", "loans", cmd_loans),
        CommandEntry::new(
            "approve",
            "Approve a pending loan and credit it to this account",
            APPROVE_USAGE,
            cmd_approve,
        )
        .with_session(),
    ]
}

fn cmd_loans(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    show_loans(context);
    Ok(())
}

fn cmd_approve(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let session = context.require_session()?;
    let [reference] = args else {
        return Err(CommandError::usage(APPROVE_USAGE));
    };
    let target = LoanService::resolve(&context.bank, reference)?;
    let approval = LoanService::approve(&mut context.bank, &session, target)?;
    io::print_success(format!(
        "Approved {} from {}.",
        format_money(&context.config.currency_label, approval.loan.amount),
        approval.loan.counterparty
    ));
    show_loans(context);
    show_account(context, &session)
}

fn show_loans(context: &ShellContext) {
    let pending = LoanService::pending(&context.bank);
    output_section("Pending loans");
    if pending.is_empty() {
        io::print_info("No pending loans.");
        return;
    }
    let rows = loan_rows(pending, &context.config)
        .iter()
        .map(|row| row.cells())
        .collect();
    let table = Table::new(
        vec![
            TableColumn::right("#"),
            TableColumn::left("Id"),
            TableColumn::left("Details").max(40),
            TableColumn::left("Requested"),
            TableColumn::right("Amount"),
        ],
        rows,
    );
    io::print_info(table.render());
    io::print_info(format!(
        "Total pending: {}",
        format_signed(&context.config.currency_label, context.bank.loans().total_pending())
    ));
}

#[cfg(test)]
mod tests {
    use crate::cli::core::{test_context, CommandError};
    use crate::core::services::ServiceError;
    use crate::errors::LedgerError;

    #[test]
    fn approve_by_position_removes_entry_and_credits() {
        let (mut context, _home) = test_context();
        context.process_line("login dxngrg2048@gmail.com 2222").unwrap();
        context.process_line("approve #4").unwrap();
        let session = context.session.clone().unwrap();
        assert_eq!(context.bank.account(&session).unwrap().balance(), 450.0);
        assert_eq!(context.bank.loans().len(), 3);
    }

    #[test]
    fn approve_by_id_prefix_targets_the_same_loan_after_removal() {
        let (mut context, _home) = test_context();
        context.process_line("login dxngrg2038@gmail.com 2222").unwrap();
        let id = context.bank.loans().entries()[2].id;
        context.process_line("approve #1").unwrap();
        context
            .process_line(&format!("approve {}", &id.to_string()[..8]))
            .unwrap();
        let remaining: Vec<_> = context
            .bank
            .loans()
            .entries()
            .iter()
            .map(|entry| entry.counterparty.as_str())
            .collect();
        assert_eq!(remaining, vec!["Kushal Pariyar", "Sushant Poudel"]);
    }

    #[test]
    fn approve_out_of_range_is_reported() {
        let (mut context, _home) = test_context();
        context.process_line("login dxngrg2048@gmail.com 2222").unwrap();
        let err = context.process_line("approve #9").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Service(ServiceError::Ledger(LedgerError::LoanPositionOutOfRange {
                position: 8,
                len: 4
            }))
        ));
        assert_eq!(context.bank.loans().len(), 4);
    }

    #[test]
    fn loans_listing_needs_no_session() {
        let (mut context, _home) = test_context();
        context.process_line("loans").unwrap();
    }
}
