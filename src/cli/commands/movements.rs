use chrono::Utc;

use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::table_renderer::{Table, TableColumn};
use crate::cli::views::movement_rows;
use crate::core::services::SummaryService;
use crate::currency::{format_balance, format_signed};
use crate::ledger::Session;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "movements",
            "List the account's movements",
            "movements",
            cmd_movements,
        )
        .with_session(),
        CommandEntry::new(
            "sort",
            "Toggle between newest-first and by-amount order",
            "sort",
            cmd_sort,
        )
        .with_session(),
        CommandEntry::new(
            "summary",
            "Show income, expense, saving and balance",
            "summary",
            cmd_summary,
        )
        .with_session(),
        CommandEntry::new(
            "export",
            "Print the account statement as JSON",
            "export",
            cmd_export,
        )
        .with_session(),
    ]
}

fn cmd_movements(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let session = context.require_session()?;
    show_movements(context, &session)
}

fn cmd_sort(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let session = context.require_session()?;
    context.sort_order = context.sort_order.toggled();
    io::print_info(format!("Movements sorted {}.", context.sort_order.describe()));
    show_movements(context, &session)
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let session = context.require_session()?;
    show_summary(context, &session)
}

fn cmd_export(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let session = context.require_session()?;
    let statement = SummaryService::statement(&context.bank, &session)?;
    println!("{}", serde_json::to_string_pretty(&statement)?);
    Ok(())
}

pub(crate) fn show_movements(context: &ShellContext, session: &Session) -> CommandResult {
    let account = context.bank.account(session)?;
    output_section(format!("Movements ({})", context.sort_order.describe()));
    if account.transactions().is_empty() {
        io::print_info("No movements yet.");
        return Ok(());
    }
    let rows = movement_rows(account, context.sort_order, &context.config, Utc::now())
        .iter()
        .map(|row| row.cells())
        .collect();
    let table = Table::new(
        vec![
            TableColumn::left("Movement"),
            TableColumn::left("Details").max(40),
            TableColumn::left("Date"),
            TableColumn::right("Amount"),
        ],
        rows,
    );
    io::print_info(table.render());
    Ok(())
}

pub(crate) fn show_summary(context: &ShellContext, session: &Session) -> CommandResult {
    let summary = SummaryService::summary(&context.bank, session)?;
    let label = &context.config.currency_label;
    output_section("Summary");
    io::print_info(format!("  Income : {}", format_signed(label, summary.income)));
    io::print_info(format!("  Expense: {}", format_signed(label, summary.expense)));
    io::print_info(format!("  Saving : {}", format_signed(label, summary.saving)));
    io::print_info(format!("  Balance: {}", format_balance(&context.config, summary.balance)));
    Ok(())
}

/// Summary followed by the movement list, shown after every change.
pub(crate) fn show_account(context: &ShellContext, session: &Session) -> CommandResult {
    show_summary(context, session)?;
    show_movements(context, session)
}
