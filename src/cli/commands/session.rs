use crate::cli::commands::movements::show_account;
use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::views::SortOrder;
use crate::core::services::SessionService;

const LOGIN_USAGE: &str = "login <email> <pin>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("login", "Sign in to an account", LOGIN_USAGE, cmd_login),
        CommandEntry::new("logout", "Sign out of the current account", "logout", cmd_logout),
        CommandEntry::new("whoami", "Show the signed-in account", "whoami", cmd_whoami),
    ]
}

fn cmd_login(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (email, pin) = match args {
        [email, pin] => (email.to_string(), pin.to_string()),
        [email] if context.mode == CliMode::Interactive => {
            let pin = io::prompt_secret(&context.theme, "PIN")?;
            (email.to_string(), pin)
        }
        _ => return Err(CommandError::usage(LOGIN_USAGE)),
    };

    let session = SessionService::login(&context.bank, &email, &pin)?;
    let owner = context.bank.account(&session)?.owner.clone();
    context.session = Some(session.clone());
    context.sort_order = SortOrder::default();

    let first_name = owner.split_whitespace().next().unwrap_or(owner.as_str());
    io::print_success(format!("Welcome back, {}", first_name));
    show_account(context, &session)
}

fn cmd_logout(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.session.take() {
        Some(session) => io::print_success(format!("Signed out of {}.", session.email())),
        None => io::print_info("No account is signed in."),
    }
    context.sort_order = SortOrder::default();
    Ok(())
}

fn cmd_whoami(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let Some(session) = context.session.as_ref() else {
        io::print_info("Not logged in.");
        return Ok(());
    };
    let account = context.bank.account(session)?;
    io::print_info(format!(
        "{} <{}> ({})",
        account.owner, account.email, account.currency
    ));
    Ok(())
}
