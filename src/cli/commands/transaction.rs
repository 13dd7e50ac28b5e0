use crate::cli::core::{CommandError, CommandResult};
use crate::cli::forms::{self, TransactionWizard};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::core::services::TransactionService;
use crate::domain::{Displayable, TransactionDraft};
use crate::errors::LedgerError;

const ADD_USAGE: &str = "add <title> <amount> <category> <type> [date|today]";
const EDIT_USAGE: &str = "edit <id> [--title T] [--amount A] [--category C] [--type T] [--date D]";
const REMOVE_USAGE: &str = "remove <id> [--yes]";
const SHOW_USAGE: &str = "show <id>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record a new transaction", ADD_USAGE, cmd_add)
            .with_aliases(&["new"]),
        CommandEntry::new("edit", "Change an existing transaction", EDIT_USAGE, cmd_edit),
        CommandEntry::new("remove", "Delete a transaction", REMOVE_USAGE, cmd_remove)
            .with_aliases(&["rm", "delete"]),
        CommandEntry::new("show", "Show one transaction", SHOW_USAGE, cmd_show),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = if args.is_empty() && context.can_prompt() {
        let initial = TransactionDraft::new().date(forms::today());
        TransactionWizard::new(&context.theme).run(&initial)?
    } else if args.is_empty() {
        return Err(CommandError::usage(ADD_USAGE));
    } else {
        forms::draft_from_args(args)?
    };

    let id = TransactionService::add(&mut context.ledger, &draft)?;
    if let Some(transaction) = context.ledger.get(id) {
        io::print_success(format!("Added {}: {}", id, transaction.display_label()));
    }
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = context.transaction_id_from_arg(args.first(), EDIT_USAGE)?;
    let mut draft = TransactionService::draft_for(&context.ledger, id)?;

    let flags = &args[1..];
    if flags.is_empty() {
        if !context.can_prompt() {
            return Err(CommandError::usage(EDIT_USAGE));
        }
        draft = TransactionWizard::new(&context.theme).run(&draft)?;
    } else {
        forms::apply_edit_flags(&mut draft, flags)?;
    }

    TransactionService::update(&mut context.ledger, id, &draft)?;
    if let Some(transaction) = context.ledger.get(id) {
        io::print_success(format!("Updated {}: {}", id, transaction.display_label()));
    }
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = context.transaction_id_from_arg(args.first(), REMOVE_USAGE)?;
    let confirmed_by_flag = args[1..]
        .iter()
        .any(|arg| matches!(*arg, "--yes" | "-y"));

    let Some(transaction) = context.ledger.get(id) else {
        return Err(LedgerError::NotFound(id).into());
    };

    if !confirmed_by_flag {
        if !context.can_prompt() {
            return Err(CommandError::InvalidArguments(format!(
                "refusing to remove {} without confirmation; pass --yes",
                id
            )));
        }
        let prompt = format!("Remove {} ({})?", id, transaction.title());
        if !io::confirm_action(&context.theme, &prompt, false)? {
            io::print_info("Nothing removed.");
            return Ok(());
        }
    }

    let removed = TransactionService::remove(&mut context.ledger, id)?;
    io::print_success(format!("Removed {}: {}", id, removed.title()));
    Ok(())
}

fn cmd_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = context.transaction_id_from_arg(args.first(), SHOW_USAGE)?;
    let transaction = context
        .ledger
        .get(id)
        .ok_or(LedgerError::NotFound(id))?;

    output::section(format!("Transaction {}", id));
    output::key_values(&[
        ("Title", transaction.title().to_string()),
        ("Amount", context.format_amount(transaction.amount())),
        ("Category", transaction.category().to_string()),
        ("Type", transaction.kind().to_string()),
        ("Date", context.format_date(transaction.date())),
    ]);
    Ok(())
}
