use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::table::{Column, Table};
use crate::core::{CategoryFilter, KindFilter, SortDirection, SortKey, SortOrder, TransactionFilter};
use crate::domain::{Category, TransactionKind};
use crate::ledger::LedgerEntry;

const FILTER_USAGE: &str = "filter [all|income|expense] [category|all] | filter reset";
const SORT_USAGE: &str = "sort [none|amount|date] [asc|desc]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "list",
            "Show transactions matching the current filter and sort",
            "list",
            cmd_list,
        )
        .with_aliases(&["ls"]),
        CommandEntry::new(
            "filter",
            "Narrow the list by type and category",
            FILTER_USAGE,
            cmd_filter,
        ),
        CommandEntry::new("sort", "Order the list by amount or date", SORT_USAGE, cmd_sort),
        CommandEntry::new(
            "categories",
            "List categories for a transaction type",
            "categories [income|expense]",
            cmd_categories,
        ),
    ]
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    print_view(context);
    Ok(())
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let filter = match args {
        [] => {
            io::print_info(format!("Filter: {}", context.view.filter));
            return Ok(());
        }
        [word] if word.eq_ignore_ascii_case("reset") || word.eq_ignore_ascii_case("clear") => {
            TransactionFilter::default()
        }
        [kind] => TransactionFilter::new(kind.parse()?, CategoryFilter::All),
        [kind, category] => TransactionFilter::new(kind.parse()?, category.parse()?),
        _ => return Err(CommandError::usage(FILTER_USAGE)),
    };

    context.view.filter = filter;
    tracing::debug!(%filter, "filter changed");
    io::print_success(format!("Filter: {}", filter));
    print_view(context);
    Ok(())
}

fn cmd_sort(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let order = match args {
        [] => {
            io::print_info(format!("Sort: {}", context.view.order));
            return Ok(());
        }
        [key] => SortOrder::new(key.parse::<SortKey>()?, SortDirection::default()),
        [key, direction] => SortOrder::new(key.parse()?, direction.parse()?),
        _ => return Err(CommandError::usage(SORT_USAGE)),
    };

    context.view.order = order;
    tracing::debug!(%order, "sort changed");
    io::print_success(format!("Sort: {}", order));
    print_view(context);
    Ok(())
}

fn cmd_categories(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kinds: Vec<TransactionKind> = match args.first() {
        None => TransactionKind::ALL.to_vec(),
        Some(raw) => match raw.parse::<KindFilter>()? {
            KindFilter::All => TransactionKind::ALL.to_vec(),
            KindFilter::Income => vec![TransactionKind::Income],
            KindFilter::Expense => vec![TransactionKind::Expense],
        },
    };

    for kind in kinds {
        let labels: Vec<&str> = Category::for_kind(kind)
            .iter()
            .map(|category| category.label())
            .collect();
        io::print_info(format!("{}: {}", kind, labels.join(", ")));
    }
    Ok(())
}

/// Prints the filtered, sorted table with a one-line caption.
pub(crate) fn print_view(context: &ShellContext) {
    let rows = context.view.project(&context.ledger);
    if context.ledger.is_empty() {
        io::print_info("No transactions recorded yet. Use `add` to create one.");
        return;
    }

    output::section("Transactions");
    io::print_info(format!(
        "Showing {} of {} ({}; sort: {})",
        rows.len(),
        context.ledger.len(),
        context.view.filter,
        context.view.order
    ));
    if rows.is_empty() {
        io::print_info("No transactions match the current filter.");
        if !context.view.filter.is_all() {
            output::hint("Use `filter reset` to show everything.");
        }
        return;
    }
    println!("{}", transaction_table(context, &rows).render());
}

pub(crate) fn transaction_table(context: &ShellContext, rows: &[LedgerEntry]) -> Table {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Title").max_width(32),
        Column::right("Amount").min_width(10),
        Column::left("Category"),
        Column::left("Type"),
        Column::left("Date"),
    ]);
    for entry in rows {
        let transaction = &entry.transaction;
        table.push_row(vec![
            entry.id.to_string(),
            transaction.title().to_string(),
            context.format_amount(transaction.amount()),
            transaction.category().to_string(),
            transaction.kind().to_string(),
            context.format_date(transaction.date()),
        ]);
    }
    table
}
