use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::table::{Column, Table};
use crate::core::services::{LedgerSummary, SummaryService};

const SUMMARY_USAGE: &str = "summary [--json] [--view]";
const CHART_WIDTH: usize = 30;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Show income, expense and balance totals",
            SUMMARY_USAGE,
            cmd_summary,
        )
        .with_aliases(&["totals"]),
        CommandEntry::new("chart", "Show spending by category", "chart", cmd_chart),
    ]
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let mut as_json = false;
    let mut visible_only = false;
    for arg in args {
        match *arg {
            "--json" => as_json = true,
            "--view" => visible_only = true,
            _ => return Err(CommandError::usage(SUMMARY_USAGE)),
        }
    }

    let summary = if visible_only {
        SummaryService::summarize(context.view.project(&context.ledger))
    } else {
        SummaryService::current_totals(&context.ledger)
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    output::section("Summary");
    output::key_values(&[
        ("Transactions", summary.transaction_count.to_string()),
        ("Total income", context.format_amount(summary.total_income)),
        ("Total expenses", context.format_amount(summary.total_expense)),
        ("Net balance", context.format_amount(summary.net_balance)),
    ]);

    if !summary.category_totals.is_empty() {
        println!("{}", breakdown_table(context, &summary).render());
    }
    if summary.is_overspending() && context.config.warn_on_overspend {
        io::print_warning("Your net balance is negative. You may be overspending.");
    }
    Ok(())
}

fn breakdown_table(context: &ShellContext, summary: &LedgerSummary) -> Table {
    let mut table = Table::new(vec![
        Column::left("Category"),
        Column::right("Spent"),
        Column::right("Count"),
        Column::right("Share"),
    ]);
    for entry in &summary.category_totals {
        table.push_row(vec![
            entry.category.to_string(),
            context.format_amount(entry.total),
            entry.count.to_string(),
            format!("{:.1}%", summary.category_share(entry.category)),
        ]);
    }
    table
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = SummaryService::current_totals(&context.ledger);
    if summary.category_totals.is_empty() {
        io::print_info("No expenses recorded yet.");
        return Ok(());
    }

    output::section("Spending by category");
    let label_width = summary
        .category_totals
        .iter()
        .map(|entry| entry.category.label().len())
        .max()
        .unwrap_or(0);
    for entry in &summary.category_totals {
        let share = summary.category_share(entry.category);
        println!(
            "{:<label_width$}  {:<bar_width$}  {:>5.1}%  {}",
            entry.category.label(),
            bar(share),
            share,
            context.format_amount(entry.total),
            bar_width = CHART_WIDTH,
        );
    }
    Ok(())
}

/// `#` bar scaled to [`CHART_WIDTH`]; any non-zero share gets at least one.
fn bar(share: f64) -> String {
    let filled = (share / 100.0 * CHART_WIDTH as f64).round() as usize;
    let filled = if share > 0.0 { filled.max(1) } else { 0 };
    "#".repeat(filled.min(CHART_WIDTH))
}
