//! Turns command arguments and interactive prompts into transaction drafts.

use chrono::Local;
use dialoguer::theme::ColorfulTheme;

use crate::cli::core::CommandError;
use crate::cli::io as cli_io;
use crate::domain::{transaction::DATE_INPUT_FORMAT, Category, TransactionDraft, TransactionKind};

const TODAY: &str = "today";

pub(crate) fn today() -> String {
    Local::now().date_naive().format(DATE_INPUT_FORMAT).to_string()
}

fn resolve_date(value: &str) -> String {
    if value.trim().eq_ignore_ascii_case(TODAY) {
        today()
    } else {
        value.to_string()
    }
}

/// Reads `<title> <amount> <category> <type> [date]`. Missing trailing values
/// stay blank so validation can name them; the date defaults to today.
pub(crate) fn draft_from_args(args: &[&str]) -> Result<TransactionDraft, CommandError> {
    if args.len() > 5 {
        return Err(CommandError::usage(
            "add <title> <amount> <category> <type> [date]",
        ));
    }
    let value = |idx: usize| args.get(idx).map(|text| text.to_string());
    Ok(TransactionDraft {
        title: value(0),
        amount: value(1),
        category: value(2),
        kind: value(3),
        date: Some(args.get(4).map_or_else(today, |text| resolve_date(text))),
    })
}

/// Applies `--title`, `--amount`, `--category`, `--type` and `--date` to an
/// existing draft. Both `--flag value` and `--flag=value` are accepted.
pub(crate) fn apply_edit_flags(
    draft: &mut TransactionDraft,
    args: &[&str],
) -> Result<usize, CommandError> {
    let mut applied = 0;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let Some(flag) = arg.strip_prefix("--") else {
            return Err(CommandError::InvalidArguments(format!(
                "unexpected argument `{}`",
                arg
            )));
        };
        let (name, value) = match flag.split_once('=') {
            Some((name, value)) => (name, value.to_string()),
            None => {
                let value = iter.next().ok_or_else(|| {
                    CommandError::InvalidArguments(format!("`--{}` needs a value", flag))
                })?;
                (flag, value.to_string())
            }
        };
        let slot = match name.to_ascii_lowercase().as_str() {
            "title" => &mut draft.title,
            "amount" => &mut draft.amount,
            "category" => &mut draft.category,
            "type" | "kind" => &mut draft.kind,
            "date" => {
                draft.date = Some(resolve_date(&value));
                applied += 1;
                continue;
            }
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown field `--{}`",
                    other
                )))
            }
        };
        *slot = Some(value);
        applied += 1;
    }
    Ok(applied)
}

/// Prompt-driven form. The category list only offers categories valid for
/// the chosen type.
pub(crate) struct TransactionWizard<'a> {
    theme: &'a ColorfulTheme,
}

impl<'a> TransactionWizard<'a> {
    pub(crate) fn new(theme: &'a ColorfulTheme) -> Self {
        Self { theme }
    }

    pub(crate) fn run(&self, initial: &TransactionDraft) -> Result<TransactionDraft, CommandError> {
        let title = cli_io::prompt_text(self.theme, "Title", initial.title.as_deref())?;
        let amount = cli_io::prompt_text(self.theme, "Amount", initial.amount.as_deref())?;

        let kind_index = initial
            .kind
            .as_deref()
            .and_then(|text| text.parse::<TransactionKind>().ok())
            .and_then(|kind| TransactionKind::ALL.iter().position(|k| *k == kind))
            .unwrap_or(1);
        let kind = TransactionKind::ALL[cli_io::select_index(
            self.theme,
            "Type",
            &TransactionKind::ALL,
            kind_index,
        )?];

        let choices = Category::for_kind(kind);
        let category_index = initial
            .category
            .as_deref()
            .and_then(|text| text.parse::<Category>().ok())
            .and_then(|category| choices.iter().position(|c| *c == category))
            .unwrap_or(0);
        let category =
            choices[cli_io::select_index(self.theme, "Category", choices, category_index)?];

        let default_date = initial.date.clone().unwrap_or_else(today);
        let date = cli_io::prompt_text(self.theme, "Date (YYYY-MM-DD)", Some(&default_date))?;

        Ok(TransactionDraft {
            title: Some(title),
            amount: Some(amount),
            category: Some(category.label().to_string()),
            kind: Some(kind.label().to_string()),
            date: Some(resolve_date(&date)),
        })
    }
}
