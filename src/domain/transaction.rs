use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::errors::{Field, LedgerError, Result};

/// Date format accepted by [`TransactionDraft`].
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Largest amount a single transaction may carry. Keeps ledger totals finite.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(LedgerError::invalid(
                Field::Type,
                format!("expected `income` or `expense`, got `{}`", other),
            )),
        }
    }
}

/// One recorded income or expense event.
///
/// Fields are private: a `Transaction` only comes out of [`Transaction::new`]
/// or [`TransactionDraft::validate`], so every instance satisfies the
/// validation rules. Edits build a whole new value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    title: String,
    amount: f64,
    category: Category,
    kind: TransactionKind,
    date: NaiveDate,
}

impl Transaction {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        category: Category,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Result<Self> {
        let transaction = Self {
            title: title.into().trim().to_string(),
            amount,
            category,
            kind,
            date,
        };
        transaction.validate()?;
        Ok(transaction)
    }

    /// Re-checks the invariants that typed construction cannot rule out.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(LedgerError::missing(Field::Title));
        }
        validate_amount(self.amount)?;
        if !self.category.allows(self.kind) {
            return Err(category_mismatch(self.category, self.kind));
        }
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(LedgerError::Format(amount.to_string()));
    }
    if amount <= 0.0 {
        return Err(LedgerError::invalid(
            Field::Amount,
            "must be greater than zero",
        ));
    }
    if amount > MAX_AMOUNT {
        return Err(LedgerError::invalid(
            Field::Amount,
            "must not exceed 1,000,000,000,000",
        ));
    }
    Ok(())
}

fn category_mismatch(category: Category, kind: TransactionKind) -> LedgerError {
    let allowed = Category::for_kind(kind)
        .iter()
        .map(|category| category.label())
        .collect::<Vec<_>>()
        .join(", ");
    LedgerError::invalid(
        Field::Category,
        format!(
            "`{}` is not an {} category (expected one of: {})",
            category,
            kind.label().to_ascii_lowercase(),
            allowed
        ),
    )
}

/// Raw, unvalidated form input for a transaction.
///
/// Every field is the text a user typed (or `None` when left blank).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    pub title: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub kind: Option<String>,
    pub date: Option<String>,
}

impl TransactionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    pub fn amount(mut self, value: impl Into<String>) -> Self {
        self.amount = Some(value.into());
        self
    }

    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    pub fn kind(mut self, value: impl Into<String>) -> Self {
        self.kind = Some(value.into());
        self
    }

    pub fn date(mut self, value: impl Into<String>) -> Self {
        self.date = Some(value.into());
        self
    }

    /// Validates the draft into a [`Transaction`].
    ///
    /// Blank fields are reported first, in form order (title, amount,
    /// category, type, date); only then is each value parsed.
    pub fn validate(&self) -> Result<Transaction> {
        let title = required(&self.title, Field::Title)?;
        let amount_text = required(&self.amount, Field::Amount)?;
        let category_text = required(&self.category, Field::Category)?;
        let kind_text = required(&self.kind, Field::Type)?;
        let date_text = required(&self.date, Field::Date)?;

        let amount = amount_text
            .parse::<f64>()
            .map_err(|_| LedgerError::Format(amount_text.to_string()))?;
        let category = category_text.parse::<Category>()?;
        let kind = kind_text.parse::<TransactionKind>()?;
        let date = parse_date(date_text)?;

        Transaction::new(title, amount, category, kind, date)
    }
}

impl From<&Transaction> for TransactionDraft {
    fn from(transaction: &Transaction) -> Self {
        Self {
            title: Some(transaction.title.clone()),
            amount: Some(transaction.amount.to_string()),
            category: Some(transaction.category.label().to_string()),
            kind: Some(transaction.kind.label().to_string()),
            date: Some(transaction.date.format(DATE_INPUT_FORMAT).to_string()),
        }
    }
}

fn required(value: &Option<String>, field: Field) -> Result<&str> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(LedgerError::missing(field)),
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).map_err(|_| {
        LedgerError::invalid(
            Field::Date,
            format!("expected YYYY-MM-DD, got `{}`", value.trim()),
        )
    })
}
