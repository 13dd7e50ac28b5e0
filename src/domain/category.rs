use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::transaction::TransactionKind;
use crate::errors::{Field, LedgerError};

/// Fixed set of categories a transaction can be filed under.
///
/// Income transactions only use [`Category::Income`]; every other variant is
/// an expense category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Income,
    #[serde(rename = "Dining Out")]
    DiningOut,
    Bills,
    Entertainment,
    Gas,
    Groceries,
    Shopping,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Income,
        Category::DiningOut,
        Category::Bills,
        Category::Entertainment,
        Category::Gas,
        Category::Groceries,
        Category::Shopping,
        Category::Other,
    ];

    pub const INCOME: [Category; 1] = [Category::Income];

    pub const EXPENSE: [Category; 7] = [
        Category::DiningOut,
        Category::Bills,
        Category::Entertainment,
        Category::Gas,
        Category::Groceries,
        Category::Shopping,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::DiningOut => "Dining Out",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Gas => "Gas",
            Category::Groceries => "Groceries",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        }
    }

    /// The transaction type this category belongs to.
    pub fn kind(self) -> TransactionKind {
        match self {
            Category::Income => TransactionKind::Income,
            _ => TransactionKind::Expense,
        }
    }

    /// Categories a form should offer for the given type.
    pub fn for_kind(kind: TransactionKind) -> &'static [Category] {
        match kind {
            TransactionKind::Income => &Self::INCOME,
            TransactionKind::Expense => &Self::EXPENSE,
        }
    }

    pub fn allows(self, kind: TransactionKind) -> bool {
        self.kind() == kind
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    /// Matches labels case-insensitively; surrounding whitespace is ignored.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                LedgerError::invalid(Field::Category, format!("unknown category `{}`", needle))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("dining out".parse::<Category>(), Ok(Category::DiningOut));
        assert_eq!("  BILLS ".parse::<Category>(), Ok(Category::Bills));
    }

    #[test]
    fn unknown_label_is_a_category_error() {
        let err = "Rent".parse::<Category>().unwrap_err();
        assert_eq!(err.field(), Some(Field::Category));
    }

    #[test]
    fn income_and_expense_sets_partition_all() {
        assert_eq!(
            Category::INCOME.len() + Category::EXPENSE.len(),
            Category::ALL.len()
        );
        assert!(Category::EXPENSE
            .iter()
            .all(|category| category.allows(TransactionKind::Expense)));
        assert!(!Category::Income.allows(TransactionKind::Expense));
    }
}
