//! Type/category predicate narrowing the visible transaction set.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::core::ViewError;
use crate::domain::{AsTransaction, Category, Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    pub fn matches(self, kind: TransactionKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Income => kind == TransactionKind::Income,
            KindFilter::Expense => kind == TransactionKind::Expense,
        }
    }
}

impl From<TransactionKind> for KindFilter {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => KindFilter::Income,
            TransactionKind::Expense => KindFilter::Expense,
        }
    }
}

impl FromStr for KindFilter {
    type Err = ViewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(KindFilter::All),
            "income" => Ok(KindFilter::Income),
            "expense" => Ok(KindFilter::Expense),
            _ => Err(ViewError::UnknownKind(value.trim().to_string())),
        }
    }
}

impl fmt::Display for KindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            KindFilter::All => "All",
            KindFilter::Income => "Income",
            KindFilter::Expense => "Expense",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ViewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        value
            .parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(|_| ViewError::UnknownCategory(value.trim().to_string()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

/// Combined type and category predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransactionFilter {
    pub kind: KindFilter,
    pub category: CategoryFilter,
}

impl TransactionFilter {
    pub fn new(kind: KindFilter, category: CategoryFilter) -> Self {
        Self { kind, category }
    }

    pub fn is_all(&self) -> bool {
        self.kind == KindFilter::All && self.category == CategoryFilter::All
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.kind.matches(transaction.kind()) && self.category.matches(transaction.category())
    }

    pub fn apply<T: AsTransaction + Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|item| self.matches(item.transaction()))
            .cloned()
            .collect()
    }
}

impl fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type={}, category={}", self.kind, self.category)
    }
}

/// Keeps the items passing both filters, preserving their order.
pub fn apply<T: AsTransaction + Clone>(
    items: &[T],
    kind: KindFilter,
    category: CategoryFilter,
) -> Vec<T> {
    TransactionFilter::new(kind, category).apply(items)
}
