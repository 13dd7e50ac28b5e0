//! Derived views over the ledger: filtering, sorting and aggregation.

pub mod filter;
pub mod services;
pub mod sorter;
pub mod view;

use thiserror::Error;

pub use filter::{CategoryFilter, KindFilter, TransactionFilter};
pub use sorter::{SortDirection, SortKey, SortOrder};
pub use view::TransactionView;

/// Errors raised while parsing view settings from user text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("unknown type filter `{0}` (expected all, income or expense)")]
    UnknownKind(String),
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("unknown sort column `{0}` (expected none, amount or date)")]
    UnknownSortKey(String),
    #[error("unknown sort direction `{0}` (expected asc or desc)")]
    UnknownDirection(String),
}
