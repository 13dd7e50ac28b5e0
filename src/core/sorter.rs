//! Stable reordering of a transaction sequence by a sortable column.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::core::ViewError;
use crate::domain::{AsTransaction, Transaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    None,
    Amount,
    Date,
}

impl FromStr for SortKey {
    type Err = ViewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(SortKey::None),
            "amount" => Ok(SortKey::Amount),
            "date" => Ok(SortKey::Date),
            _ => Err(ViewError::UnknownSortKey(value.trim().to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::None => "none",
            SortKey::Amount => "amount",
            SortKey::Date => "date",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl FromStr for SortDirection {
    type Err = ViewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ViewError::UnknownDirection(value.trim().to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    fn compare(&self, left: &Transaction, right: &Transaction) -> Ordering {
        let ordering = match self.key {
            SortKey::None => Ordering::Equal,
            SortKey::Amount => left.amount().total_cmp(&right.amount()),
            SortKey::Date => left.date().cmp(&right.date()),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Sorts a copy of `items`. Equal keys keep their input order in both
    /// directions.
    pub fn apply<T: AsTransaction + Clone>(&self, items: &[T]) -> Vec<T> {
        let mut sorted = items.to_vec();
        if self.key != SortKey::None {
            sorted.sort_by(|left, right| self.compare(left.transaction(), right.transaction()));
        }
        sorted
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key == SortKey::None {
            f.write_str("insertion order")
        } else {
            write!(f, "{} {}", self.key, self.direction)
        }
    }
}

pub fn apply<T: AsTransaction + Clone>(
    items: &[T],
    key: SortKey,
    direction: SortDirection,
) -> Vec<T> {
    SortOrder::new(key, direction).apply(items)
}
