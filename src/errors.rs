use std::fmt;

use thiserror::Error;

use crate::ledger::TransactionId;

/// Names the transaction field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Amount,
    Category,
    Type,
    Date,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Amount => "amount",
            Field::Category => "category",
            Field::Type => "type",
            Field::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error type that captures ledger and validation failures.
///
/// None of these are fatal: a failing operation leaves the ledger untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: Field, reason: String },
    #[error("Amount must be numeric, got `{0}`")]
    Format(String),
    #[error("Transaction {0} not found")]
    NotFound(TransactionId),
}

impl LedgerError {
    pub(crate) fn missing(field: Field) -> Self {
        LedgerError::Validation {
            field,
            reason: "a value is required".into(),
        }
    }

    pub(crate) fn invalid(field: Field, reason: impl Into<String>) -> Self {
        LedgerError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the failing field for validation errors.
    pub fn field(&self) -> Option<Field> {
        match self {
            LedgerError::Validation { field, .. } => Some(*field),
            LedgerError::Format(_) => Some(Field::Amount),
            LedgerError::NotFound(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_field() {
        let err = LedgerError::missing(Field::Category);
        assert_eq!(err.to_string(), "Invalid category: a value is required");
        assert_eq!(err.field(), Some(Field::Category));
    }

    #[test]
    fn not_found_has_no_field() {
        let err = LedgerError::NotFound(TransactionId::new(7));
        assert!(err.field().is_none());
        assert!(err.to_string().contains("#7"));
    }
}
