//! Business logic helpers for managing transactions from form input.

use crate::domain::{Transaction, TransactionDraft};
use crate::errors::{LedgerError, Result};
use crate::ledger::{Ledger, LedgerEntry, TransactionId};

/// Provides validated CRUD helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Validates the draft and appends it, returning the new identifier.
    pub fn add(ledger: &mut Ledger, draft: &TransactionDraft) -> Result<TransactionId> {
        let transaction = draft.validate()?;
        ledger.add(transaction)
    }

    /// Replaces the transaction identified by `id` with the validated draft.
    pub fn update(
        ledger: &mut Ledger,
        id: TransactionId,
        draft: &TransactionDraft,
    ) -> Result<Transaction> {
        let transaction = draft.validate()?;
        ledger.update(id, transaction)
    }

    /// Prefills a draft from the stored transaction, lets `patch` change it,
    /// then replaces the stored value wholesale.
    pub fn edit<F>(ledger: &mut Ledger, id: TransactionId, patch: F) -> Result<Transaction>
    where
        F: FnOnce(&mut TransactionDraft),
    {
        let mut draft = Self::draft_for(ledger, id)?;
        patch(&mut draft);
        Self::update(ledger, id, &draft)
    }

    /// Removes the transaction identified by `id`, returning the removed value.
    pub fn remove(ledger: &mut Ledger, id: TransactionId) -> Result<Transaction> {
        ledger.remove(id)
    }

    /// Form contents for editing the transaction identified by `id`.
    pub fn draft_for(ledger: &Ledger, id: TransactionId) -> Result<TransactionDraft> {
        ledger
            .get(id)
            .map(TransactionDraft::from)
            .ok_or(LedgerError::NotFound(id))
    }

    /// Returns a snapshot of the ledger's entries.
    pub fn list(ledger: &Ledger) -> Vec<LedgerEntry> {
        ledger.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::errors::Field;

    fn groceries() -> TransactionDraft {
        TransactionDraft::new()
            .title("Groceries")
            .amount("150")
            .category("Groceries")
            .kind("Expense")
            .date("2024-01-01")
    }

    #[test]
    fn invalid_draft_leaves_ledger_untouched() {
        let mut ledger = Ledger::new();
        let err = TransactionService::add(&mut ledger, &groceries().amount("lots")).unwrap_err();
        assert!(matches!(err, LedgerError::Format(_)));
        assert!(ledger.is_empty());
        assert_eq!(ledger.revision(), 0);
    }

    #[test]
    fn edit_replaces_selected_fields() {
        let mut ledger = Ledger::new();
        let id = TransactionService::add(&mut ledger, &groceries()).unwrap();

        TransactionService::edit(&mut ledger, id, |draft| {
            draft.amount = Some("175".into());
            draft.category = Some("Dining Out".into());
        })
        .unwrap();

        let stored = ledger.get(id).unwrap();
        assert_eq!(stored.title(), "Groceries");
        assert_eq!(stored.amount(), 175.0);
        assert_eq!(stored.category(), Category::DiningOut);
    }

    #[test]
    fn failed_edit_keeps_previous_value() {
        let mut ledger = Ledger::new();
        let id = TransactionService::add(&mut ledger, &groceries()).unwrap();

        let err = TransactionService::edit(&mut ledger, id, |draft| {
            draft.kind = Some("Income".into());
        })
        .unwrap_err();
        assert_eq!(err.field(), Some(Field::Category));
        assert_eq!(ledger.get(id).unwrap().amount(), 150.0);
    }

    #[test]
    fn edit_of_missing_transaction_is_not_found() {
        let mut ledger = Ledger::new();
        let ghost = TransactionId::new(9);
        let err = TransactionService::edit(&mut ledger, ghost, |_| {}).unwrap_err();
        assert_eq!(err, LedgerError::NotFound(ghost));
    }
}
