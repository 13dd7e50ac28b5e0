use crate::core::{
    filter::TransactionFilter,
    sorter::{SortDirection, SortKey, SortOrder},
};
use crate::ledger::{Ledger, LedgerEntry};

/// Current table settings: which rows are visible and in what order.
///
/// Holds no transactions; [`TransactionView::project`] recomputes the rows
/// from the ledger each time it is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransactionView {
    pub filter: TransactionFilter,
    pub order: SortOrder,
}

impl TransactionView {
    pub fn new(filter: TransactionFilter, order: SortOrder) -> Self {
        Self { filter, order }
    }

    pub fn with_sort(key: SortKey, direction: SortDirection) -> Self {
        Self::new(TransactionFilter::default(), SortOrder::new(key, direction))
    }

    /// Filters then sorts the ledger's current entries.
    pub fn project(&self, ledger: &Ledger) -> Vec<LedgerEntry> {
        let visible = self.filter.apply(&ledger.all());
        self.order.apply(&visible)
    }
}
