use crate::domain::transaction::Transaction;

/// Anything that carries a [`Transaction`] the derived views can read.
///
/// Filters, sorters and the aggregator are generic over this so they work on
/// bare transactions and on ledger entries (which also carry an id) alike.
pub trait AsTransaction {
    fn transaction(&self) -> &Transaction;
}

impl AsTransaction for Transaction {
    fn transaction(&self) -> &Transaction {
        self
    }
}

impl<T: AsTransaction + ?Sized> AsTransaction for &T {
    fn transaction(&self) -> &Transaction {
        (**self).transaction()
    }
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!(
            "{} [{} / {}] {:.2} on {}",
            self.title(),
            self.kind(),
            self.category(),
            self.amount(),
            self.date()
        )
    }
}
