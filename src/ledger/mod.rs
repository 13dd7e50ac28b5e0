//! The ledger: owner of transaction identity and the single source of truth.

#[allow(clippy::module_inception)]
pub mod ledger;

pub use crate::domain::{Category, Transaction, TransactionDraft, TransactionKind};
pub use ledger::{Ledger, LedgerEntry, LedgerEvent, SubscriptionId, TransactionId};
