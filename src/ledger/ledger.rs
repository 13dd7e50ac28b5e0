use std::{collections::BTreeMap, fmt};

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{AsTransaction, Transaction};
use crate::errors::{LedgerError, Result};

/// Stable handle for a transaction held by a [`Ledger`].
///
/// Ids are assigned on `add`, increase monotonically and are never reused, so
/// two field-for-field identical transactions still have distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TransactionId(u64);

impl TransactionId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    /// Accepts `12` as well as `#12`.
    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = value.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        digits.parse::<u64>().map(TransactionId)
    }
}

/// A transaction together with the id the ledger assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    pub id: TransactionId,
    pub transaction: Transaction,
}

impl AsTransaction for LedgerEntry {
    fn transaction(&self) -> &Transaction {
        &self.transaction
    }
}

/// Change notification emitted after every successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEvent {
    Added { id: TransactionId, revision: u64 },
    Updated { id: TransactionId, revision: u64 },
    Removed { id: TransactionId, revision: u64 },
}

impl LedgerEvent {
    pub fn id(&self) -> TransactionId {
        match self {
            LedgerEvent::Added { id, .. }
            | LedgerEvent::Updated { id, .. }
            | LedgerEvent::Removed { id, .. } => *id,
        }
    }

    pub fn revision(&self) -> u64 {
        match self {
            LedgerEvent::Added { revision, .. }
            | LedgerEvent::Updated { revision, .. }
            | LedgerEvent::Removed { revision, .. } => *revision,
        }
    }
}

/// Handle returned by [`Ledger::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&LedgerEvent)>;

/// The authoritative, ordered collection of recorded transactions.
///
/// Entries live in a map keyed by [`TransactionId`]; because ids only grow,
/// iteration order is insertion order and an update keeps its position.
/// The ledger is single-threaded: listeners are not `Send` and mutations must
/// come from the thread that owns it.
pub struct Ledger {
    entries: BTreeMap<TransactionId, Transaction>,
    next_id: u64,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("entries", &self.entries.len())
            .field("next_id", &self.next_id)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 1,
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Appends a transaction and returns its newly assigned id.
    pub fn add(&mut self, transaction: Transaction) -> Result<TransactionId> {
        if let Err(err) = transaction.validate() {
            warn!(error = %err, "rejected transaction on add");
            return Err(err);
        }
        let id = TransactionId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, transaction);
        debug!(%id, len = self.entries.len(), "transaction added");
        self.commit(|revision| LedgerEvent::Added { id, revision });
        Ok(id)
    }

    /// Replaces the transaction at `id` wholesale, returning the old value.
    pub fn update(&mut self, id: TransactionId, transaction: Transaction) -> Result<Transaction> {
        if let Err(err) = transaction.validate() {
            warn!(%id, error = %err, "rejected transaction on update");
            return Err(err);
        }
        let slot = self.entries.get_mut(&id).ok_or_else(|| {
            warn!(%id, "update of unknown transaction");
            LedgerError::NotFound(id)
        })?;
        let previous = std::mem::replace(slot, transaction);
        debug!(%id, "transaction updated");
        self.commit(|revision| LedgerEvent::Updated { id, revision });
        Ok(previous)
    }

    /// Removes the transaction at `id`. Confirmation is the caller's job.
    pub fn remove(&mut self, id: TransactionId) -> Result<Transaction> {
        let removed = self.entries.remove(&id).ok_or_else(|| {
            warn!(%id, "removal of unknown transaction");
            LedgerError::NotFound(id)
        })?;
        debug!(%id, len = self.entries.len(), "transaction removed");
        self.commit(|revision| LedgerEvent::Removed { id, revision });
        Ok(removed)
    }

    /// Order-preserving snapshot of every entry.
    pub fn all(&self) -> Vec<LedgerEntry> {
        self.entries
            .iter()
            .map(|(id, transaction)| LedgerEntry {
                id: *id,
                transaction: transaction.clone(),
            })
            .collect()
    }

    /// Borrowing iterator over the transactions in insertion order.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.entries.values()
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counter bumped by every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a listener invoked after every successful mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&LedgerEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drops a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    fn commit(&mut self, event: impl FnOnce(u64) -> LedgerEvent) {
        self.revision += 1;
        let event = event(self.revision);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
