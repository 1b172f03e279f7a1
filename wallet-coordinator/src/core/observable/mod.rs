//! Observable state published by the coordinator
//!
//! Each published value lives in its own single-slot, last-value-wins
//! container. A late subscriber sees the most recent published value, not
//! history. Slots are mutated only by the coordinator's result-handling
//! path; observers hold read-only receivers.

use crate::domain::entities::Wallet;
use crate::shared::error::ErrorEnvelope;
use crate::shared::types::ExportedStore;
use tokio::sync::watch;

/// Single-slot broadcast container.
///
/// Publishing replaces the slot value and wakes every subscriber; reads are
/// eventually-consistent snapshots.
#[derive(Debug)]
pub struct StateSlot<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> StateSlot<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replace the slot value and notify subscribers. Succeeds with or
    /// without live subscribers.
    pub(crate) fn publish(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Register a new subscriber. The receiver starts at the current value
    /// and is notified on every subsequent publish.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: Clone + Default> Default for StateSlot<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// The full set of values the coordinator publishes
#[derive(Debug, Default)]
pub struct ObservableState {
    pub wallets: StateSlot<Vec<Wallet>>,
    pub default_wallet: StateSlot<Option<Wallet>>,
    pub created_wallet: StateSlot<Option<Wallet>>,
    pub create_error: StateSlot<Option<ErrorEnvelope>>,
    pub exported_store: StateSlot<Option<ExportedStore>>,
    pub progress: StateSlot<bool>,
    pub error: StateSlot<Option<ErrorEnvelope>>,
}

impl ObservableState {
    pub fn new() -> Self {
        Self::default()
    }
}
