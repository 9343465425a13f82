use std::collections::HashMap;
use std::path::Path;

use log::debug;
use serde::{Serialize, Deserialize};

use crate::backend::{JsonStore, LedgerStore, BackendError};
use crate::core::error::RejectReason;
use crate::core::journal::{Journal, LogEntry};

pub type Quantity = f32;

type QuantityByItem = HashMap<String, Quantity>;

/// Outcome of an add. Rejected adds mutate nothing; callers that do not
/// care about the distinction can drop the value.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AddOutcome {
    Added { new_quantity: Quantity },
    Rejected(RejectReason),
}

/// Outcome of a remove. Removing an untracked item is not an error.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RemoveOutcome {
    Reduced { remaining: Quantity },
    /// The quantity dropped to zero or below and the item is no longer tracked.
    Cleared,
    NotTracked,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockLedger {
    stock: QuantityByItem,
}

impl StockLedger {
    pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = 5.0;

    pub fn new() -> StockLedger {
        return StockLedger { stock: HashMap::new() };
    }

    /// Add `qty` (possibly negative or fractional) to an item's stock,
    /// tracking the item from zero if it was unknown. The resulting
    /// quantity is not clamped; a negative add can drive it below zero.
    pub fn add(&mut self, item: &str, qty: Quantity) -> AddOutcome {
        if let Some(reason) = Self::validate(item, qty) {
            debug!("ignoring add of {:?}: {}", item, reason);
            return AddOutcome::Rejected(reason);
        }

        let total = self.stock.entry(item.to_owned()).or_insert(0 as Quantity);
        *total += qty;
        return AddOutcome::Added { new_quantity: *total };
    }

    /// Same as [`add`](Self::add), appending one entry to the caller's
    /// journal when the add is applied.
    pub fn add_logged(&mut self, item: &str, qty: Quantity, journal: &mut Journal) -> AddOutcome {
        let outcome = self.add(item, qty);
        if let AddOutcome::Added { .. } = outcome {
            journal.push(LogEntry::added(item, qty));
        }
        return outcome;
    }

    fn validate(item: &str, qty: Quantity) -> Option<RejectReason> {
        if item.is_empty() {
            return Some(RejectReason::EmptyItem);
        }
        if !qty.is_finite() {
            return Some(RejectReason::NonFiniteQuantity);
        }
        return None;
    }

    /// Subtract `qty` from an item's stock. An item whose quantity drops
    /// to zero or below is deleted outright and no longer tracked.
    pub fn remove(&mut self, item: &str, qty: Quantity) -> RemoveOutcome {
        match self.stock.get_mut(item) {
            None => RemoveOutcome::NotTracked,
            Some(total) => {
                *total -= qty;
                if *total <= 0 as Quantity {
                    self.stock.remove(item);
                    RemoveOutcome::Cleared
                } else {
                    RemoveOutcome::Reduced { remaining: *total }
                }
            }
        }
    }

    /// Current quantity for an item, zero when untracked.
    pub fn quantity(&self, item: &str) -> Quantity {
        return self.stock.get(item).copied().unwrap_or(0 as Quantity);
    }

    /// Items with quantity strictly below `threshold`, lexicographically sorted.
    pub fn low_stock(&self, threshold: Quantity) -> Vec<&str> {
        let mut low: Vec<&str> = self.stock.iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.as_str())
            .collect();
        low.sort_unstable();
        return low;
    }

    /// Snapshot of every tracked item and its quantity, sorted by item name.
    pub fn items(&self) -> Vec<(&str, Quantity)> {
        let mut all: Vec<(&str, Quantity)> = self.stock.iter()
            .map(|(item, qty)| (item.as_str(), *qty))
            .collect();
        all.sort_unstable_by(|left, right| left.0.cmp(right.0));
        return all;
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Write the whole ledger to `path` as one JSON object, replacing
    /// whatever file was there.
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<(), BackendError> {
        return JsonStore::new(path).save(self);
    }

    /// Replace the ledger's contents with the mapping parsed from `path`.
    /// On any read or parse failure the ledger is left as it was.
    pub fn restore(&mut self, path: impl AsRef<Path>) -> Result<(), BackendError> {
        *self = JsonStore::new(path).read()?;
        return Ok(());
    }
}
