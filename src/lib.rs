mod core;
mod backend;

pub use crate::core::{StockLedger, Quantity, Journal, LogEntry};
pub use crate::core::{AddOutcome, RemoveOutcome, RejectReason};
pub use crate::core::{ledger, journal, error};
pub use crate::backend::{json_store, JsonStore, LedgerStore, BackendError};
