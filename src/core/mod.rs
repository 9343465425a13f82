pub mod ledger;
pub mod journal;
pub mod error;

pub use ledger::{StockLedger, Quantity, AddOutcome, RemoveOutcome};
pub use journal::{Journal, LogEntry};
pub use error::RejectReason;
