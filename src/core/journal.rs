use std::fmt;

use chrono::{DateTime, Local};

use crate::core::ledger::Quantity;

/// Caller-owned sequence of add records. The ledger never retains entries,
/// it only appends to a journal handed in by the caller.
pub type Journal = Vec<LogEntry>;

pub struct LogEntry {
    at: DateTime<Local>,
    message: String,
}

impl LogEntry {
    pub(crate) fn added(item: &str, qty: Quantity) -> LogEntry {
        LogEntry {
            at: Local::now(),
            message: format!("Added {} of {}", qty, item),
        }
    }

    pub fn at(&self) -> DateTime<Local> {
        self.at
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.at, self.message)
    }
}

impl fmt::Debug for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogEntry {}", self.message)
    }
}
