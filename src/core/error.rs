use std::error;

/// Why the ledger refused to apply an add.
/// A rejected add leaves the ledger untouched and records nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Occurs when the item identifier is an empty string.
    EmptyItem,
    /// Occurs when the quantity is NaN or infinite,
    /// which cannot be accumulated meaningfully.
    NonFiniteQuantity,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::EmptyItem => {
                write!(f, "item identifier is empty")
            },
            RejectReason::NonFiniteQuantity => {
                write!(f, "quantity is not a finite number")
            }
        }
    }
}

impl error::Error for RejectReason {}
