use thiserror::Error;

use crate::core::StockLedger;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to access ledger file: {0}")]
    Io(#[from] std::io::Error),
    #[error("ledger file is not a valid item mapping: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BackendError>;

pub trait LedgerStore {
    fn read(&self) -> Result<StockLedger>;
    fn save(&self, ledger: &StockLedger) -> Result<()>;
}
