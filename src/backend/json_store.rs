use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::backend::interface::{LedgerStore, Result};
use crate::core::StockLedger;

/// Stores a whole ledger as one flat JSON object of item name to quantity.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub const DEFAULT_FILE_NAME: &'static str = "inventory.json";

    pub fn new(path: impl AsRef<Path>) -> JsonStore {
        return JsonStore { path: path.as_ref().to_path_buf() };
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonStore {
    fn read(&self) -> Result<StockLedger> {
        let contents = fs::read_to_string(&self.path)?;
        let ledger = serde_json::from_str(&contents)?;
        debug!("read ledger from {}", self.path.display());
        return Ok(ledger);
    }

    fn save(&self, ledger: &StockLedger) -> Result<()> {
        let contents = serde_json::to_string(ledger)?;
        fs::write(&self.path, contents)?;
        debug!("saved {} items to {}", ledger.len(), self.path.display());
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::{BackendError, JsonStore, LedgerStore};
    use crate::core::StockLedger;

    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn stocked_ledger() -> StockLedger {
        let mut ledger = StockLedger::new();
        ledger.add("apple", 7.0);
        ledger.add("banana", -2.0);
        ledger.add("flour", 0.5);
        return ledger;
    }

    #[fixture]
    fn ledger_json() -> serde_json::Value {
        json!({
            "apple": 7.0,
            "banana": -2.0,
            "flour": 0.5
        })
    }

    #[rstest]
    fn ledger_serialize(stocked_ledger: StockLedger, ledger_json: serde_json::Value) {
        let value = serde_json::to_value(&stocked_ledger).unwrap();
        assert_eq!(value, ledger_json);
    }

    #[rstest]
    fn ledger_deserialize(stocked_ledger: StockLedger, ledger_json: serde_json::Value) {
        let parsed = serde_json::from_value::<StockLedger>(ledger_json).unwrap();
        assert_eq!(parsed, stocked_ledger);
    }

    #[rstest]
    fn empty_ledger_serializes_to_empty_object() {
        let value = serde_json::to_value(StockLedger::new()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[rstest]
    fn save_then_read_round_trip(stocked_ledger: StockLedger) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("inventory.json"));

        store.save(&stocked_ledger).unwrap();
        let reloaded = store.read().unwrap();

        assert_eq!(reloaded, stocked_ledger);
    }

    #[rstest]
    fn empty_ledger_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("inventory.json"));

        store.save(&StockLedger::new()).unwrap();
        let reloaded = store.read().unwrap();

        assert!(reloaded.is_empty());
    }

    #[rstest]
    fn save_overwrites_existing_file(stocked_ledger: StockLedger) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("inventory.json"));
        store.save(&stocked_ledger).unwrap();

        let mut smaller = StockLedger::new();
        smaller.add("rice", 3.0);
        store.save(&smaller).unwrap();

        let reloaded = store.read().unwrap();
        assert_eq!(reloaded, smaller);
        assert_eq!(reloaded.quantity("apple"), 0.0);
    }

    #[rstest]
    fn read_of_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("nowhere.json"));

        let result = store.read();

        assert!(matches!(result, Err(BackendError::Io(..))));
    }

    #[rstest]
    fn read_of_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, "not an item mapping").unwrap();

        let result = JsonStore::new(&path).read();

        assert!(matches!(result, Err(BackendError::Parse(..))));
    }

    #[rstest]
    fn persist_then_restore_reproduces_mapping(stocked_ledger: StockLedger) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        stocked_ledger.persist(&path).unwrap();
        let mut restored = StockLedger::new();
        restored.restore(&path).unwrap();

        assert_eq!(restored, stocked_ledger);
    }

    #[rstest]
    fn restore_replaces_contents_wholesale(stocked_ledger: StockLedger) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        stocked_ledger.persist(&path).unwrap();

        let mut ledger = StockLedger::new();
        ledger.add("pre-existing", 42.0);
        ledger.restore(&path).unwrap();

        assert_eq!(ledger, stocked_ledger);
        assert_eq!(ledger.quantity("pre-existing"), 0.0);
    }

    #[rstest]
    fn failed_restore_leaves_ledger_unchanged(stocked_ledger: StockLedger) {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = stocked_ledger.clone();

        let missing = ledger.restore(dir.path().join("nowhere.json"));
        assert!(missing.is_err());
        assert_eq!(ledger, stocked_ledger);

        let malformed_path = dir.path().join("broken.json");
        std::fs::write(&malformed_path, "[1, 2, 3]").unwrap();
        let malformed = ledger.restore(&malformed_path);
        assert!(malformed.is_err());
        assert_eq!(ledger, stocked_ledger);
    }
}
