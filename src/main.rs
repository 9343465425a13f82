use stockroom::{Journal, JsonStore, StockLedger};

fn main() -> anyhow::Result<()> {
    let mut ledger = StockLedger::new();
    let mut journal = Journal::new();

    ledger.add_logged("apple", 10.0, &mut journal);
    ledger.add_logged("banana", -2.0, &mut journal);
    ledger.add_logged("", 10.0, &mut journal); // rejected, nothing recorded
    ledger.remove("apple", 3.0);
    ledger.remove("orange", 1.0);

    println!("Apple stock: {}", ledger.quantity("apple"));
    println!("Low items: {:?}", ledger.low_stock(StockLedger::DEFAULT_LOW_STOCK_THRESHOLD));

    ledger.persist(JsonStore::DEFAULT_FILE_NAME)?;
    ledger.restore(JsonStore::DEFAULT_FILE_NAME)?;

    println!("Items Report");
    for (item, qty) in ledger.items() {
        println!("{} -> {}", item, qty);
    }

    for entry in &journal {
        println!("{}", entry);
    }
    return Ok(());
}
