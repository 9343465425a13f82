mod cli_config;
use cli_config::AppConfig;

use stockroom::{StockLedger, Quantity, Journal,
    AddOutcome, RemoveOutcome,
    JsonStore, LedgerStore};

use std::path::PathBuf;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// Path to the inventory file to operate on
    #[clap(value_parser)]
    path: Option<PathBuf>,

    /// TOML file supplying defaults (ledger path, low-stock threshold)
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Action to perform
    #[clap(subcommand)]
    action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Read and display all tracked items
    Report,
    /// List items below the low-stock threshold
    Low(LowStock),
    /// Add quantity to an item
    Add(AddItem),
    /// Remove quantity from an item
    Remove(RemoveItem),
    /// Show the quantity of a single item
    Get(GetItem),
}

#[derive(Args, Debug)]
struct LowStock {
    /// Quantity below which an item counts as low
    #[clap(short, long, value_parser)]
    threshold: Option<Quantity>,
}

#[derive(Args, Debug)]
struct AddItem {
    /// Name of the item to add stock for
    #[clap(value_parser)]
    item: String,

    /// Quantity to add; may be negative or fractional
    #[clap(value_parser, allow_negative_numbers = true)]
    qty: Quantity,
}

#[derive(Args, Debug)]
struct RemoveItem {
    /// Name of the item to remove stock from
    #[clap(value_parser)]
    item: String,

    /// Quantity to remove
    #[clap(value_parser, allow_negative_numbers = true)]
    qty: Quantity,
}

#[derive(Args, Debug)]
struct GetItem {
    /// Name of the item to look up
    #[clap(value_parser)]
    item: String,
}

fn print_report(ledger: &StockLedger, threshold: Quantity) {
    println!("Items Report");
    for (item, qty) in ledger.items() {
        let color = if qty < threshold {
            colored::ColoredString::bright_red
        } else {
            colored::ColoredString::normal
        };
        let fmt_qty = color(format!("{}", qty).white());
        println!("{} -> {}", item, fmt_qty);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => AppConfig::read(path)?,
        None => AppConfig::default(),
    };

    let path = args.path.clone()
        .or_else(|| config.ledger.clone())
        .unwrap_or_else(|| PathBuf::from(JsonStore::DEFAULT_FILE_NAME));
    let threshold = config.low_stock_threshold
        .unwrap_or(StockLedger::DEFAULT_LOW_STOCK_THRESHOLD);

    let store = JsonStore::new(&path);
    let mut ledger = if path.exists() {
        store.read()
            .with_context(|| format!("failed to read inventory at {}", path.display()))?
    } else {
        StockLedger::new()
    };

    let mut dirty = false;
    match &args.action {
        Subcommands::Report => {
            print_report(&ledger, threshold);
        },
        Subcommands::Low(low) => {
            for item in ledger.low_stock(low.threshold.unwrap_or(threshold)) {
                println!("{}", item);
            }
        },
        Subcommands::Get(get) => {
            println!("{} -> {}", get.item, ledger.quantity(&get.item));
        },
        Subcommands::Add(add) => {
            let mut journal = Journal::new();
            match ledger.add_logged(&add.item, add.qty, &mut journal) {
                AddOutcome::Added { .. } => dirty = true,
                AddOutcome::Rejected(reason) => anyhow::bail!("add rejected: {}", reason),
            }
            for entry in &journal {
                println!("{}", entry);
            }
        },
        Subcommands::Remove(remove) => {
            match ledger.remove(&remove.item, remove.qty) {
                RemoveOutcome::Reduced { remaining } => {
                    dirty = true;
                    println!("{} -> {}", remove.item, remaining);
                },
                RemoveOutcome::Cleared => {
                    dirty = true;
                    println!("{} cleared", remove.item);
                },
                RemoveOutcome::NotTracked => {
                    println!("{} is not tracked", remove.item);
                }
            }
        }
    }

    if dirty {
        store.save(&ledger)
            .with_context(|| format!("failed to save inventory at {}", path.display()))?;
    }
    return Ok(());
}
