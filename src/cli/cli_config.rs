use std::{fs, path::{Path, PathBuf}};
use serde::{Serialize, Deserialize};
use anyhow::{self, Context};

use stockroom::Quantity;

/// Optional defaults for the CLI, read from a TOML file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub ledger: Option<PathBuf>,
    pub low_stock_threshold: Option<Quantity>,
}

impl AppConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        let config = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }
}
