use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use gridfall::constants::{DEFAULT_COLUMNS, DEFAULT_ROWS};

#[derive(Debug, Clone)]
pub struct Config {
    pub rows: usize,
    pub columns: usize,
    /// Fixed seed for a reproducible piece sequence
    pub seed: Option<u64>,
    /// Log destination; logging stays off without one since the terminal is in raw mode
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let rows = env::var("GRIDFALL_ROWS")
            .unwrap_or_else(|_| DEFAULT_ROWS.to_string())
            .parse::<usize>()
            .context("GRIDFALL_ROWS must be a positive number")?;
        let columns = env::var("GRIDFALL_COLUMNS")
            .unwrap_or_else(|_| DEFAULT_COLUMNS.to_string())
            .parse::<usize>()
            .context("GRIDFALL_COLUMNS must be a positive number")?;
        let seed = env::var("GRIDFALL_SEED")
            .ok()
            .map(|s| s.parse::<u64>())
            .transpose()
            .context("GRIDFALL_SEED must be an unsigned 64-bit number")?;
        let log_file = env::var_os("GRIDFALL_LOG").map(PathBuf::from);

        Ok(Self {
            rows,
            columns,
            seed,
            log_file,
        })
    }
}
