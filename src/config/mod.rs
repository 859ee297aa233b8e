//! Configuration management for the seeder
//!
//! Settings come from command-line flags, falling back to environment
//! variables (optionally from a `.env` file) and then to defaults.

mod args;
mod loader;
mod validation;

pub use args::Cli;
pub use loader::load_dotenv;

use crate::utils::LogFormat;
use std::path::PathBuf;
use std::time::Duration;

/// Default target table
pub const DEFAULT_TABLE: &str = "cities";
/// Default records per upsert request
pub const DEFAULT_BATCH_SIZE: usize = 20;
/// Default per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the remote store
#[derive(Clone)]
pub struct StoreConfig {
    /// Project URL, e.g. `https://abcd.supabase.co`
    pub url: String,
    /// API key; never logged
    pub api_key: String,
    /// Target table
    pub table: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            table: DEFAULT_TABLE.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl StoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("api_key", &"[REDACTED]")
            .field("table", &self.table)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Full configuration of one seeding run
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub store: StoreConfig,
    /// Records per upsert request
    pub batch_size: usize,
    /// Replacement dataset; the built-in list is used when unset
    pub data_file: Option<PathBuf>,
    /// Skip network I/O and only log batches
    pub dry_run: bool,
    pub log_format: LogFormat,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            data_file: None,
            dry_run: false,
            log_format: LogFormat::default(),
        }
    }
}
