//! Command-line arguments
//!
//! Every option has a default or an environment fallback, so running the
//! binary with no arguments performs the full seed.

use crate::utils::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-cities",
    version,
    about = "Seed the cities table with the built-in city list"
)]
pub struct Cli {
    /// Project URL of the PostgREST/Supabase backend
    #[arg(long, env = "SUPABASE_URL")]
    pub url: Option<String>,

    /// API key sent as `apikey` and bearer token
    #[arg(long, env = "SUPABASE_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Target table
    #[arg(long, env = "SEED_TABLE", default_value = super::DEFAULT_TABLE)]
    pub table: String,

    /// Records per upsert request
    #[arg(long, env = "SEED_BATCH_SIZE", default_value_t = super::DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Per-request timeout in seconds
    #[arg(long = "timeout", env = "SEED_TIMEOUT_SECS", default_value_t = super::DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Load cities from a .json/.yaml file instead of the built-in list
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Log every batch without contacting the store
    #[arg(long)]
    pub dry_run: bool,

    /// Log output format (text or json)
    #[arg(long, env = "SEED_LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,
}
