//! # city-seeder
//!
//! Seeds a hosted PostgREST/Supabase table with a fixed list of cities.
//!
//! The list is split into chunks and each chunk is upserted in turn with the
//! conflict target `(name, country)` and duplicate rows skipped. The first
//! store error stops the run; nothing is retried or rolled back.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use city_seeder::{SeedConfig, Seeder, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SeedConfig {
//!         store: StoreConfig {
//!             url: "https://abcd.supabase.co".to_string(),
//!             api_key: "anon-key".to_string(),
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     };
//!
//!     let summary = Seeder::new(config)?.run().await?;
//!     println!("{} batches sent", summary.batches);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

pub use config::{Cli, SeedConfig, StoreConfig};
pub use crate::core::{
    BatchLoader, ChunkPlan, CityRecord, CityStore, DryRunStore, PostgrestStore, SeedSummary,
    StoreError, Subdivision, UpsertOptions, builtin_cities,
};
pub use utils::error::{Result, SeederError};

use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info};

/// One configured seeding run
pub struct Seeder {
    config: SeedConfig,
    store: Arc<dyn CityStore>,
}

impl Seeder {
    /// Build the store client described by `config`
    pub fn new(config: SeedConfig) -> Result<Self> {
        config.validate()?;

        let store: Arc<dyn CityStore> = if config.dry_run {
            Arc::new(DryRunStore::new(config.store.table.clone()))
        } else {
            Arc::new(PostgrestStore::new(&config.store)?)
        };

        Ok(Self { config, store })
    }

    /// Use a caller-supplied store instead of the configured one
    pub fn with_store(config: SeedConfig, store: Arc<dyn CityStore>) -> Result<Self> {
        config.validate_batching()?;
        Ok(Self { config, store })
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Load the dataset and push it through the batch loader
    pub async fn run(self) -> Result<SeedSummary> {
        let loaded;
        let cities: &[CityRecord] = match &self.config.data_file {
            Some(path) => {
                loaded = crate::core::load_cities_from_file(path)?;
                &loaded
            }
            None => builtin_cities(),
        };

        let loader = BatchLoader::new(self.store, self.config.batch_size);
        info!(
            "Seeding {} cities into '{}' in batches of {}{}",
            cities.len(),
            self.config.store.table,
            loader.batch_size(),
            if self.config.dry_run { " (dry run)" } else { "" }
        );

        loader.run(cities).await
    }
}

/// Map the outcome of a run to the process exit status.
///
/// Store failures were already logged by the loader and are not repeated.
/// Setup errors (config, data file, client) are logged here, once.
pub fn exit_code(result: &Result<SeedSummary>) -> ExitCode {
    match result {
        Ok(summary) => {
            debug!(
                "Seeded {} cities in {} batches ({:?})",
                summary.records, summary.batches, summary.elapsed
            );
            ExitCode::SUCCESS
        }
        Err(e) if e.is_store_failure() => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
