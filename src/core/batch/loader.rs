//! Batch loader
//!
//! Pushes a record list into a [`CityStore`] one chunk at a time. Each upsert
//! is awaited before the next is issued; the first failure ends the run.

use super::plan::ChunkPlan;
use crate::core::store::{CityStore, UpsertOptions};
use crate::core::types::CityRecord;
use crate::utils::error::{Result, SeederError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    /// Upsert calls issued
    pub batches: usize,
    /// Records sent across all calls
    pub records: usize,
    pub elapsed: Duration,
}

/// Sequential chunked upserter
pub struct BatchLoader {
    store: Arc<dyn CityStore>,
    batch_size: usize,
    options: UpsertOptions,
}

impl BatchLoader {
    pub fn new(store: Arc<dyn CityStore>, batch_size: usize) -> Self {
        Self {
            store,
            batch_size,
            options: UpsertOptions::default(),
        }
    }

    pub fn with_options(mut self, options: UpsertOptions) -> Self {
        self.options = options;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn options(&self) -> &UpsertOptions {
        &self.options
    }

    /// Upsert `records` in order, `batch_size` at a time.
    ///
    /// Logs `Inserting batch i/total` before every call and a single success
    /// line after the last one. On the first store error the error is logged
    /// and returned; later batches are never sent and earlier ones stay.
    pub async fn run(&self, records: &[CityRecord]) -> Result<SeedSummary> {
        let plan = ChunkPlan::new(records.len(), self.batch_size)?;
        let total = plan.total_batches();
        let started = Instant::now();

        debug!(
            "Seeding {} records in {} batches of up to {} (on_conflict={})",
            plan.len(),
            total,
            plan.batch_size(),
            self.options.conflict_target()
        );

        for (index, range) in plan.ranges().enumerate() {
            let batch = index + 1;
            info!("Inserting batch {}/{}", batch, total);

            if let Err(e) = self.store.upsert(&records[range], &self.options).await {
                error!("Error inserting cities: {}", e);
                return Err(SeederError::store_write(batch, total, e));
            }
        }

        info!("All cities inserted successfully!");
        Ok(SeedSummary {
            batches: total,
            records: plan.len(),
            elapsed: started.elapsed(),
        })
    }
}
