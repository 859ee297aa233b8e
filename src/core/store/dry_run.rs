//! Store that never leaves the process

use super::{CityStore, StoreError, UpsertOptions};
use crate::core::types::CityRecord;
use async_trait::async_trait;
use tracing::info;

/// Accepts every chunk and logs what would have been sent
#[derive(Debug, Clone, Default)]
pub struct DryRunStore {
    table: String,
}

impl DryRunStore {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

#[async_trait]
impl CityStore for DryRunStore {
    async fn upsert(&self, rows: &[CityRecord], options: &UpsertOptions) -> Result<(), StoreError> {
        info!(
            "[dry run] would upsert {} rows into '{}' (on_conflict={}, ignore_duplicates={})",
            rows.len(),
            self.table,
            options.conflict_target(),
            options.ignore_duplicates
        );
        Ok(())
    }
}
