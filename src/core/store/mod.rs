//! Store clients
//!
//! The batch loader only talks to [`CityStore`]; the concrete client decides
//! how rows reach the remote table.

mod dry_run;
mod error;
mod postgrest;

pub use dry_run::DryRunStore;
pub use error::StoreError;
pub use postgrest::PostgrestStore;

use crate::core::types::CityRecord;
use async_trait::async_trait;

/// Columns the store uses to detect an existing row
pub const DEFAULT_CONFLICT_TARGET: [&str; 2] = ["name", "country"];

/// Conflict handling for an upsert call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOptions {
    /// Conflict target columns
    pub on_conflict: Vec<String>,
    /// Skip the insert on conflict instead of updating the existing row
    pub ignore_duplicates: bool,
}

impl Default for UpsertOptions {
    fn default() -> Self {
        Self {
            on_conflict: DEFAULT_CONFLICT_TARGET.iter().map(|c| c.to_string()).collect(),
            ignore_duplicates: true,
        }
    }
}

impl UpsertOptions {
    /// Comma separated conflict target, as PostgREST expects it
    pub fn conflict_target(&self) -> String {
        self.on_conflict.join(",")
    }
}

/// Remote table that accepts batched upserts of city rows
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityStore: Send + Sync {
    /// Upsert one chunk of rows. Returns once the store has answered.
    async fn upsert(&self, rows: &[CityRecord], options: &UpsertOptions)
    -> Result<(), StoreError>;
}
