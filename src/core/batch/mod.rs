//! Batched seeding of city records
//!
//! [`ChunkPlan`] decides how the list is split, [`BatchLoader`] walks the
//! plan against a store.

mod loader;
mod plan;


pub use loader::{BatchLoader, SeedSummary};
pub use plan::ChunkPlan;
