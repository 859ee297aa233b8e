//! Core functionality for the seeder
//!
//! This module contains the record types, the built-in dataset, the store
//! clients and the batch loader.

pub mod batch;
pub mod dataset;
pub mod store;
pub mod types;

pub use batch::{BatchLoader, ChunkPlan, SeedSummary};
pub use dataset::{builtin_cities, load_cities_from_file};
pub use store::{CityStore, DryRunStore, PostgrestStore, StoreError, UpsertOptions};
pub use types::{CityRecord, Subdivision};
