//! Error handling for the seeder
//!
//! This module defines all error types used throughout the crate.

use crate::core::store::StoreError;
use thiserror::Error;

/// Result type alias for the seeder
pub type Result<T> = std::result::Result<T, SeederError>;

/// Main error type for the seeder
#[derive(Error, Debug)]
pub enum SeederError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The store rejected an upsert; remaining batches were not attempted
    #[error("Error inserting cities (batch {batch}/{total}): {source}")]
    StoreWrite {
        batch: usize,
        total: usize,
        #[source]
        source: StoreError,
    },
}

impl SeederError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn store_write(batch: usize, total: usize, source: StoreError) -> Self {
        Self::StoreWrite {
            batch,
            total,
            source,
        }
    }

    /// Whether this error came from the remote store rather than local setup
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::StoreWrite { .. })
    }
}
