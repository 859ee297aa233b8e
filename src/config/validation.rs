//! Configuration validation

use super::{SeedConfig, StoreConfig};
use crate::utils::error::{Result, SeederError};
use crate::utils::is_valid_url;

impl StoreConfig {
    /// Check the connection settings needed to reach the store
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(SeederError::config(
                "Store URL not provided: pass --url or set SUPABASE_URL",
            ));
        }
        if !is_valid_url(&self.url) {
            return Err(SeederError::config(format!(
                "Store URL must be an http(s) URL, got '{}'",
                self.url
            )));
        }
        if self.api_key.is_empty() {
            return Err(SeederError::config(
                "Store API key not provided: pass --key or set SUPABASE_KEY",
            ));
        }
        if self.timeout == 0 {
            return Err(SeederError::config("Timeout must be greater than 0"));
        }
        Ok(())
    }
}

impl SeedConfig {
    /// Check the settings that do not involve the store connection
    pub fn validate_batching(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(SeederError::config("Batch size must be greater than 0"));
        }
        if self.store.table.is_empty() {
            return Err(SeederError::config("Table name cannot be empty"));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_batching()?;
        if !self.dry_run {
            self.store.validate()?;
        }
        Ok(())
    }
}
