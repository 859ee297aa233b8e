//! Configuration loading utilities

use super::{Cli, SeedConfig, StoreConfig};
use crate::utils::error::{Result, SeederError};
use tracing::debug;

/// Load `.env` from the working directory if there is one.
///
/// A missing file is not an error; a malformed one is.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(SeederError::config(format!(
            "Failed to load .env file: {}",
            e
        ))),
    }
}

impl SeedConfig {
    /// Build and validate a configuration from parsed arguments
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let config = SeedConfig {
            store: StoreConfig {
                url: cli.url.unwrap_or_default().trim().to_string(),
                api_key: cli.key.unwrap_or_default().trim().to_string(),
                table: cli.table.trim().to_string(),
                timeout: cli.timeout_secs,
            },
            batch_size: cli.batch_size,
            data_file: cli.data_file,
            dry_run: cli.dry_run,
            log_format: cli.log_format,
        };

        config.validate()?;
        debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }
}
