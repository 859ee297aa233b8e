//! seed-cities - populate the cities table
//!
//! Runs the full seed with no arguments; see `--help` for overrides.

use city_seeder::utils::init_logging;
use city_seeder::{Cli, SeedConfig, SeedSummary, Seeder, config, exit_code};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // .env must be applied before clap reads its env fallbacks
    let dotenv = config::load_dotenv();
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let result = match dotenv {
        Ok(()) => seed(cli).await,
        Err(e) => Err(e),
    };
    exit_code(&result)
}

async fn seed(cli: Cli) -> city_seeder::Result<SeedSummary> {
    let config = SeedConfig::from_cli(cli)?;
    Seeder::new(config)?.run().await
}
