//! Subcommand implementations.

pub mod cast;
pub mod get;
pub mod list;
pub mod resolve;

use anyhow::{Context, Result};
use tracing::debug;

use swapi_http::{ClientConfig, SwapiClient};

use crate::cli::Commands;

pub async fn handle(command: Commands, config: ClientConfig) -> Result<()> {
    debug!(api = %config.api_url, "Using API");

    match command {
        Commands::Resolve(args) => resolve::run(args, &config.api_url),
        Commands::Get(args) => get::run(args, &connect(config)?).await,
        Commands::List(args) => list::run(args, &connect(config)?).await,
        Commands::Cast(args) => cast::run(args, &connect(config)?).await,
    }
}

fn connect(config: ClientConfig) -> Result<SwapiClient> {
    SwapiClient::with_config(config).context("Failed to create HTTP client")
}
