//! CLI argument definitions.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use swapi_core::{ApiUrl, DEFAULT_API_URL};
use swapi_http::ClientConfig;

use crate::commands::{cast, get, list, resolve};

/// Star Wars API explorer.
#[derive(Parser, Debug)]
#[command(name = "swapi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Base URL of the API
    #[arg(long, global = true, env = "SWAPI_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Build the client configuration from the global options.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let api = ApiUrl::new(&self.api_url).context("Invalid API URL")?;

        let mut config = ClientConfig::new(api);
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a single record
    Get(get::GetArgs),

    /// List records of one kind, page by page
    List(list::ListArgs),

    /// Split a resource URL into kind and id
    Resolve(resolve::ResolveArgs),

    /// List the people appearing in a film
    Cast(cast::CastArgs),
}
