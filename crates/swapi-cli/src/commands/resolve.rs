//! Resolve command implementation.

use anyhow::{Context, Result};
use clap::Args;

use swapi_core::{ApiUrl, ResourceUrl};

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Self URL of a record (e.g., https://swapi.dev/api/species/5/)
    pub url: String,
}

pub fn run(args: ResolveArgs, api: &ApiUrl) -> Result<()> {
    let resolved = ResourceUrl::resolve(api, &args.url).context("Invalid resource URL")?;
    println!("{}", resolved);
    Ok(())
}
