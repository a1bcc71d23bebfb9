//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;

use swapi_core::ResourceKind;
use swapi_http::SwapiClient;

use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Resource kind (people, planets, films, species, vehicles, starships)
    pub kind: String,

    /// Numeric id of the record
    pub id: u32,

    /// Print the full record as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: GetArgs, swapi: &SwapiClient) -> Result<()> {
    let kind: ResourceKind = args.kind.parse().context("Invalid resource kind")?;

    let entity = swapi
        .entity(kind, args.id)
        .await
        .with_context(|| format!("Failed to get {} {}", kind, args.id))?;

    if args.json {
        output::json_pretty(&entity)?;
    } else {
        output::entity(&entity);
    }

    Ok(())
}
