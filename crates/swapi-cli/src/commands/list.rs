//! List command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use swapi_core::ResourceKind;
use swapi_http::SwapiClient;

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Resource kind (people, planets, films, species, vehicles, starships)
    pub kind: String,

    /// Only records whose name or title contains this text
    #[arg(long)]
    pub search: Option<String>,

    /// Maximum number of pages to fetch (0 fetches nothing)
    #[arg(long, default_value_t = 1)]
    pub max_pages: u32,

    /// Print every page the service has
    #[arg(long, conflicts_with = "max_pages")]
    pub all: bool,

    /// Print one JSON object per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, swapi: &SwapiClient) -> Result<()> {
    let kind: ResourceKind = args.kind.parse().context("Invalid resource kind")?;
    let max_pages = if args.all { u32::MAX } else { args.max_pages };

    let entities = swapi
        .entities(kind, max_pages, args.search.as_deref())
        .await
        .with_context(|| format!("Failed to list {}", kind))?;

    if entities.is_empty() {
        eprintln!("{}", "No records found.".dimmed());
        return Ok(());
    }

    for entity in &entities {
        if args.json {
            output::json(entity)?;
        } else {
            output::entity(entity);
        }
    }

    Ok(())
}
