//! Cast command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use swapi_core::Resource;
use swapi_http::SwapiClient;

use crate::output;

#[derive(Args, Debug)]
pub struct CastArgs {
    /// Text to search film titles for (the first match is used)
    pub film: String,
}

pub async fn run(args: CastArgs, swapi: &SwapiClient) -> Result<()> {
    let Some(cast) = swapi
        .cast(&args.film)
        .await
        .context("Failed to collect cast")?
    else {
        bail!("No film matches '{}'", args.film);
    };

    output::field("Film", &cast.film.title);
    println!();

    for person in cast.people {
        output::entity(&person.into_entity());
    }

    Ok(())
}
