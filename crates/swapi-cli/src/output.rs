//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use swapi_core::Entity;

const FAVOURITE_STARSHIP: &str = "Millennium Falcon";

/// Print an entity as `[Kind] name`.
pub fn entity(entity: &Entity) {
    let label = format!("[{}]", entity.kind().display_name());

    match entity {
        Entity::Starship(ship) if ship.name == FAVOURITE_STARSHIP => println!(
            "{} {} --> my favourite starship ever!!!",
            label.cyan(),
            ship.name
        ),
        _ => println!("{} {}", label.cyan(), entity.name()),
    }
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
