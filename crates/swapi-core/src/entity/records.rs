//! Catalog record types.
//!
//! Field names follow the API's JSON. Measures are kept as strings because
//! the service reports values such as `"unknown"`, `"n/a"` or `"1,000"`.
//! Cross references to other records are self URLs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A person or character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub mass: String,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub skin_color: String,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default)]
    pub gender: String,
    /// The planet this person was born on or inhabits.
    #[serde(default)]
    pub homeworld: Option<String>,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}

impl Person {
    /// Returns true if this person appears in the film with the given URL.
    pub fn appears_in(&self, film_url: &str) -> bool {
        self.films.iter().any(|url| url == film_url)
    }
}

/// A planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    #[serde(default)]
    pub rotation_period: String,
    #[serde(default)]
    pub orbital_period: String,
    #[serde(default)]
    pub diameter: String,
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub gravity: String,
    #[serde(default)]
    pub terrain: String,
    #[serde(default)]
    pub surface_water: String,
    #[serde(default)]
    pub population: String,
    #[serde(default)]
    pub residents: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}

/// A film of the saga.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    #[serde(default)]
    pub episode_id: u32,
    #[serde(default)]
    pub opening_crawl: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub producer: String,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub planets: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}

/// A species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    #[serde(default)]
    pub classification: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub average_height: String,
    #[serde(default)]
    pub skin_colors: String,
    #[serde(default)]
    pub hair_colors: String,
    #[serde(default)]
    pub eye_colors: String,
    #[serde(default)]
    pub average_lifespan: String,
    /// Null for species without a known homeworld.
    #[serde(default)]
    pub homeworld: Option<String>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}

/// A vehicle without hyperdrive capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub name: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub cost_in_credits: String,
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub max_atmosphering_speed: String,
    #[serde(default)]
    pub crew: String,
    #[serde(default)]
    pub passengers: String,
    #[serde(default)]
    pub cargo_capacity: String,
    #[serde(default)]
    pub consumables: String,
    #[serde(default)]
    pub vehicle_class: String,
    #[serde(default)]
    pub pilots: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}

/// A starship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Starship {
    pub name: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub cost_in_credits: String,
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub max_atmosphering_speed: String,
    #[serde(default)]
    pub crew: String,
    #[serde(default)]
    pub passengers: String,
    #[serde(default)]
    pub cargo_capacity: String,
    #[serde(default)]
    pub consumables: String,
    #[serde(default)]
    pub hyperdrive_rating: String,
    /// Megalights per hour.
    #[serde(default, rename = "MGLT")]
    pub mglt: String,
    #[serde(default)]
    pub starship_class: String,
    #[serde(default)]
    pub pilots: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub edited: Option<DateTime<Utc>>,
    pub url: String,
}
