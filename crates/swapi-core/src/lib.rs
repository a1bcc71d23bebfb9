//! swapi-core - Core types for the Star Wars API.
//!
//! This crate holds the catalog entity model, URL handling, the error type
//! and the paginated fetch logic. Network access goes through the [`Fetch`]
//! trait; `swapi-http` provides the reqwest-backed implementation.

pub mod entity;
pub mod error;
pub mod fetcher;
pub mod traits;
pub mod types;

pub use entity::{Entity, Film, PagedResults, Person, Planet, Resource, Species, Starship, Vehicle};
pub use error::Error;
pub use traits::Fetch;
pub use types::{ApiUrl, DEFAULT_API_URL, ResourceKind, ResourceUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
