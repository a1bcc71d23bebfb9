//! Catalog entity model.
//!
//! Records are read-only snapshots of the remote catalog, rebuilt on every
//! fetch. Relations between records are self URLs, never owned values.

#[allow(clippy::module_inception)]
mod entity;
mod page;
mod records;

pub use entity::{Entity, Resource};
pub use page::PagedResults;
pub use records::{Film, Person, Planet, Species, Starship, Vehicle};
