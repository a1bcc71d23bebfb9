//! The tagged entity type and the per-kind resource trait.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

use super::{Film, Person, Planet, Species, Starship, Vehicle};
use crate::types::ResourceKind;

/// A record type served under one resource kind.
pub trait Resource: DeserializeOwned + Serialize + Send + Sync + 'static {
    /// The kind this record is listed under.
    const KIND: ResourceKind;

    /// The record's self URL.
    fn url(&self) -> &str;

    /// The record's display name (the title, for films).
    fn name(&self) -> &str;

    /// Wrap the record in the tagged [`Entity`] type.
    fn into_entity(self) -> Entity;
}

macro_rules! impl_resource {
    ($record:ident, $kind:ident, $name:ident) => {
        impl Resource for $record {
            const KIND: ResourceKind = ResourceKind::$kind;

            fn url(&self) -> &str {
                &self.url
            }

            fn name(&self) -> &str {
                &self.$name
            }

            fn into_entity(self) -> Entity {
                Entity::$record(self)
            }
        }

        impl From<$record> for Entity {
            fn from(record: $record) -> Self {
                Entity::$record(record)
            }
        }
    };
}

impl_resource!(Person, People, name);
impl_resource!(Planet, Planets, name);
impl_resource!(Film, Films, title);
impl_resource!(Species, Species, name);
impl_resource!(Vehicle, Vehicles, name);
impl_resource!(Starship, Starships, name);

/// Any catalog record.
///
/// Serializes as the inner record, without a tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entity {
    Person(Person),
    Planet(Planet),
    Film(Film),
    Species(Species),
    Vehicle(Vehicle),
    Starship(Starship),
}

impl Entity {
    /// Returns the kind of the wrapped record.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Entity::Person(_) => Person::KIND,
            Entity::Planet(_) => Planet::KIND,
            Entity::Film(_) => Film::KIND,
            Entity::Species(_) => Species::KIND,
            Entity::Vehicle(_) => Vehicle::KIND,
            Entity::Starship(_) => Starship::KIND,
        }
    }

    /// Returns the display name (the title, for films).
    pub fn name(&self) -> &str {
        match self {
            Entity::Person(r) => r.name(),
            Entity::Planet(r) => r.name(),
            Entity::Film(r) => r.name(),
            Entity::Species(r) => r.name(),
            Entity::Vehicle(r) => r.name(),
            Entity::Starship(r) => r.name(),
        }
    }

    /// Returns the self URL.
    pub fn url(&self) -> &str {
        match self {
            Entity::Person(r) => r.url(),
            Entity::Planet(r) => r.url(),
            Entity::Film(r) => r.url(),
            Entity::Species(r) => r.url(),
            Entity::Vehicle(r) => r.url(),
            Entity::Starship(r) => r.url(),
        }
    }
}

/// Formats as `[Kind] name`.
impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind().display_name(), self.name())
    }
}
