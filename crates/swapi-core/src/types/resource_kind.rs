//! Resource kind type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// One of the six catalog categories served by the API.
///
/// Parses from the API path segment (`people`, `starships`, ...) as well as
/// the singular display name (`person`, `starship`, ...), ignoring case.
///
/// # Example
///
/// ```
/// use swapi_core::ResourceKind;
///
/// let kind: ResourceKind = "person".parse().unwrap();
/// assert_eq!(kind, ResourceKind::People);
/// assert_eq!(kind.segment(), "people");
/// assert_eq!(kind.display_name(), "Person");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    People,
    Planets,
    Films,
    Species,
    Vehicles,
    Starships,
}

impl ResourceKind {
    /// All kinds, in the order the API root lists them.
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::People,
        ResourceKind::Planets,
        ResourceKind::Films,
        ResourceKind::Species,
        ResourceKind::Vehicles,
        ResourceKind::Starships,
    ];

    /// Returns the path segment used by the API (`/api/{segment}/`).
    pub fn segment(&self) -> &'static str {
        match self {
            ResourceKind::People => "people",
            ResourceKind::Planets => "planets",
            ResourceKind::Films => "films",
            ResourceKind::Species => "species",
            ResourceKind::Vehicles => "vehicles",
            ResourceKind::Starships => "starships",
        }
    }

    /// Returns the singular name of one record of this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::People => "Person",
            ResourceKind::Planets => "Planet",
            ResourceKind::Films => "Film",
            ResourceKind::Species => "Species",
            ResourceKind::Vehicles => "Vehicle",
            ResourceKind::Starships => "Starship",
        }
    }

    /// Parse a kind name, treating `None` as a missing argument.
    pub fn parse_name(name: Option<&str>) -> Result<Self, Error> {
        match name {
            Some(name) => name.parse(),
            None => Err(InvalidInputError::Missing {
                what: "resource kind",
            }
            .into()),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(InvalidInputError::Missing {
                what: "resource kind",
            }
            .into());
        }

        ResourceKind::ALL
            .into_iter()
            .find(|kind| {
                name.eq_ignore_ascii_case(kind.segment())
                    || name.eq_ignore_ascii_case(kind.display_name())
            })
            .ok_or_else(|| {
                InvalidInputError::ResourceKind {
                    value: s.to_string(),
                }
                .into()
            })
    }
}
