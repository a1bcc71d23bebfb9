//! Resource URL resolution.

use std::fmt;
use url::Url;

use super::{ApiUrl, ResourceKind};
use crate::error::{Error, InvalidInputError};

/// The `(kind, id)` pair identified by a resource's self URL.
///
/// Self URLs have the form `{base}/api/{kind}/{id}/`. Resolution checks
/// the host against the configured API, the path shape, and the id; the
/// kind segment is kept as written and only mapped onto a
/// [`ResourceKind`] on request.
///
/// # Example
///
/// ```
/// use swapi_core::{ApiUrl, ResourceUrl};
///
/// let api = ApiUrl::new("https://swapi.dev").unwrap();
/// let resolved = ResourceUrl::resolve(&api, "https://swapi.dev/api/species/5/").unwrap();
/// assert_eq!(resolved.kind(), "species");
/// assert_eq!(resolved.id(), 5);
/// assert_eq!(resolved.to_url(&api), "https://swapi.dev/api/species/5/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceUrl {
    kind: String,
    id: u32,
}

impl ResourceUrl {
    /// Resolve a self URL against the given API.
    ///
    /// # Errors
    ///
    /// - `Missing` if the URL is blank.
    /// - `Url` if the string is not an absolute URL.
    /// - `UnknownService` if the host or port differs from the API's.
    /// - `MalformedPath` unless the path is exactly `api/{kind}/{id}`.
    /// - `InvalidIdentifier` if `{id}` is not a non-negative integer.
    pub fn resolve(api: &ApiUrl, url: impl AsRef<str>) -> Result<Self, Error> {
        let value = url.as_ref();
        if value.trim().is_empty() {
            return Err(InvalidInputError::Missing { what: "resource URL" }.into());
        }

        let parsed = Url::parse(value.trim()).map_err(|e| InvalidInputError::Url {
            value: value.to_string(),
            reason: e.to_string(),
        })?;

        Self::check_service(api, &parsed, value)?;
        Self::from_path(parsed.path(), value)
    }

    /// Resolve an optional URL, treating `None` as a missing argument.
    pub fn resolve_opt(api: &ApiUrl, url: Option<&str>) -> Result<Self, Error> {
        match url {
            Some(url) => Self::resolve(api, url),
            None => Err(InvalidInputError::Missing { what: "resource URL" }.into()),
        }
    }

    /// Create a resolved URL from its parts.
    pub fn from_parts(kind: impl Into<String>, id: u32) -> Self {
        Self {
            kind: kind.into(),
            id,
        }
    }

    /// Returns the kind segment as written in the URL.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the numeric id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Maps the kind segment onto a known resource kind.
    pub fn resource_kind(&self) -> Result<ResourceKind, Error> {
        self.kind.parse()
    }

    /// Consumes the value, returning `(kind, id)`.
    pub fn into_parts(self) -> (String, u32) {
        (self.kind, self.id)
    }

    /// Rebuild the canonical self URL under the given API.
    pub fn to_url(&self, api: &ApiUrl) -> String {
        api.self_url(&self.kind, self.id)
    }

    fn check_service(api: &ApiUrl, url: &Url, original: &str) -> Result<(), Error> {
        let same_host = url.host_str() == api.host();
        let same_port = url.port_or_known_default() == api.port();

        if same_host && same_port {
            return Ok(());
        }

        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        };

        Err(InvalidInputError::UnknownService {
            value: original.to_string(),
            host,
            expected: api.authority(),
        }
        .into())
    }

    fn from_path(path: &str, original: &str) -> Result<Self, Error> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let [marker, kind, id] = segments.as_slice() else {
            return Err(InvalidInputError::MalformedPath {
                value: original.to_string(),
                reason: format!("expected 3 path segments, found {}", segments.len()),
            }
            .into());
        };

        if *marker != "api" {
            return Err(InvalidInputError::MalformedPath {
                value: original.to_string(),
                reason: format!("first segment must be 'api', found '{}'", marker),
            }
            .into());
        }

        Ok(Self {
            kind: kind.to_string(),
            id: parse_id(id, original)?,
        })
    }
}

// Digits only: `str::parse::<u32>` would also accept a leading '+'.
fn parse_id(segment: &str, original: &str) -> Result<u32, Error> {
    let invalid = || InvalidInputError::InvalidIdentifier {
        value: original.to_string(),
        segment: segment.to_string(),
    };

    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid().into());
    }

    segment.parse().map_err(|_| invalid().into())
}

impl fmt::Display for ResourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}
