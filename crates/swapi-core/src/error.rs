//! Error types for the swapi crates.
//!
//! A single error type with one variant per failure category: invalid
//! caller input (including resource URL validation), transport failures,
//! rejected requests, and undecodable responses.

use std::fmt;
use thiserror::Error;

/// The unified error type for swapi operations.
///
/// No layer retries or recovers; every variant surfaces to the caller as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation errors (missing arguments, bad resource URLs).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The service could not be reached (DNS, connection, timeout).
    #[error("remote unavailable: {0}")]
    RemoteUnavailable(#[from] TransportError),

    /// The service answered with a non-success status.
    #[error("remote rejected request: {0}")]
    RemoteRejected(#[from] RemoteRejection),

    /// The response body did not match the expected shape.
    #[error("deserialization failed: {0}")]
    DeserializationFailed(#[from] DecodeError),
}

impl Error {
    /// Returns true if the service reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::RemoteRejected(r) if r.is_not_found())
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection to {url} failed: {message}")]
    Connection { url: String, message: String },

    /// Request timed out.
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// The HTTP client could not be built.
    #[error("HTTP client setup failed: {message}")]
    Setup { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-success HTTP response.
#[derive(Debug)]
pub struct RemoteRejection {
    /// HTTP status code.
    pub status: u16,
    /// The requested URL.
    pub url: String,
    /// The `detail` field of the error body, if the server sent one.
    pub detail: Option<String>,
}

impl fmt::Display for RemoteRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} for {}", self.status, self.url)?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for RemoteRejection {}

impl RemoteRejection {
    /// Create a new rejection.
    pub fn new(status: u16, url: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            status,
            url: url.into(),
            detail,
        }
    }

    /// Check if the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// A response body that could not be decoded into the requested type.
#[derive(Debug, Error)]
#[error("{url}: {source}")]
pub struct DecodeError {
    /// The requested URL.
    pub url: String,
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    pub fn new(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self {
            url: url.into(),
            source,
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// A required argument was absent or blank.
    #[error("missing {what}")]
    Missing { what: &'static str },

    /// The value is not a parseable absolute URL.
    #[error("invalid URL '{value}': {reason}")]
    Url { value: String, reason: String },

    /// The API base URL does not meet requirements.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// The URL points at a different host than the configured API.
    #[error("unknown service '{host}' in '{value}' (expected '{expected}')")]
    UnknownService {
        value: String,
        host: String,
        expected: String,
    },

    /// The URL path is not of the form `/api/{kind}/{id}/`.
    #[error("malformed resource path in '{value}': {reason}")]
    MalformedPath { value: String, reason: String },

    /// The trailing path segment is not a non-negative integer.
    #[error("invalid resource id '{segment}' in '{value}'")]
    InvalidIdentifier { value: String, segment: String },

    /// Not one of the six catalog kinds.
    #[error("unknown resource kind '{value}'")]
    ResourceKind { value: String },

    /// A cross-reference points at a different kind than requested.
    #[error("'{value}' refers to {actual}, expected {expected}")]
    KindMismatch {
        value: String,
        expected: String,
        actual: String,
    },
}
