//! HTTP fetch adapter trait.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::Result;

/// Performs a GET request and decodes the JSON body.
///
/// Implementations fail with `RemoteUnavailable` when the service cannot be
/// reached, `RemoteRejected` on a non-success status, and
/// `DeserializationFailed` when the body lacks required fields. Fields the
/// target type does not declare are ignored.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch `url` and decode the body as `T`.
    async fn fetch<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static;
}

