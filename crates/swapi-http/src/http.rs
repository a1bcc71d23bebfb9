//! HTTP fetch adapter implementation.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use swapi_core::error::{DecodeError, RemoteRejection, TransportError};
use swapi_core::{Fetch, Result};

use crate::config::ClientConfig;

/// Error body sent by the service, e.g. `{"detail": "Not found"}`.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: Option<String>,
}

/// reqwest-backed [`Fetch`] implementation.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| TransportError::Setup {
            message: e.to_string(),
        })?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Handle a response, decoding the body or the error.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        url: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        trace!(status = %status, "HTTP response");

        if !status.is_success() {
            return Err(self.parse_error_response(url, response).await.into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(url, e))?;
        trace!(bytes = body.len(), "Response body");

        let value = serde_json::from_slice(&body).map_err(|e| DecodeError::new(url, e))?;
        Ok(value)
    }

    /// Parse an error response, keeping the `detail` message if present.
    async fn parse_error_response(&self, url: &str, response: reqwest::Response) -> RemoteRejection {
        let status = response.status().as_u16();

        match response.json::<ErrorResponse>().await {
            Ok(body) => RemoteRejection::new(status, url, body.detail),
            Err(_) => RemoteRejection::new(status, url, None),
        }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    #[instrument(skip(self))]
    async fn fetch<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        debug!("GET");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        self.handle_response(url, response).await
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            url: url.to_string(),
        }
    } else if err.is_connect() {
        TransportError::Connection {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    }
}
