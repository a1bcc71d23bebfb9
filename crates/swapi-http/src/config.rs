//! Client configuration.

use std::time::Duration;

use swapi_core::ApiUrl;

/// Settings for [`HttpFetcher`](crate::HttpFetcher) and
/// [`SwapiClient`](crate::SwapiClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service.
    pub api_url: ApiUrl,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration for the given base URL with default settings.
    pub fn new(api_url: ApiUrl) -> Self {
        Self {
            api_url,
            ..Self::default()
        }
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: ApiUrl::default(),
            timeout: None,
            user_agent: concat!("swapi/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url.as_str(), "https://swapi.dev/");
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("swapi/"));
    }

    #[test]
    fn builder_overrides() {
        let api = ApiUrl::new("http://localhost:9000").unwrap();
        let config = ClientConfig::new(api.clone())
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent");

        assert_eq!(config.api_url, api);
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent, "test-agent");
    }
}
