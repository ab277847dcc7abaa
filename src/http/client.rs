//! HTTP client construction
//!
//! Builds the pooled `reqwest` client shared by every `GetPage` call.
//! The client-wide timeout bounds connection and read time for the whole
//! exchange; per-call deadlines are layered on top by the datasource.

use crate::error::{Error, Result};
use reqwest::Client;
use std::time::Duration;

/// Configuration for the HTTP client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Overall request timeout, zero for none
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("pagerduty-adapter/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }

    /// Build the underlying reqwest client
    pub fn build_client(&self) -> Result<Client> {
        let mut builder = Client::builder().user_agent(&self.user_agent);
        if !self.timeout.is_zero() {
            builder = builder.timeout(self.timeout);
        }
        builder
            .build()
            .map_err(|e| Error::internal(format!("Failed to build HTTP client: {e}")))
    }
}

/// Builder for HTTP client config
#[derive(Debug, Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the overall request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the overall request timeout in seconds
    pub fn timeout_secs(self, secs: u64) -> Self {
        self.timeout(Duration::from_secs(secs))
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}
