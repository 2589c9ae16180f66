//! Shared HTTP client wrapper
//!
//! Thin wrapper around `reqwest::Client` that centralizes USER_AGENT and
//! timeout configuration.

use crate::config::network::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, USER_AGENT};
use crate::error::Result;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Shared HTTP client with standard configuration
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    /// Create a new client with default mealdex settings
    pub fn new() -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .build()?;
        Ok(Self { inner })
    }

    /// GET a URL and deserialize the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.inner.get(url).send().await?;
        let data = resp.json::<T>().await?;
        Ok(data)
    }

    /// GET a URL with query parameters and deserialize the JSON response
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let resp = self.inner.get(url).query(params).send().await?;
        let data = resp.json::<T>().await?;
        Ok(data)
    }

    /// Access the underlying reqwest client
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }
}
