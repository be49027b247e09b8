//! # Jupiter Aggregator Client
//!
//! reqwest-backed implementation of [`JupiterApi`](crate::api::JupiterApi).

// region: --- Modules
pub mod types;
pub mod client;
pub mod quote;
pub mod swap;
// endregion: --- Modules

// region: --- Main Client
use crate::api::JupiterApi;
use async_trait::async_trait;
use client::JupiterHttpClient;
use lib_core::config::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};
use lib_core::Result;
use quote::QuoteRequest;
use std::time::Duration;
use swap::SwapInstructionsRequest;

/// Builder for configuring JupiterClient.
#[derive(Debug, Clone)]
pub struct JupiterClientBuilder {
    timeout: Duration,
    api_base: String,
    api_key: Option<String>,
}

impl Default for JupiterClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
        }
    }
}

impl JupiterClientBuilder {
    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the swap API base URL.
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Send `x-api-key` with every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Build the JupiterClient with configured settings.
    pub fn build(self) -> Result<JupiterClient> {
        let inner = JupiterHttpClient::new(self.api_base, self.timeout, self.api_key.as_deref())?;
        Ok(JupiterClient { inner })
    }
}

/// Client for the Jupiter swap API
#[derive(Clone)]
pub struct JupiterClient {
    inner: JupiterHttpClient,
}

impl JupiterClient {
    /// Create a client for the public endpoint with a 30 second timeout.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a new Jupiter client using a builder for configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lib_jupiter::jupiter::JupiterClient;
    ///
    /// let client = JupiterClient::builder()
    ///     .timeout(std::time::Duration::from_secs(10))
    ///     .api_base("https://api.jup.ag/swap/v1")
    ///     .api_key("my-key")
    ///     .build()?;
    /// # Ok::<(), lib_core::AppError>(())
    /// ```
    pub fn builder() -> JupiterClientBuilder {
        JupiterClientBuilder::default()
    }

    /// Build from deployment settings.
    pub fn from_config(config: &lib_core::Config) -> Result<Self> {
        let mut builder = Self::builder()
            .timeout(config.timeout())
            .api_base(config.api_base.clone());
        if let Some(key) = &config.api_key {
            builder = builder.api_key(key.clone());
        }
        builder.build()
    }

    pub fn api_base(&self) -> &str {
        &self.inner.api_base
    }
}

#[async_trait]
impl JupiterApi for JupiterClient {
    async fn quote(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        self.inner.get_quote(request).await
    }

    async fn swap_instructions(
        &self,
        request: &SwapInstructionsRequest<'_>,
    ) -> Result<SwapInstructionsResponse> {
        self.inner.get_swap_instructions(request).await
    }
}
// endregion: --- Main Client

// Re-export commonly used types
pub use types::*;
