//! # Jupiter HTTP Client
//!
//! reqwest wrapper shared by the quote and swap-instructions calls.

use lib_core::{AppError, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::warn;

/// HTTP client wrapper for the Jupiter swap API
#[derive(Clone)]
pub struct JupiterHttpClient {
    pub http: Client,
    /// Base URL without trailing slash, e.g. `https://lite-api.jup.ag/swap/v1`
    pub api_base: String,
}

impl JupiterHttpClient {
    /// Create a client with JSON headers, an optional API key, and a request timeout.
    pub fn new(api_base: String, timeout: Duration, api_key: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = api_key {
            let value = HeaderValue::from_str(key).map_err(|_| {
                AppError::Config("Jupiter API key is not a valid header value".to_string())
            })?;
            headers.insert("x-api-key", value);
        }

        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Check the status and decode the body, keeping the API's error text.
    pub(crate) async fn read_json<T: DeserializeOwned>(
        response: Response,
        call: &str,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Jupiter {} failed with {}: {}", call, status, body);
            return Err(AppError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!("Jupiter {} parse failed: {}", call, e);
            AppError::Decoding(format!("Jupiter {} response: {}", call, e))
        })
    }
}
