//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] shared by the Jupiter crates.
//! It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Collaborator Errors** - the aggregator could not be reached or refused
//!    - [`Http`](AppError::Http) - connection, DNS, TLS, body read
//!    - [`Timeout`](AppError::Timeout) - the per-request deadline elapsed
//!    - [`Api`](AppError::Api) - non-2xx status, with the response body
//!    - [`Decoding`](AppError::Decoding) - the body did not match the expected shape
//!
//! 2. **Local Errors**
//!    - [`Config`](AppError::Config) - bad environment or client settings
//!    - [`InvalidInput`](AppError::InvalidInput) - rejected call-site input
//!
//! 3. **Escalated Errors**
//!    - [`Swap`](AppError::Swap) - a failed transaction envelope raised by the
//!      convenience layer
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_wallet(wallet: &str) -> Result<&str> {
//!     if wallet.is_empty() {
//!         return Err(AppError::InvalidInput("wallet is required".to_string()));
//!     }
//!     Ok(wallet)
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Error type covering every failure the Jupiter client can report.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure before a response was received.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The request did not complete within the client deadline.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The aggregator answered with a non-success status.
    #[error("Jupiter API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Response body could not be decoded.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Invalid user input validation error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A swap reported failure and the caller asked for it to be raised.
    #[error("{0}")]
    Swap(String),
}

impl AppError {
    /// The description carried by this error, without the category prefix.
    pub fn detail(&self) -> &str {
        match self {
            AppError::Config(msg)
            | AppError::Http(msg)
            | AppError::Timeout(msg)
            | AppError::Decoding(msg)
            | AppError::InvalidInput(msg)
            | AppError::Swap(msg) => msg,
            AppError::Api { body, .. } => body,
        }
    }

    /// Whether the failure came from the remote side (transport, status, or body).
    pub fn is_collaborator(&self) -> bool {
        matches!(
            self,
            AppError::Http(_) | AppError::Timeout(_) | AppError::Api { .. } | AppError::Decoding(_)
        )
    }
}

/// Convert `reqwest::Error` to `AppError`, separating timeouts and decode failures.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(err.to_string())
        } else if err.is_decode() {
            AppError::Decoding(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::Api {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            AppError::Http(err.to_string())
        }
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}
