//! # Client Configuration
//!
//! Settings for reaching the aggregator, loaded from environment variables.
//! Trading defaults (slippage, routing flags, presets) live with the Jupiter
//! client; this module only carries what a deployment supplies.
//!
//! ## Global Config Access
//!
//! Binaries call [`init_config()`] once at startup and read it back with
//! [`core_config()`]. Libraries take a `&Config` instead.
//!
//! ```rust,no_run
//! use lib_core::config::{core_config, init_config};
//!
//! init_config().expect("invalid environment");
//! let base = &core_config().api_base;
//! ```

use crate::error::{AppError, Result};
use lib_utils::envs::{self, get_env_opt, get_env_parse_opt};
use std::sync::OnceLock;

/// Public swap API endpoint.
pub const DEFAULT_API_BASE: &str = "https://lite-api.jup.ag/swap/v1";

/// Deadline applied to every outbound request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration loaded from environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the swap API (`JUPITER_API_BASE`)
    pub api_base: String,

    /// Per-request timeout in seconds (`JUPITER_TIMEOUT_SECS`)
    ///
    /// Valid range: 1-300
    pub timeout_secs: u64,

    /// Key sent as `x-api-key` for the paid endpoint (`JUPITER_API_KEY`)
    pub api_key: Option<String>,

    /// Name of a trading preset to apply at startup (`JUPITER_PRESET`)
    pub preset: Option<String>,

    /// Slippage override in basis points (`JUPITER_SLIPPAGE_BPS`)
    pub slippage_bps: Option<u16>,

    /// Wallet used by the convenience layer (`WALLET_PUBLIC_KEY`)
    pub wallet_public_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key: None,
            preset: None,
            slippage_bps: None,
            wallet_public_key: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_base = get_env_opt("JUPITER_API_BASE")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout_secs = get_env_parse_opt("JUPITER_TIMEOUT_SECS")
            .map_err(env_error)?
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let slippage_bps = get_env_parse_opt("JUPITER_SLIPPAGE_BPS").map_err(env_error)?;

        Ok(Self {
            api_base,
            timeout_secs,
            api_key: get_env_opt("JUPITER_API_KEY"),
            preset: get_env_opt("JUPITER_PRESET"),
            slippage_bps,
            wallet_public_key: get_env_opt("WALLET_PUBLIC_KEY"),
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base.starts_with("https://") || self.api_base.starts_with("http://")) {
            return Err(AppError::Config(format!(
                "JUPITER_API_BASE must be an http(s) URL, got '{}'",
                self.api_base
            )));
        }

        if self.timeout_secs < 1 || self.timeout_secs > 300 {
            return Err(AppError::Config(
                "JUPITER_TIMEOUT_SECS must be between 1 and 300".to_string(),
            ));
        }

        if let Some(bps) = self.slippage_bps {
            if bps > 10_000 {
                return Err(AppError::Config(
                    "JUPITER_SLIPPAGE_BPS cannot exceed 10000 (100%)".to_string(),
                ));
            }
        }

        if let Some(wallet) = &self.wallet_public_key {
            lib_utils::validate_mint(wallet, "WALLET_PUBLIC_KEY").map_err(AppError::Config)?;
        }

        Ok(())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

fn env_error(err: envs::Error) -> AppError {
    match err {
        envs::Error::WrongFormat(name) => {
            AppError::Config(format!("{} must be a valid number", name))
        }
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration from the environment.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables are malformed
/// - Configuration validation fails
/// - Config has already been initialized
pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    config.validate()?;

    tracing::debug!(
        api_base = %config.api_base,
        timeout_secs = config.timeout_secs,
        "Config loaded"
    );

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet.
pub fn core_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Config must be initialized with init_config() before use")
}
