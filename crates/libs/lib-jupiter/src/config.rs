//! # Trading Configuration
//!
//! Defaults merged into every quote and swap-instructions request, the
//! well-known token mints, and named presets.
//!
//! A [`TradingConfig`] is a plain value. Presets and setters consume it and
//! return the updated copy, so a request in flight never observes a
//! half-applied change.
//!
//! ```rust
//! use lib_jupiter::config::{Preset, TradingConfig};
//!
//! let config = TradingConfig::default()
//!     .with_preset(Preset::Conservative)
//!     .with_preferred_dexes(vec!["Raydium".to_string()]);
//!
//! assert_eq!(config.quote.slippage_bps, 50);
//! assert_eq!(config.quote.max_accounts, 32);
//! ```

use crate::jupiter::types::SwapMode;
use lib_core::{AppError, Result};
use std::fmt;
use std::str::FromStr;

// region: --- Defaults

/// Defaults for `/quote`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteDefaults {
    /// 100 bps = 1%
    pub slippage_bps: u16,
    pub swap_mode: SwapMode,
    /// Route only through liquid intermediate tokens
    pub restrict_intermediate_tokens: bool,
    pub only_direct_routes: bool,
    pub as_legacy_transaction: bool,
    pub max_accounts: u64,
    pub dynamic_slippage: bool,
    /// Restrict routing to these DEXes (empty = all)
    pub dexes: Vec<String>,
    pub exclude_dexes: Vec<String>,
    /// 0 = no platform fee
    pub platform_fee_bps: u16,
}

impl Default for QuoteDefaults {
    fn default() -> Self {
        Self {
            slippage_bps: 100,
            swap_mode: SwapMode::ExactIn,
            restrict_intermediate_tokens: true,
            only_direct_routes: true,
            as_legacy_transaction: false,
            max_accounts: 64,
            dynamic_slippage: false,
            dexes: Vec::new(),
            exclude_dexes: Vec::new(),
            platform_fee_bps: 0,
        }
    }
}

/// Defaults for `/swap-instructions`.
///
/// Empty strings and zeroes mean "not set" and are left out of the request.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapDefaults {
    pub wrap_and_unwrap_sol: bool,
    pub use_shared_accounts: bool,
    pub as_legacy_transaction: bool,
    pub dynamic_compute_unit_limit: bool,
    pub skip_user_accounts_rpc_calls: bool,
    pub dynamic_slippage: bool,
    /// Token account collecting the platform fee
    pub fee_account: String,
    pub tracking_account: String,
    pub destination_token_account: String,
    pub compute_unit_price_micro_lamports: u64,
    /// ~400ms per slot
    pub blockhash_slots_to_expiry: u8,
}

impl Default for SwapDefaults {
    fn default() -> Self {
        Self {
            wrap_and_unwrap_sol: true,
            use_shared_accounts: false,
            as_legacy_transaction: false,
            dynamic_compute_unit_limit: true,
            skip_user_accounts_rpc_calls: false,
            dynamic_slippage: false,
            fee_account: String::new(),
            tracking_account: String::new(),
            destination_token_account: String::new(),
            compute_unit_price_micro_lamports: 0,
            blockhash_slots_to_expiry: 3,
        }
    }
}

/// Mints of commonly traded tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMints {
    /// Wrapped SOL, the native asset for buy/sell
    pub sol: String,
    pub usdc: String,
    pub usdt: String,
    pub bonk: String,
    pub wif: String,
    pub jup: String,
}

impl Default for TokenMints {
    fn default() -> Self {
        Self {
            sol: "So11111111111111111111111111111111111111112".to_string(),
            usdc: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
            usdt: "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB".to_string(),
            bonk: "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263".to_string(),
            wif: "EKpQGSJtjMFqKZ9KQanSqYXRcF8fBopzLHYxdM65zcjm".to_string(),
            jup: "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN".to_string(),
        }
    }
}

impl TokenMints {
    /// Case-insensitive symbol lookup.
    pub fn by_symbol(&self, symbol: &str) -> Option<&str> {
        let mint = match symbol.to_uppercase().as_str() {
            "SOL" | "WSOL" => &self.sol,
            "USDC" => &self.usdc,
            "USDT" => &self.usdt,
            "BONK" => &self.bonk,
            "WIF" => &self.wif,
            "JUP" => &self.jup,
            _ => return None,
        };
        Some(mint.as_str())
    }
}

// endregion: --- Defaults

// region: --- Presets

/// Named trading styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Lower slippage, stable routes
    Conservative,
    /// Higher slippage, all routes
    Aggressive,
    /// Priority fee and skipped account checks
    Fast,
}

/// Fields a preset overwrites. Each one lands in whichever section
/// (quote, swap, or both) declares a field of that name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetOverrides {
    pub slippage_bps: Option<u16>,
    pub restrict_intermediate_tokens: Option<bool>,
    pub only_direct_routes: Option<bool>,
    pub max_accounts: Option<u64>,
    pub dynamic_compute_unit_limit: Option<bool>,
    pub skip_user_accounts_rpc_calls: Option<bool>,
    pub compute_unit_price_micro_lamports: Option<u64>,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Conservative, Preset::Aggressive, Preset::Fast];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Conservative => "conservative",
            Preset::Aggressive => "aggressive",
            Preset::Fast => "fast",
        }
    }

    pub fn overrides(&self) -> PresetOverrides {
        match self {
            Preset::Conservative => PresetOverrides {
                slippage_bps: Some(50),
                restrict_intermediate_tokens: Some(true),
                only_direct_routes: Some(true),
                max_accounts: Some(32),
                ..Default::default()
            },
            Preset::Aggressive => PresetOverrides {
                slippage_bps: Some(300),
                restrict_intermediate_tokens: Some(false),
                only_direct_routes: Some(false),
                max_accounts: Some(64),
                ..Default::default()
            },
            Preset::Fast => PresetOverrides {
                slippage_bps: Some(100),
                dynamic_compute_unit_limit: Some(true),
                skip_user_accounts_rpc_calls: Some(true),
                compute_unit_price_micro_lamports: Some(1000),
                ..Default::default()
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AppError::Config(format!(
                    "Unknown preset '{}', expected one of: conservative, aggressive, fast",
                    s
                ))
            })
    }
}

// endregion: --- Presets

/// Quote and swap defaults plus the token table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradingConfig {
    pub quote: QuoteDefaults,
    pub swap: SwapDefaults,
    pub tokens: TokenMints,
}

impl TradingConfig {
    /// Build from deployment settings: preset first, then the slippage override.
    pub fn from_core_config(core: &lib_core::Config) -> Result<Self> {
        let mut config = Self::default();
        if let Some(name) = &core.preset {
            config = config.with_preset(name.parse()?);
        }
        if let Some(bps) = core.slippage_bps {
            config = config.with_slippage(bps);
        }
        Ok(config)
    }

    pub fn with_preset(self, preset: Preset) -> Self {
        self.with_overrides(&preset.overrides())
    }

    pub fn with_overrides(mut self, o: &PresetOverrides) -> Self {
        if let Some(v) = o.slippage_bps {
            self.quote.slippage_bps = v;
        }
        if let Some(v) = o.restrict_intermediate_tokens {
            self.quote.restrict_intermediate_tokens = v;
        }
        if let Some(v) = o.only_direct_routes {
            self.quote.only_direct_routes = v;
        }
        if let Some(v) = o.max_accounts {
            self.quote.max_accounts = v;
        }
        if let Some(v) = o.dynamic_compute_unit_limit {
            self.swap.dynamic_compute_unit_limit = v;
        }
        if let Some(v) = o.skip_user_accounts_rpc_calls {
            self.swap.skip_user_accounts_rpc_calls = v;
        }
        if let Some(v) = o.compute_unit_price_micro_lamports {
            self.swap.compute_unit_price_micro_lamports = v;
        }
        self
    }

    pub fn with_slippage(mut self, bps: u16) -> Self {
        self.quote.slippage_bps = bps;
        self
    }

    pub fn with_max_accounts(mut self, count: u64) -> Self {
        self.quote.max_accounts = count;
        self
    }

    /// Turns on dynamic slippage for both the quote and the swap instructions.
    pub fn with_dynamic_slippage(mut self) -> Self {
        self.quote.dynamic_slippage = true;
        self.swap.dynamic_slippage = true;
        self
    }

    pub fn with_preferred_dexes(mut self, dexes: Vec<String>) -> Self {
        self.quote.dexes = dexes;
        self
    }
}
