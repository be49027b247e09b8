//! # Jupiter Service
//!
//! Orchestrates a swap as two sequential calls (quote, then swap
//! instructions) and reports the outcome as a [`JupiterTransactionResult`]
//! envelope instead of an error.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lib_jupiter::service::JupiterService;
//!
//! # async fn example() -> lib_core::Result<()> {
//! let service = JupiterService::new()?;
//! let wallet = "FpJxBcaMAid9E4Mr3pLSyKk5JMUPiWtGcYBeYzQdRtgp";
//! let bonk = service.config().tokens.bonk.clone();
//!
//! // Spend 0.1 SOL on BONK with the configured slippage
//! let result = service.buy(&bonk, "100000000", wallet, None).await;
//! if result.success {
//!     println!("expected out: {}", result.quote.summary().out_amount);
//! }
//! # Ok(())
//! # }
//! ```

use crate::api::JupiterApi;
use crate::config::{Preset, TradingConfig};
use crate::jupiter::quote::{QuoteParams, QuoteRequest};
use crate::jupiter::swap::{SwapInstructionsParams, SwapInstructionsRequest};
use crate::jupiter::types::{
    PrioritizationFeeLamports, QuoteResponse, SwapInstructionsResponse, SwapMode,
};
use crate::jupiter::JupiterClient;
use lib_core::{AppError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Message used when a failure carries no description.
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Slippage used by [`JupiterService::get_route_info`], independent of configuration.
pub const ROUTE_INFO_SLIPPAGE_BPS: u16 = 100;

/// Per-transaction options for [`JupiterService::get_transaction`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionConfig {
    pub user_public_key: String,
    pub swap_mode: Option<SwapMode>,
    pub prioritization_fee_lamports: Option<PrioritizationFeeLamports>,
    pub as_legacy_transaction: Option<bool>,
    pub dynamic_compute_unit_limit: Option<bool>,
    pub dynamic_slippage: Option<bool>,
}

impl TransactionConfig {
    pub fn for_wallet(user_public_key: impl Into<String>) -> Self {
        Self {
            user_public_key: user_public_key.into(),
            ..Default::default()
        }
    }

    fn quote_params(&self, slippage_bps: Option<u16>) -> QuoteParams {
        QuoteParams {
            slippage_bps,
            swap_mode: self.swap_mode,
            as_legacy_transaction: self.as_legacy_transaction,
            dynamic_slippage: self.dynamic_slippage,
            ..Default::default()
        }
    }

    fn swap_params(&self) -> SwapInstructionsParams {
        SwapInstructionsParams {
            prioritization_fee_lamports: self.prioritization_fee_lamports.clone(),
            as_legacy_transaction: self.as_legacy_transaction,
            dynamic_compute_unit_limit: self.dynamic_compute_unit_limit,
            dynamic_slippage: self.dynamic_slippage,
            ..Default::default()
        }
    }
}

/// Outcome of a quote + swap-instructions sequence.
///
/// On failure `quote` and `instructions` are empty placeholders and `error`
/// holds a human-readable message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JupiterTransactionResult {
    pub quote: QuoteResponse,
    pub instructions: SwapInstructionsResponse,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JupiterTransactionResult {
    pub fn succeeded(quote: QuoteResponse, instructions: SwapInstructionsResponse) -> Self {
        Self {
            quote,
            instructions,
            success: true,
            error: None,
        }
    }

    pub fn failed(err: &AppError) -> Self {
        let message = if err.detail().trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            err.to_string()
        };
        Self {
            error: Some(message),
            ..Default::default()
        }
    }

    /// Turn a failed envelope into an error.
    pub fn into_result(self) -> Result<(QuoteResponse, SwapInstructionsResponse)> {
        if self.success {
            Ok((self.quote, self.instructions))
        } else {
            Err(AppError::Swap(
                self.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            ))
        }
    }
}

/// Service for Jupiter swap operations.
///
/// Owns its [`TradingConfig`]; every request reads it, none mutates it.
pub struct JupiterService<A = JupiterClient> {
    api: A,
    config: TradingConfig,
}

impl JupiterService<JupiterClient> {
    /// Service against the public endpoint with default trading settings.
    pub fn new() -> Result<Self> {
        Ok(Self::with_api(JupiterClient::new()?, TradingConfig::default()))
    }

    /// Service built from deployment settings (endpoint, key, preset, slippage).
    pub fn from_config(config: &lib_core::Config) -> Result<Self> {
        Ok(Self::with_api(
            JupiterClient::from_config(config)?,
            TradingConfig::from_core_config(config)?,
        ))
    }
}

impl<A: JupiterApi> JupiterService<A> {
    pub fn with_api(api: A, config: TradingConfig) -> Self {
        Self { api, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn config(&self) -> &TradingConfig {
        &self.config
    }

    /// Replace the configuration. Takes `&mut self`, so it cannot race a request.
    pub fn set_config(&mut self, config: TradingConfig) {
        self.config = config;
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        debug!("Applying trading preset: {}", preset);
        self.config = self.config.clone().with_preset(preset);
    }

    /// Quote followed by swap instructions, with failures captured in the envelope.
    #[instrument(skip(self, config), fields(user_public_key = %config.user_public_key))]
    pub async fn get_transaction(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: &str,
        slippage_bps: Option<u16>,
        config: &TransactionConfig,
    ) -> JupiterTransactionResult {
        match self
            .try_get_transaction(input_mint, output_mint, amount, slippage_bps, config)
            .await
        {
            Ok((quote, instructions)) => JupiterTransactionResult::succeeded(quote, instructions),
            Err(e) => {
                error!("Jupiter transaction error: {}", e);
                JupiterTransactionResult::failed(&e)
            }
        }
    }

    async fn try_get_transaction(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: &str,
        slippage_bps: Option<u16>,
        config: &TransactionConfig,
    ) -> Result<(QuoteResponse, SwapInstructionsResponse)> {
        if config.user_public_key.trim().is_empty() {
            return Err(AppError::InvalidInput("userPublicKey is required".to_string()));
        }

        // Step 1: Get quote
        let quote = self
            .get_quote(input_mint, output_mint, amount, &config.quote_params(slippage_bps))
            .await?;

        // Step 2: Get swap instructions for that quote
        let instructions = self
            .get_swap_instructions(&config.user_public_key, &quote, &config.swap_params())
            .await?;

        Ok((quote, instructions))
    }

    /// Swap SOL for `token_mint`. `sol_amount` is in lamports.
    pub async fn buy(
        &self,
        token_mint: &str,
        sol_amount: &str,
        user_public_key: &str,
        slippage_bps: Option<u16>,
    ) -> JupiterTransactionResult {
        self.get_transaction(
            &self.config.tokens.sol,
            token_mint,
            sol_amount,
            slippage_bps,
            &TransactionConfig::for_wallet(user_public_key),
        )
        .await
    }

    /// Swap `token_mint` for SOL. `token_amount` is in the token's raw units.
    pub async fn sell(
        &self,
        token_mint: &str,
        token_amount: &str,
        user_public_key: &str,
        slippage_bps: Option<u16>,
    ) -> JupiterTransactionResult {
        self.get_transaction(
            token_mint,
            &self.config.tokens.sol,
            token_amount,
            slippage_bps,
            &TransactionConfig::for_wallet(user_public_key),
        )
        .await
    }

    /// Resolve `params` against the quote defaults and fetch a quote.
    pub async fn get_quote(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: &str,
        params: &QuoteParams,
    ) -> Result<QuoteResponse> {
        let request =
            QuoteRequest::resolve(input_mint, output_mint, amount, params, &self.config.quote);
        self.api.quote(&request).await
    }

    /// Resolve `params` against the swap defaults and fetch instructions for `quote`.
    pub async fn get_swap_instructions(
        &self,
        user_public_key: &str,
        quote: &QuoteResponse,
        params: &SwapInstructionsParams,
    ) -> Result<SwapInstructionsResponse> {
        let request =
            SwapInstructionsRequest::resolve(user_public_key, quote, params, &self.config.swap);
        self.api.swap_instructions(&request).await
    }

    /// Length-only plausibility check. `false` means "possibly invalid".
    pub fn is_valid_mint(&self, mint: &str) -> bool {
        lib_utils::is_valid_mint(mint)
    }

    /// Quote for inspection, always at 1% slippage.
    #[instrument(skip(self))]
    pub async fn get_route_info(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: &str,
    ) -> Result<QuoteResponse> {
        let params = QuoteParams::with_slippage(Some(ROUTE_INFO_SLIPPAGE_BPS));
        let quote = self.get_quote(input_mint, output_mint, amount, &params).await?;
        debug!("Route: {}", quote.route_labels().join(" -> "));
        Ok(quote)
    }

    /// Price impact percentage of a route-info quote.
    pub async fn calculate_price_impact(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: &str,
    ) -> Result<f64> {
        self.get_route_info(input_mint, output_mint, amount)
            .await?
            .price_impact()
    }
}
