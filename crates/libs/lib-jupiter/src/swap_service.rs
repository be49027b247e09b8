//! # Swap Service
//!
//! Wallet-bound buy/sell on top of [`JupiterService`]. Where the underlying
//! service reports failure in its envelope, this layer raises it as an
//! [`AppError::Swap`](lib_core::AppError::Swap).

use crate::api::JupiterApi;
use crate::jupiter::types::SwapInstructionsResponse;
use crate::jupiter::JupiterClient;
use crate::service::{JupiterService, JupiterTransactionResult};
use lib_core::Result;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

pub struct SwapService<A = JupiterClient> {
    jupiter: JupiterService<A>,
    user_public_key: String,
}

impl<A: JupiterApi> SwapService<A> {
    pub fn new(jupiter: JupiterService<A>, user_public_key: impl Into<String>) -> Self {
        let user_public_key = user_public_key.into();
        if !jupiter.is_valid_mint(&user_public_key) {
            warn!("Wallet public key looks malformed: {}", user_public_key);
        }
        Self {
            jupiter,
            user_public_key,
        }
    }

    pub fn jupiter(&self) -> &JupiterService<A> {
        &self.jupiter
    }

    pub fn jupiter_mut(&mut self) -> &mut JupiterService<A> {
        &mut self.jupiter
    }

    pub fn user_public_key(&self) -> &str {
        &self.user_public_key
    }

    /// Spend `sol_amount` lamports on `token_mint`.
    pub async fn buy(
        &self,
        token_mint: &str,
        sol_amount: &str,
        slippage_bps: Option<u16>,
    ) -> Result<SwapInstructionsResponse> {
        let started = Instant::now();
        let result = self
            .jupiter
            .buy(token_mint, sol_amount, &self.user_public_key, slippage_bps)
            .await;
        Self::finish("Buy", "tokens", result, started.elapsed())
    }

    /// Sell `token_amount` raw units of `token_mint` for SOL.
    pub async fn sell(
        &self,
        token_mint: &str,
        token_amount: &str,
        slippage_bps: Option<u16>,
    ) -> Result<SwapInstructionsResponse> {
        let started = Instant::now();
        let result = self
            .jupiter
            .sell(token_mint, token_amount, &self.user_public_key, slippage_bps)
            .await;
        Self::finish("Sell", "lamports", result, started.elapsed())
    }

    fn finish(
        side: &str,
        unit: &str,
        result: JupiterTransactionResult,
        elapsed: Duration,
    ) -> Result<SwapInstructionsResponse> {
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;

        if result.success {
            info!(
                "{} successful - expected output: {} {} ({:.2}ms)",
                side,
                result.quote.summary().out_amount,
                unit,
                elapsed_ms
            );
        } else {
            error!(
                "{} failed: {} ({:.2}ms)",
                side,
                result.error.as_deref().unwrap_or_default(),
                elapsed_ms
            );
        }

        result.into_result().map(|(_, instructions)| instructions)
    }
}
