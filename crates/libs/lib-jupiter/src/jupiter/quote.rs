//! # Jupiter Quote API
//!
//! Quote request assembly and the `GET /quote` call.

use super::client::JupiterHttpClient;
use super::types::{QuoteResponse, SwapMode};
use crate::config::QuoteDefaults;
use crate::resolve::{coalesce, non_empty_list, non_zero};
use lib_core::Result;
use tracing::debug;

/// Call-site overrides for a quote. `None` means "use the configured default".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteParams {
    pub slippage_bps: Option<u16>,
    pub swap_mode: Option<SwapMode>,
    pub dexes: Option<Vec<String>>,
    pub exclude_dexes: Option<Vec<String>>,
    pub restrict_intermediate_tokens: Option<bool>,
    pub only_direct_routes: Option<bool>,
    pub as_legacy_transaction: Option<bool>,
    pub platform_fee_bps: Option<u16>,
    pub max_accounts: Option<u64>,
    pub dynamic_slippage: Option<bool>,
}

impl QuoteParams {
    pub fn with_slippage(slippage_bps: Option<u16>) -> Self {
        Self {
            slippage_bps,
            ..Default::default()
        }
    }
}

/// Fully resolved quote request. Optional fields are `None` when they must
/// be left out of the query string.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub input_mint: String,
    pub output_mint: String,
    /// Raw u64 amount, forwarded without parsing
    pub amount: String,
    pub slippage_bps: u16,
    pub swap_mode: SwapMode,
    pub restrict_intermediate_tokens: bool,
    pub only_direct_routes: bool,
    pub as_legacy_transaction: bool,
    pub max_accounts: u64,
    pub dynamic_slippage: bool,
    pub dexes: Option<Vec<String>>,
    pub exclude_dexes: Option<Vec<String>>,
    pub platform_fee_bps: Option<u16>,
}

impl QuoteRequest {
    pub fn resolve(
        input_mint: &str,
        output_mint: &str,
        amount: &str,
        params: &QuoteParams,
        defaults: &QuoteDefaults,
    ) -> Self {
        Self {
            input_mint: input_mint.to_string(),
            output_mint: output_mint.to_string(),
            amount: amount.to_string(),
            slippage_bps: coalesce(params.slippage_bps, defaults.slippage_bps),
            swap_mode: coalesce(params.swap_mode, defaults.swap_mode),
            restrict_intermediate_tokens: coalesce(
                params.restrict_intermediate_tokens,
                defaults.restrict_intermediate_tokens,
            ),
            only_direct_routes: coalesce(params.only_direct_routes, defaults.only_direct_routes),
            as_legacy_transaction: coalesce(
                params.as_legacy_transaction,
                defaults.as_legacy_transaction,
            ),
            max_accounts: coalesce(params.max_accounts, defaults.max_accounts),
            dynamic_slippage: coalesce(params.dynamic_slippage, defaults.dynamic_slippage),
            dexes: non_empty_list(params.dexes.as_deref(), &defaults.dexes),
            exclude_dexes: non_empty_list(params.exclude_dexes.as_deref(), &defaults.exclude_dexes),
            platform_fee_bps: non_zero(params.platform_fee_bps, defaults.platform_fee_bps),
        }
    }

    /// Query string fields in the order the API documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("inputMint", self.input_mint.clone()),
            ("outputMint", self.output_mint.clone()),
            ("amount", self.amount.clone()),
            ("slippageBps", self.slippage_bps.to_string()),
            ("swapMode", self.swap_mode.to_string()),
            ("restrictIntermediateTokens", self.restrict_intermediate_tokens.to_string()),
            ("onlyDirectRoutes", self.only_direct_routes.to_string()),
            ("asLegacyTransaction", self.as_legacy_transaction.to_string()),
            ("maxAccounts", self.max_accounts.to_string()),
            ("dynamicSlippage", self.dynamic_slippage.to_string()),
        ];

        if let Some(dexes) = &self.dexes {
            pairs.push(("dexes", dexes.join(",")));
        }
        if let Some(exclude) = &self.exclude_dexes {
            pairs.push(("excludeDexes", exclude.join(",")));
        }
        if let Some(fee) = self.platform_fee_bps {
            pairs.push(("platformFeeBps", fee.to_string()));
        }

        pairs
    }
}

impl JupiterHttpClient {
    /// Get a swap quote from the aggregator.
    pub async fn get_quote(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        let url = format!("{}/quote", self.api_base);

        debug!(
            "Jupiter quote request: {} -> {} (amount: {}, slippage: {} bps)",
            request.input_mint, request.output_mint, request.amount, request.slippage_bps
        );

        let response = self
            .http
            .get(&url)
            .query(&request.query_pairs())
            .send()
            .await?;

        let quote: QuoteResponse = Self::read_json(response, "quote").await?;

        let summary = quote.summary();
        debug!(
            "Jupiter quote: {} -> {} (impact: {}%, hops: {})",
            summary.in_amount,
            summary.out_amount,
            summary.price_impact_pct,
            summary.route_plan.len()
        );

        Ok(quote)
    }
}
