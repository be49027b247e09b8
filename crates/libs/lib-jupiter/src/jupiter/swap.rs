//! # Jupiter Swap Instructions
//!
//! Swap-instructions request assembly and the `POST /swap-instructions` call.

use super::client::JupiterHttpClient;
use super::types::{PrioritizationFeeLamports, QuoteResponse, SwapInstructionsResponse};
use crate::config::SwapDefaults;
use crate::resolve::{coalesce, truthy_or};
use lib_core::Result;
use serde::Serialize;
use tracing::debug;

/// Call-site overrides for swap instructions.
///
/// Flags fall back to the default only when `None`. The account, price and
/// expiry fields also fall back when set to `""` or `0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwapInstructionsParams {
    pub payer: Option<String>,
    pub wrap_and_unwrap_sol: Option<bool>,
    pub use_shared_accounts: Option<bool>,
    pub as_legacy_transaction: Option<bool>,
    pub dynamic_compute_unit_limit: Option<bool>,
    pub skip_user_accounts_rpc_calls: Option<bool>,
    pub dynamic_slippage: Option<bool>,
    pub fee_account: Option<String>,
    pub tracking_account: Option<String>,
    pub destination_token_account: Option<String>,
    pub compute_unit_price_micro_lamports: Option<u64>,
    pub blockhash_slots_to_expiry: Option<u8>,
    pub prioritization_fee_lamports: Option<PrioritizationFeeLamports>,
}

/// JSON body for `/swap-instructions`, borrowing the quote it executes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapInstructionsRequest<'a> {
    pub user_public_key: String,
    pub quote_response: &'a QuoteResponse,
    pub wrap_and_unwrap_sol: bool,
    pub use_shared_accounts: bool,
    pub as_legacy_transaction: bool,
    pub dynamic_compute_unit_limit: bool,
    pub skip_user_accounts_rpc_calls: bool,
    pub dynamic_slippage: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_token_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_unit_price_micro_lamports: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockhash_slots_to_expiry: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prioritization_fee_lamports: Option<PrioritizationFeeLamports>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,
}

impl<'a> SwapInstructionsRequest<'a> {
    pub fn resolve(
        user_public_key: &str,
        quote_response: &'a QuoteResponse,
        params: &SwapInstructionsParams,
        defaults: &SwapDefaults,
    ) -> Self {
        Self {
            user_public_key: user_public_key.to_string(),
            quote_response,
            wrap_and_unwrap_sol: coalesce(params.wrap_and_unwrap_sol, defaults.wrap_and_unwrap_sol),
            use_shared_accounts: coalesce(params.use_shared_accounts, defaults.use_shared_accounts),
            as_legacy_transaction: coalesce(
                params.as_legacy_transaction,
                defaults.as_legacy_transaction,
            ),
            dynamic_compute_unit_limit: coalesce(
                params.dynamic_compute_unit_limit,
                defaults.dynamic_compute_unit_limit,
            ),
            skip_user_accounts_rpc_calls: coalesce(
                params.skip_user_accounts_rpc_calls,
                defaults.skip_user_accounts_rpc_calls,
            ),
            dynamic_slippage: coalesce(params.dynamic_slippage, defaults.dynamic_slippage),
            fee_account: truthy_or(params.fee_account.as_ref(), &defaults.fee_account),
            tracking_account: truthy_or(
                params.tracking_account.as_ref(),
                &defaults.tracking_account,
            ),
            destination_token_account: truthy_or(
                params.destination_token_account.as_ref(),
                &defaults.destination_token_account,
            ),
            compute_unit_price_micro_lamports: truthy_or(
                params.compute_unit_price_micro_lamports.as_ref(),
                &defaults.compute_unit_price_micro_lamports,
            ),
            blockhash_slots_to_expiry: truthy_or(
                params.blockhash_slots_to_expiry.as_ref(),
                &defaults.blockhash_slots_to_expiry,
            ),
            prioritization_fee_lamports: params.prioritization_fee_lamports.clone(),
            payer: params.payer.clone(),
        }
    }
}

impl JupiterHttpClient {
    /// Request the instructions that execute a previously fetched quote.
    pub async fn get_swap_instructions(
        &self,
        request: &SwapInstructionsRequest<'_>,
    ) -> Result<SwapInstructionsResponse> {
        let url = format!("{}/swap-instructions", self.api_base);

        debug!(
            "Jupiter swap-instructions request for user: {}",
            request.user_public_key
        );

        let response = self.http.post(&url).json(request).send().await?;

        let instructions: SwapInstructionsResponse =
            Self::read_json(response, "swap-instructions").await?;

        debug!(
            "Jupiter swap instructions received ({} instructions, {} lookup tables)",
            instructions.instruction_count(),
            instructions.address_lookup_table_addresses.len()
        );

        Ok(instructions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const WALLET: &str = "FpJxBcaMAid9E4Mr3pLSyKk5JMUPiWtGcYBeYzQdRtgp";

    fn body(params: &SwapInstructionsParams, defaults: &SwapDefaults) -> Value {
        let quote = QuoteResponse::default();
        let request = SwapInstructionsRequest::resolve(WALLET, &quote, params, defaults);
        serde_json::to_value(&request).unwrap()
    }

    #[test]
    fn test_defaults_body() {
        let body = body(&SwapInstructionsParams::default(), &SwapDefaults::default());

        assert_eq!(body["userPublicKey"], json!(WALLET));
        assert_eq!(body["wrapAndUnwrapSol"], json!(true));
        assert_eq!(body["useSharedAccounts"], json!(false));
        assert_eq!(body["asLegacyTransaction"], json!(false));
        assert_eq!(body["dynamicComputeUnitLimit"], json!(true));
        assert_eq!(body["skipUserAccountsRpcCalls"], json!(false));
        assert_eq!(body["dynamicSlippage"], json!(false));
        assert_eq!(body["blockhashSlotsToExpiry"], json!(3));
        assert!(body["quoteResponse"].is_object());

        for absent in [
            "feeAccount",
            "trackingAccount",
            "destinationTokenAccount",
            "computeUnitPriceMicroLamports",
            "prioritizationFeeLamports",
            "payer",
        ] {
            assert!(body.get(absent).is_none(), "{absent} should be omitted");
        }
    }

    #[test]
    fn test_flag_overrides_coalesce() {
        let params = SwapInstructionsParams {
            wrap_and_unwrap_sol: Some(false),
            dynamic_compute_unit_limit: Some(false),
            use_shared_accounts: Some(true),
            ..Default::default()
        };
        let body = body(&params, &SwapDefaults::default());

        assert_eq!(body["wrapAndUnwrapSol"], json!(false));
        assert_eq!(body["dynamicComputeUnitLimit"], json!(false));
        assert_eq!(body["useSharedAccounts"], json!(true));
    }

    #[test]
    fn test_falsy_extras_fall_back_to_default() {
        let defaults = SwapDefaults {
            fee_account: "FeeAcct1111111111111111111111111111111111".to_string(),
            compute_unit_price_micro_lamports: 1000,
            ..Default::default()
        };
        let params = SwapInstructionsParams {
            fee_account: Some(String::new()),
            compute_unit_price_micro_lamports: Some(0),
            blockhash_slots_to_expiry: Some(0),
            ..Default::default()
        };
        let body = body(&params, &defaults);

        assert_eq!(body["feeAccount"], json!("FeeAcct1111111111111111111111111111111111"));
        assert_eq!(body["computeUnitPriceMicroLamports"], json!(1000));
        assert_eq!(body["blockhashSlotsToExpiry"], json!(3));
    }

    #[test]
    fn test_truthy_extras_override_default() {
        let params = SwapInstructionsParams {
            tracking_account: Some("Track111111111111111111111111111111111111".to_string()),
            destination_token_account: Some(
                "Dest1111111111111111111111111111111111111".to_string(),
            ),
            compute_unit_price_micro_lamports: Some(5000),
            blockhash_slots_to_expiry: Some(10),
            ..Default::default()
        };
        let body = body(&params, &SwapDefaults::default());

        assert_eq!(body["trackingAccount"], json!("Track111111111111111111111111111111111111"));
        assert_eq!(
            body["destinationTokenAccount"],
            json!("Dest1111111111111111111111111111111111111")
        );
        assert_eq!(body["computeUnitPriceMicroLamports"], json!(5000));
        assert_eq!(body["blockhashSlotsToExpiry"], json!(10));
    }

    #[test]
    fn test_extras_omitted_when_default_is_zero() {
        let defaults = SwapDefaults {
            blockhash_slots_to_expiry: 0,
            ..Default::default()
        };
        let params = SwapInstructionsParams {
            blockhash_slots_to_expiry: Some(0),
            ..Default::default()
        };
        assert!(body(&params, &defaults).get("blockhashSlotsToExpiry").is_none());
    }

    #[test]
    fn test_quote_posted_back_unchanged() {
        let raw = json!({
            "inputMint": "So11111111111111111111111111111111111111112",
            "inAmount": "100000000",
            "outAmount": "512345678901",
            "routePlan": [{
                "swapInfo": {
                    "ammKey": "6UeJYTLU1adaoHWeApWsoj1xNEDbWA2RhM2DLc8CrDDi",
                    "poolVersion": 4
                },
                "percent": 100,
                "bps": 10000
            }],
            "mostReliableAmmsQuoteReport": {"info": {}}
        });
        let quote: QuoteResponse = serde_json::from_value(raw.clone()).unwrap();
        let request = SwapInstructionsRequest::resolve(
            WALLET,
            &quote,
            &SwapInstructionsParams::default(),
            &SwapDefaults::default(),
        );

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["quoteResponse"], raw);
    }

    #[test]
    fn test_pass_through_fields() {
        let params = SwapInstructionsParams {
            payer: Some("Payer111111111111111111111111111111111111".to_string()),
            prioritization_fee_lamports: Some(PrioritizationFeeLamports::with_max_lamports(
                "high", 50_000,
            )),
            ..Default::default()
        };
        let body = body(&params, &SwapDefaults::default());

        assert_eq!(body["payer"], json!("Payer111111111111111111111111111111111111"));
        let fee = &body["prioritizationFeeLamports"]["priorityLevelWithMaxLamports"];
        assert_eq!(fee["priorityFeeInLamports"], json!(50_000));
    }
}
