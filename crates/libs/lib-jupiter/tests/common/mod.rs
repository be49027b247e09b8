//! In-memory aggregator used by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use lib_core::{AppError, Result};
use lib_jupiter::jupiter::quote::QuoteRequest;
use lib_jupiter::jupiter::swap::SwapInstructionsRequest;
use lib_jupiter::jupiter::{QuoteResponse, SwapInstructionsResponse};
use lib_jupiter::JupiterApi;
use serde_json::{json, Value};
use std::sync::Mutex;

pub const WALLET: &str = "FpJxBcaMAid9E4Mr3pLSyKk5JMUPiWtGcYBeYzQdRtgp";
pub const SOL: &str = "So11111111111111111111111111111111111111112";
pub const BONK: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";

pub enum Failure {
    Quote(AppError),
    SwapInstructions(AppError),
}

/// Records every request and answers with canned responses.
pub struct MockJupiter {
    pub quote_response: QuoteResponse,
    pub instructions_response: SwapInstructionsResponse,
    pub failure: Mutex<Option<Failure>>,
    pub quote_calls: Mutex<Vec<QuoteRequest>>,
    pub swap_calls: Mutex<Vec<Value>>,
}

impl Default for MockJupiter {
    fn default() -> Self {
        Self {
            quote_response: sample_quote(),
            instructions_response: sample_instructions(),
            failure: Mutex::new(None),
            quote_calls: Mutex::new(Vec::new()),
            swap_calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockJupiter {
    pub fn failing(failure: Failure) -> Self {
        Self {
            failure: Mutex::new(Some(failure)),
            ..Default::default()
        }
    }

    pub fn quote_calls(&self) -> Vec<QuoteRequest> {
        self.quote_calls.lock().unwrap().clone()
    }

    pub fn swap_calls(&self) -> Vec<Value> {
        self.swap_calls.lock().unwrap().clone()
    }

    fn take_failure(&self, applies: impl Fn(&Failure) -> bool) -> Option<AppError> {
        let mut failure = self.failure.lock().unwrap();
        if !failure.as_ref().is_some_and(applies) {
            return None;
        }
        match failure.take() {
            Some(Failure::Quote(err)) | Some(Failure::SwapInstructions(err)) => Some(err),
            None => None,
        }
    }

    /// Query value of the only recorded quote call.
    pub fn sent_query(&self, key: &str) -> Option<String> {
        let calls = self.quote_calls();
        assert_eq!(calls.len(), 1, "expected exactly one quote call");
        calls[0]
            .query_pairs()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

#[async_trait]
impl JupiterApi for MockJupiter {
    async fn quote(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        self.quote_calls.lock().unwrap().push(request.clone());
        if let Some(err) = self.take_failure(|f| matches!(f, Failure::Quote(_))) {
            return Err(err);
        }
        Ok(self.quote_response.clone())
    }

    async fn swap_instructions(
        &self,
        request: &SwapInstructionsRequest<'_>,
    ) -> Result<SwapInstructionsResponse> {
        self.swap_calls
            .lock()
            .unwrap()
            .push(serde_json::to_value(request).unwrap());
        if let Some(err) = self.take_failure(|f| matches!(f, Failure::SwapInstructions(_))) {
            return Err(err);
        }
        Ok(self.instructions_response.clone())
    }
}

pub fn sample_quote() -> QuoteResponse {
    serde_json::from_value(json!({
        "inputMint": SOL,
        "inAmount": "100000000",
        "outputMint": BONK,
        "outAmount": "512345678901",
        "otherAmountThreshold": "507222222222",
        "swapMode": "ExactIn",
        "slippageBps": 100,
        "platformFee": null,
        "priceImpactPct": "0.0125",
        "routePlan": [{
            "swapInfo": {
                "ammKey": "6UeJYTLU1adaoHWeApWsoj1xNEDbWA2RhM2DLc8CrDDi",
                "label": "Raydium",
                "inputMint": SOL,
                "outputMint": BONK,
                "inAmount": "100000000",
                "outAmount": "512345678901",
                "feeAmount": "250000",
                "feeMint": SOL
            },
            "percent": 100,
            "bps": 10000
        }],
        "contextSlot": 299283763,
        "timeTaken": 0.004
    }))
    .unwrap()
}

pub fn sample_instructions() -> SwapInstructionsResponse {
    serde_json::from_value(json!({
        "computeBudgetInstructions": [{
            "programId": "ComputeBudget111111111111111111111111111111",
            "accounts": [],
            "data": "AsBcFQA="
        }],
        "setupInstructions": [],
        "swapInstruction": {
            "programId": "JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4",
            "accounts": [
                {"pubkey": WALLET, "isSigner": true, "isWritable": true}
            ],
            "data": "5RfLl3rjrSoBAAAAJGQAAQ=="
        },
        "cleanupInstruction": null,
        "addressLookupTableAddresses": []
    }))
    .unwrap()
}
