//! # Aggregator Seam
//!
//! The two outbound calls, behind a trait so the orchestrator can run against
//! the real HTTP client or an in-memory double.

use crate::jupiter::quote::QuoteRequest;
use crate::jupiter::swap::SwapInstructionsRequest;
use crate::jupiter::types::{QuoteResponse, SwapInstructionsResponse};
use async_trait::async_trait;
use lib_core::Result;

#[async_trait]
pub trait JupiterApi: Send + Sync {
    /// `GET /quote`
    async fn quote(&self, request: &QuoteRequest) -> Result<QuoteResponse>;

    /// `POST /swap-instructions`
    async fn swap_instructions(
        &self,
        request: &SwapInstructionsRequest<'_>,
    ) -> Result<SwapInstructionsResponse>;
}
