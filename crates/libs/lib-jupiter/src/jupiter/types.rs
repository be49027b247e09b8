//! # Jupiter API Types
//!
//! Wire types for the quote and swap-instructions endpoints.
//!
//! Quotes are passed through rather than re-validated: the body is kept as
//! received so it can be posted back to `/swap-instructions` unchanged, and
//! the typed view alongside it tolerates missing fields.

use lib_core::{AppError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Whether `amount` fixes the input side or the output side of the swap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapMode {
    #[default]
    ExactIn,
    ExactOut,
}

impl SwapMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapMode::ExactIn => "ExactIn",
            SwapMode::ExactOut => "ExactOut",
        }
    }
}

impl fmt::Display for SwapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// region: --- Quote

/// Response from Jupiter quote API.
///
/// Holds the body exactly as received, which is what serializes back out, and
/// a typed [`QuoteSummary`] of the fields this crate reads. Fields missing from
/// the body are defaulted in the summary rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct QuoteResponse {
    summary: QuoteSummary,
    raw: Value,
}

impl QuoteResponse {
    pub fn summary(&self) -> &QuoteSummary {
        &self.summary
    }

    /// The body as received from `/quote`.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Price impact as a number.
    pub fn price_impact(&self) -> Result<f64> {
        let pct = &self.summary.price_impact_pct;
        pct.trim().parse::<f64>().map_err(|_| {
            AppError::Decoding(format!("priceImpactPct is not a number: '{}'", pct))
        })
    }

    /// DEX labels along the route, in hop order.
    pub fn route_labels(&self) -> Vec<&str> {
        self.summary
            .route_plan
            .iter()
            .map(|step| step.swap_info.label.as_deref().unwrap_or("Unknown"))
            .collect()
    }
}

/// Placeholder quote: an empty JSON object.
impl Default for QuoteResponse {
    fn default() -> Self {
        Self {
            summary: QuoteSummary::default(),
            raw: Value::Object(Map::new()),
        }
    }
}

impl TryFrom<Value> for QuoteResponse {
    type Error = serde_json::Error;

    fn try_from(raw: Value) -> std::result::Result<Self, Self::Error> {
        if !raw.is_object() {
            return Err(serde::de::Error::custom("quote response is not a JSON object"));
        }
        let summary = QuoteSummary::deserialize(&raw)?;
        Ok(Self { summary, raw })
    }
}

impl From<QuoteResponse> for Value {
    fn from(quote: QuoteResponse) -> Self {
        quote.raw
    }
}

/// Typed view of a quote.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteSummary {
    pub input_mint: String,
    #[serde(deserialize_with = "string_or_number")]
    pub in_amount: String,
    pub output_mint: String,
    #[serde(deserialize_with = "string_or_number")]
    pub out_amount: String,
    /// Minimum out (ExactIn) or maximum in (ExactOut) after slippage
    #[serde(deserialize_with = "string_or_number")]
    pub other_amount_threshold: String,
    pub swap_mode: SwapMode,
    pub slippage_bps: u16,
    pub platform_fee: Option<PlatformFee>,
    /// Percentage as sent by the API, e.g. `"0.0012"`
    #[serde(deserialize_with = "string_or_number")]
    pub price_impact_pct: String,
    pub route_plan: Vec<RoutePlanStep>,
    pub context_slot: Option<u64>,
    pub time_taken: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlatformFee {
    #[serde(deserialize_with = "string_or_number")]
    pub amount: String,
    pub fee_bps: u16,
}

/// A step in Jupiter's routing plan
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoutePlanStep {
    pub swap_info: SwapInfo,
    pub percent: Option<u8>,
    pub bps: Option<u16>,
}

/// Details about a single swap operation within a route
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwapInfo {
    pub amm_key: String,
    pub label: Option<String>,
    pub input_mint: String,
    pub output_mint: String,
    #[serde(deserialize_with = "string_or_number")]
    pub in_amount: String,
    #[serde(deserialize_with = "string_or_number")]
    pub out_amount: String,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub fee_amount: Option<String>,
    pub fee_mint: Option<String>,
}

// endregion: --- Quote

// region: --- Swap Instructions

/// Priority fee descriptor forwarded verbatim to `/swap-instructions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrioritizationFeeLamports {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_level_with_max_lamports: Option<PriorityLevelWithMaxLamports>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityLevelWithMaxLamports {
    /// `medium`, `high` or `veryHigh`
    pub priority_level: String,
    pub priority_fee_in_lamports: u64,
}

impl PrioritizationFeeLamports {
    pub fn with_max_lamports(priority_level: impl Into<String>, lamports: u64) -> Self {
        Self {
            priority_level_with_max_lamports: Some(PriorityLevelWithMaxLamports {
                priority_level: priority_level.into(),
                priority_fee_in_lamports: lamports,
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMeta {
    pub pubkey: String,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// One Solana instruction as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    pub program_id: String,
    pub accounts: Vec<AccountMeta>,
    /// Base64-encoded instruction data
    pub data: String,
}

impl Instruction {
    /// Decode the base64 payload.
    pub fn decode_data(&self) -> Result<Vec<u8>> {
        lib_utils::b64_decode(&self.data).map_err(|e| {
            AppError::Decoding(format!(
                "Instruction data for program {} is not base64: {}",
                self.program_id, e
            ))
        })
    }

    pub fn signers(&self) -> impl Iterator<Item = &str> {
        self.accounts
            .iter()
            .filter(|a| a.is_signer)
            .map(|a| a.pubkey.as_str())
    }
}

/// Response from Jupiter swap-instructions API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapInstructionsResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_instructions: Vec<Instruction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compute_budget_instructions: Vec<Instruction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub setup_instructions: Vec<Instruction>,
    pub swap_instruction: Instruction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanup_instruction: Option<Instruction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address_lookup_table_addresses: Vec<String>,
}

impl SwapInstructionsResponse {
    /// All instructions in submission order: compute budget, setup, swap,
    /// cleanup, then any others.
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.compute_budget_instructions
            .iter()
            .chain(self.setup_instructions.iter())
            .chain(std::iter::once(&self.swap_instruction))
            .chain(self.cleanup_instruction.iter())
            .chain(self.other_instructions.iter())
    }

    pub fn instruction_count(&self) -> usize {
        self.instructions().count()
    }
}

// endregion: --- Swap Instructions

// region: --- Serde helpers

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Int(u64),
    Float(f64),
}

impl From<StringOrNumber> for String {
    fn from(raw: StringOrNumber) -> Self {
        match raw {
            StringOrNumber::Str(s) => s,
            StringOrNumber::Int(n) => n.to_string(),
            StringOrNumber::Float(f) => f.to_string(),
        }
    }
}

/// The API sends u64 amounts as strings; older deployments sent numbers.
/// `null` reads as an empty string.
fn string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    opt_string_or_number(deserializer).map(Option::unwrap_or_default)
}

fn opt_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    Option::<StringOrNumber>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

// endregion: --- Serde helpers
