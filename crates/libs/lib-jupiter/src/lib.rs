//! # Jupiter Library
//!
//! Quote and swap-instruction client for the Jupiter aggregator: request
//! assembly from configurable defaults, the two HTTP calls, and a result
//! envelope. Signing and submission are left to the caller.

pub mod api;
pub mod config;
pub mod jupiter;
pub mod resolve;
pub mod service;
pub mod swap_service;

// Re-export commonly used types from root for convenience
pub use api::JupiterApi;
pub use config::{Preset, TradingConfig};
pub use jupiter::{JupiterClient, JupiterClientBuilder};
pub use service::{JupiterService, JupiterTransactionResult, TransactionConfig};
pub use swap_service::SwapService;
