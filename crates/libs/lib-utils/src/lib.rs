//! # Utilities Library
//!
//! Shared helpers for environment variables, base64 payloads, and address validation.

pub mod b64;
pub mod envs;
pub mod validation;

// Re-export commonly used functions
pub use b64::b64_decode;
pub use envs::{get_env_opt, get_env_parse_opt};
pub use validation::{is_valid_mint, validate_mint, MINT_MAX_LEN, MINT_MIN_LEN};
