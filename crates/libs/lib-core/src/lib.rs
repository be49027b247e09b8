//! # Core Library
//!
//! Error type and environment-driven configuration shared by the Jupiter crates.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
