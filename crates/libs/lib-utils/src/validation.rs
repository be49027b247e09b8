//! # Validation Utilities
//!
//! Input validation helpers.

/// Shortest string accepted by [`is_valid_mint`].
pub const MINT_MIN_LEN: usize = 32;
/// Longest string accepted by [`is_valid_mint`].
pub const MINT_MAX_LEN: usize = 44;

/// Shallow plausibility check for a mint or wallet address.
///
/// Only the length is inspected (base58 pubkeys are 32 to 44 characters),
/// measured in UTF-16 code units. A `false` result means "possibly invalid":
/// the aggregator remains the authority on whether an address exists.
pub fn is_valid_mint(mint: &str) -> bool {
    (MINT_MIN_LEN..=MINT_MAX_LEN).contains(&mint_len(mint))
}

fn mint_len(mint: &str) -> usize {
    mint.encode_utf16().count()
}

/// Same check as [`is_valid_mint`], with a message suitable for logs.
pub fn validate_mint(mint: &str, field_name: &str) -> Result<(), String> {
    if is_valid_mint(mint) {
        Ok(())
    } else {
        Err(format!(
            "{} should be {}-{} characters, got {}",
            field_name,
            MINT_MIN_LEN,
            MINT_MAX_LEN,
            mint_len(mint)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_length_bounds() {
        assert!(!is_valid_mint(&"a".repeat(31)));
        assert!(is_valid_mint(&"a".repeat(32)));
        assert!(is_valid_mint(&"a".repeat(44)));
        assert!(!is_valid_mint(&"a".repeat(45)));
    }

    #[test]
    fn test_mint_content_is_not_checked() {
        // 0, O, I and l are not base58, but the check is length-only.
        assert!(is_valid_mint(&"0OIl".repeat(8)));
        assert!(is_valid_mint("So11111111111111111111111111111111111111112"));
        assert!(!is_valid_mint(""));
    }

    #[test]
    fn test_mint_length_counts_utf16_units() {
        // Each of these is one char but two UTF-16 code units.
        assert!(is_valid_mint(&"\u{1F600}".repeat(16)));
        assert!(!is_valid_mint(&"\u{1F600}".repeat(40)));
        // Multi-byte but single-unit chars count once.
        assert!(!is_valid_mint(&"\u{e9}".repeat(31)));
    }

    #[test]
    fn test_validate_mint_message() {
        let err = validate_mint("short", "inputMint").unwrap_err();
        assert!(err.contains("inputMint"));
        assert!(err.contains("got 5"));
    }
}
