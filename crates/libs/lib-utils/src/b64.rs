//! # Base64 Encoding/Decoding
//!
//! Instruction payloads returned by the aggregator are standard (padded) base64.

use base64::{engine::general_purpose, Engine as _};

/// Decode a standard base64 string to bytes.
pub fn b64_decode(b64: &str) -> Result<Vec<u8>, Error> {
    general_purpose::STANDARD
        .decode(b64)
        .map_err(|_| Error::FailToB64Decode)
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToB64Decode,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_padded_payload() {
        assert_eq!(b64_decode("AQID").unwrap(), vec![1, 2, 3]);
        assert_eq!(b64_decode("AQ==").unwrap(), vec![1]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(b64_decode("not base64!").is_err());
    }
}
