//! Base64 text encoding for keys and signatures
//!
//! Standard alphabet with padding. Only used at the I/O boundary; the
//! byte sequences are what the rest of the crate works with.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Scheme prefix accepted in front of public key text (`ed25519:<base64>`)
pub const SCHEME_PREFIX: &str = "ed25519:";

/// Encode bytes to base64 for display
pub fn encode(data: &[u8]) -> String {
    BASE64.encode(data)
}

/// Decode base64 to bytes, ignoring surrounding whitespace
pub fn decode(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    BASE64.decode(encoded.trim())
}

/// Strip an optional `ed25519:` scheme prefix from key text
pub(crate) fn strip_scheme(text: &str) -> &str {
    let text = text.trim();
    text.strip_prefix(SCHEME_PREFIX).unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_is_kept() {
        assert_eq!(encode(b"hello world"), "aGVsbG8gd29ybGQ=");
        assert_eq!(encode(&[0u8; 32]).len(), 44);
        assert_eq!(encode(&[0u8; 64]).len(), 88);
    }

    #[test]
    fn test_decode_trims_whitespace() {
        assert_eq!(decode("  aGVsbG8gd29ybGQ=\n").unwrap(), b"hello world");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("not base64!!").is_err());
        // URL-safe alphabet is not accepted
        assert!(decode("-_-_").is_err());
    }

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("ed25519:AAAA"), "AAAA");
        assert_eq!(strip_scheme(" AAAA \n"), "AAAA");
        assert_eq!(strip_scheme("rsa:AAAA"), "rsa:AAAA");
    }
}
