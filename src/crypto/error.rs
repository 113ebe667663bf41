//! Cryptographic error types

use thiserror::Error;

/// Errors that can occur in key, signature and randomness handling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The key text is not valid base64
    #[error("Invalid key format: key is not valid base64")]
    InvalidKeyEncoding,

    /// The decoded key has the wrong number of bytes
    #[error("Invalid key format: expected {expected} bytes, got {actual}")]
    InvalidKeyFormat {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// The signature text is not valid base64
    #[error("Invalid signature format: signature is not valid base64")]
    InvalidSignatureEncoding,

    /// The decoded signature has the wrong number of bytes
    #[error("Invalid signature format: expected {expected} bytes, got {actual}")]
    InvalidSignatureFormat {
        /// Expected signature length in bytes
        expected: usize,
        /// Actual signature length in bytes
        actual: usize,
    },

    /// The public key bytes do not decode to a curve point
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Signature verification failed - the signature is invalid
    #[error("Signature verification failed")]
    SignatureVerificationFailed,

    /// The operating system random source could not be read
    #[error("Random source unavailable: {0}")]
    RandomSourceUnavailable(String),
}

impl CryptoError {
    /// True for errors caused by malformed key material
    pub fn is_key_format(&self) -> bool {
        matches!(
            self,
            CryptoError::InvalidKeyEncoding | CryptoError::InvalidKeyFormat { .. }
        )
    }

    /// True for errors caused by a malformed signature
    pub fn is_signature_format(&self) -> bool {
        matches!(
            self,
            CryptoError::InvalidSignatureEncoding | CryptoError::InvalidSignatureFormat { .. }
        )
    }
}

/// Result type for cryptographic operations
pub type CryptoResult<T> = Result<T, CryptoError>;
