//! Cryptographic primitives for rtt-sign
//!
//! - `identity`: Ed25519 keys, signing and verification
//! - `encoding`: base64 text form of keys and signatures
//! - `error`: error taxonomy for malformed input and RNG failure

pub mod encoding;
pub mod error;
pub mod identity;

// Re-export commonly used types
pub use error::{CryptoError, CryptoResult};
pub use identity::{
    generate, sign, verify, KeyPair, PublicKey, SecretKey, SignatureBytes, PUBLIC_KEY_SIZE,
    SECRET_KEY_SIZE, SIGNATURE_SIZE,
};

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_text_boundary_flow() {
        // Keys and signature travel as base64 text between invocations
        let pair = generate().unwrap();
        let priv_text = pair.secret_key().to_base64();
        let pub_text = pair.public_key().to_base64();

        let document = b"hello world";
        let secret = SecretKey::from_base64(&priv_text).unwrap();
        let sig_text = secret.sign(document).to_base64();

        let public_key = PublicKey::from_base64(&pub_text).unwrap();
        let signature = SignatureBytes::from_base64(&sig_text).unwrap();
        assert!(public_key.verify(document, &signature).is_ok());

        let tampered = b"hello world!";
        assert!(public_key.verify(tampered, &signature).is_err());
    }

    #[test]
    fn test_text_lengths_match_scheme() {
        let pair = generate().unwrap();

        assert_eq!(pair.public_key().to_base64().len(), 44);
        assert_eq!(pair.secret_key().to_base64().len(), 44);
        assert_eq!(pair.sign(b"x").to_base64().len(), 88);
    }
}
