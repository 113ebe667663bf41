//! Ed25519 keys and signatures
//!
//! Provides keypair generation, signing and verification over raw message
//! bytes. Ed25519 hashes the message internally (SHA-512), so callers pass
//! the full content, never a pre-computed digest.

use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::encoding;
use super::error::{CryptoError, CryptoResult};

/// Size of a public key in bytes
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of a secret key in bytes
pub const SECRET_KEY_SIZE: usize = 32;

/// Size of a signature in bytes
pub const SIGNATURE_SIZE: usize = 64;

/// A public key for signature verification
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey(pub [u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Create from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let arr: [u8; PUBLIC_KEY_SIZE] =
            bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidKeyFormat {
                    expected: PUBLIC_KEY_SIZE,
                    actual: bytes.len(),
                })?;
        Ok(PublicKey(arr))
    }

    /// Parse base64 text, optionally prefixed with `ed25519:`
    pub fn from_base64(text: &str) -> CryptoResult<Self> {
        let bytes = encoding::decode(encoding::strip_scheme(text))
            .map_err(|_| CryptoError::InvalidKeyEncoding)?;
        Self::from_bytes(&bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Convert to base64 text
    pub fn to_base64(&self) -> String {
        encoding::encode(&self.0)
    }

    /// Short hex fingerprint for logs
    pub fn fingerprint(&self) -> String {
        hex::encode(&self.0[..8])
    }

    /// Verify a signature against this public key
    ///
    /// Uses strict verification: small-order keys and `R` points are
    /// rejected, so a signature only verifies if the paired secret key made it.
    pub fn verify(&self, message: &[u8], signature: &SignatureBytes) -> CryptoResult<()> {
        let verifying_key =
            VerifyingKey::from_bytes(&self.0).map_err(|_| CryptoError::InvalidPublicKey)?;

        let sig = Signature::from_bytes(&signature.0);

        verifying_key
            .verify_strict(message, &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({}...)", self.fingerprint())
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_base64())
    }
}

impl serde::Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> serde::Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_base64(&s).map_err(serde::de::Error::custom)
    }
}

/// A signature produced by a secret key
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SignatureBytes(pub [u8; SIGNATURE_SIZE]);

// Arrays longer than 32 don't derive serde, and we want base64 text anyway
impl serde::Serialize for SignatureBytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> serde::Deserialize<'de> for SignatureBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_base64(&s).map_err(serde::de::Error::custom)
    }
}

impl SignatureBytes {
    /// Create from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let arr: [u8; SIGNATURE_SIZE] =
            bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidSignatureFormat {
                    expected: SIGNATURE_SIZE,
                    actual: bytes.len(),
                })?;
        Ok(SignatureBytes(arr))
    }

    /// Parse base64 text
    pub fn from_base64(text: &str) -> CryptoResult<Self> {
        let bytes = encoding::decode(text).map_err(|_| CryptoError::InvalidSignatureEncoding)?;
        Self::from_bytes(&bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }

    /// Convert to base64 text
    pub fn to_base64(&self) -> String {
        encoding::encode(&self.0)
    }
}

impl std::fmt::Debug for SignatureBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({}...)", hex::encode(&self.0[..8]))
    }
}

impl std::fmt::Display for SignatureBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_base64())
    }
}

/// Ed25519 secret key (the 32-byte seed)
///
/// The bytes are zeroized when dropped and never printed by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; SECRET_KEY_SIZE]);

impl SecretKey {
    /// Create from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let arr: [u8; SECRET_KEY_SIZE] =
            bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidKeyFormat {
                    expected: SECRET_KEY_SIZE,
                    actual: bytes.len(),
                })?;
        Ok(SecretKey(arr))
    }

    /// Parse base64 text
    pub fn from_base64(text: &str) -> CryptoResult<Self> {
        let mut bytes = encoding::decode(text).map_err(|_| CryptoError::InvalidKeyEncoding)?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }

    /// Get the secret key bytes
    ///
    /// # Security Warning
    /// Handle with care! The secret key should never be logged or
    /// stored unencrypted.
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_SIZE] {
        &self.0
    }

    /// Convert to base64 text
    pub fn to_base64(&self) -> String {
        encoding::encode(&self.0)
    }

    /// Derive the paired public key
    pub fn public_key(&self) -> PublicKey {
        PublicKey(SigningKey::from_bytes(&self.0).verifying_key().to_bytes())
    }

    /// Sign a message
    pub fn sign(&self, message: &[u8]) -> SignatureBytes {
        let signing_key = SigningKey::from_bytes(&self.0);
        SignatureBytes(signing_key.sign(message).to_bytes())
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// A linked public/secret key pair
#[derive(Clone, Debug)]
pub struct KeyPair {
    public_key: PublicKey,
    secret_key: SecretKey,
}

impl KeyPair {
    /// Generate a new random keypair from the OS random source
    pub fn generate() -> CryptoResult<Self> {
        let mut seed = [0u8; SECRET_KEY_SIZE];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|e| CryptoError::RandomSourceUnavailable(e.to_string()))?;

        let pair = Self::from_seed(&seed);
        seed.zeroize();
        Ok(pair)
    }

    /// Create from a seed (deterministic generation)
    pub fn from_seed(seed: &[u8; SECRET_KEY_SIZE]) -> Self {
        Self::from_secret(SecretKey(*seed))
    }

    /// Rebuild the pair from an existing secret key
    pub fn from_secret(secret_key: SecretKey) -> Self {
        KeyPair {
            public_key: secret_key.public_key(),
            secret_key,
        }
    }

    /// Get the public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Get the secret key
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Sign a message
    pub fn sign(&self, message: &[u8]) -> SignatureBytes {
        self.secret_key.sign(message)
    }

    /// Verify a signature (convenience method)
    pub fn verify(&self, message: &[u8], signature: &SignatureBytes) -> CryptoResult<()> {
        self.public_key.verify(message, signature)
    }
}

/// Generate a fresh keypair
pub fn generate() -> CryptoResult<KeyPair> {
    KeyPair::generate()
}

/// Sign `message` with raw secret key bytes
///
/// Fails with `InvalidKeyFormat` unless `secret_key` is exactly
/// [`SECRET_KEY_SIZE`] bytes.
pub fn sign(secret_key: &[u8], message: &[u8]) -> CryptoResult<SignatureBytes> {
    Ok(SecretKey::from_bytes(secret_key)?.sign(message))
}

/// Check `signature` over `message` against raw public key bytes
///
/// Malformed keys or signatures of any length give `false`.
pub fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> bool {
    let (Ok(public_key), Ok(signature)) = (
        PublicKey::from_bytes(public_key),
        SignatureBytes::from_bytes(signature),
    ) else {
        return false;
    };
    public_key.verify(message, &signature).is_ok()
}
