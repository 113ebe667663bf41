//! File-level signing operations behind the `rtt-sign` command line
//!
//! Keys and signatures arrive as base64 text; files are read whole into
//! memory before signing or verifying.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::crypto::{CryptoError, KeyPair, PublicKey, SecretKey, SignatureBytes};

/// Errors surfaced by the signing tool
#[derive(Error, Debug)]
pub enum ToolError {
    /// Malformed key, malformed signature, or RNG failure
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// The target file is missing or unreadable
    #[error("Failed to read {}: {}", .path.display(), .source)]
    FileRead {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Result type for tool operations
pub type ToolResult<T> = Result<T, ToolError>;

/// Outcome of a well-formed verification request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The signature matches the file and public key
    Ok,
    /// The signature does not match
    Fail,
}

impl Verdict {
    /// True for [`Verdict::Ok`]
    pub fn is_ok(self) -> bool {
        self == Verdict::Ok
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ok => f.write_str("OK"),
            Verdict::Fail => f.write_str("FAIL"),
        }
    }
}

/// Keypair generation, file signing and file verification
pub struct SignatureTool;

impl SignatureTool {
    /// Generate a fresh keypair
    pub fn generate() -> ToolResult<KeyPair> {
        let pair = KeyPair::generate()?;
        debug!(public_key = %pair.public_key().fingerprint(), "generated keypair");
        Ok(pair)
    }

    /// Derive the public key for a base64 private key
    pub fn public_key_of(secret_b64: &str) -> ToolResult<PublicKey> {
        Ok(SecretKey::from_base64(secret_b64)?.public_key())
    }

    /// Sign the full contents of `path` with a base64 private key
    pub fn sign_file(secret_b64: &str, path: &Path) -> ToolResult<SignatureBytes> {
        let message = read_file(path)?;
        let secret = SecretKey::from_base64(secret_b64)?;

        let signature = secret.sign(&message);
        debug!(
            file = %path.display(),
            bytes = message.len(),
            public_key = %secret.public_key().fingerprint(),
            "signed file"
        );
        Ok(signature)
    }

    /// Verify a base64 signature over the contents of `path`
    ///
    /// Malformed key or signature text is an error, never a [`Verdict::Fail`].
    pub fn verify_file(public_b64: &str, path: &Path, signature_b64: &str) -> ToolResult<Verdict> {
        let message = read_file(path)?;
        let public_key = PublicKey::from_base64(public_b64)?;
        let signature = SignatureBytes::from_base64(signature_b64)?;

        let verdict = match public_key.verify(&message, &signature) {
            Ok(()) => Verdict::Ok,
            Err(e) => {
                debug!(reason = %e, "verification rejected");
                Verdict::Fail
            }
        };
        debug!(
            file = %path.display(),
            bytes = message.len(),
            public_key = %public_key.fingerprint(),
            %verdict,
            "verified file"
        );
        Ok(verdict)
    }
}

fn read_file(path: &Path) -> ToolResult<Vec<u8>> {
    fs::read(path).map_err(|source| ToolError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
