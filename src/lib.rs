//! # rtt-sign
//!
//! Ed25519 keypair generation, file signing and signature verification,
//! with base64 text encoding for keys and signatures.
//!
//! ## Quick Start
//!
//! ```rust
//! use rtt_sign::crypto::{self, KeyPair};
//!
//! // Generate a keypair
//! let pair = KeyPair::generate().unwrap();
//! println!("pub:{}", pair.public_key());
//!
//! // Sign some bytes
//! let message = b"hello world";
//! let signature = crypto::sign(pair.secret_key().as_bytes(), message).unwrap();
//!
//! // Anyone holding the public key can verify
//! assert!(crypto::verify(pair.public_key().as_bytes(), message, signature.as_bytes()));
//! ```
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  rtt-sign (gen | sign | verify | pub)    │
//! └────────────────────┬─────────────────────┘
//!                      │
//! ┌────────────────────▼─────────────────────┐
//! │  tool: base64 text + whole-file reads    │
//! └────────────────────┬─────────────────────┘
//!                      │
//! ┌────────────────────▼─────────────────────┐
//! │  crypto: Ed25519 keys and signatures     │
//! └──────────────────────────────────────────┘
//! ```
//!
//! The `connector` module backs the separate `rtt-connector` binary, a
//! line-delimited JSON stub that acknowledges every request.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod connector;
pub mod crypto;
pub mod tool;

// Re-export main types at crate root
pub use crypto::{CryptoError, CryptoResult, KeyPair, PublicKey, SecretKey, SignatureBytes};
pub use tool::{SignatureTool, ToolError, ToolResult, Verdict};
