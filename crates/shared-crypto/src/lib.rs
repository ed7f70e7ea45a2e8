//! # Shared Crypto - Node Identity Primitives
//!
//! **Status:** Production
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256, Keccak-256 | Subnet derivation, node ID derivation |
//! | `ecdsa` | secp256k1 | Node identity key pairs |
//!
//! ## Node ID Scheme
//!
//! Node IDs follow the discovery v4 identity scheme: the Keccak-256 digest of
//! the 64-byte uncompressed public key (`X || Y`, SEC1 tag stripped).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use ecdsa::{Secp256k1KeyPair, Secp256k1PublicKey};
pub use errors::CryptoError;
pub use hashing::{keccak256, sha256, Hash};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
