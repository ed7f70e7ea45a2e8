//! # Hashing
//!
//! One-shot SHA-256 and Keccak-256 helpers.
//!
//! - SHA-256 drives the custody subnet derivation.
//! - Keccak-256 drives node ID derivation from public keys.

use sha2::Sha256;
use sha3::{Digest, Keccak256};

/// 256-bit digest.
pub type Hash = [u8; 32];

/// Hash data with SHA-256.
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash data with Keccak-256 (pre-NIST padding, as used by Ethereum).
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}
