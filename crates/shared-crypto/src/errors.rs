//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Secret scalar is zero or not below the curve order
    #[error("Invalid private key")]
    InvalidPrivateKey,
}
