//! # Node Identity Keys (secp256k1)
//!
//! secp256k1 key pairs used as network participant identities.
//!
//! ## Security Properties
//!
//! - Keys drawn from the OS-seeded thread RNG
//! - Secret scalar zeroized on drop by k256's `SigningKey`
//!
//! ## Use Cases
//!
//! - Generating fresh node identities
//! - Deriving discovery v4 node IDs from public keys

use crate::hashing::keccak256;
use crate::CryptoError;
use k256::ecdsa::{SigningKey, VerifyingKey};

/// Length of an uncompressed SEC1 public key (`0x04 || X || Y`).
pub const UNCOMPRESSED_PUBLIC_KEY_LEN: usize = 65;

/// Uncompressed secp256k1 public key (65 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1PublicKey([u8; UNCOMPRESSED_PUBLIC_KEY_LEN]);

impl Secp256k1PublicKey {
    fn from_verifying_key(verifying_key: &VerifyingKey) -> Self {
        let point = verifying_key.to_encoded_point(false);
        let mut bytes = [0u8; UNCOMPRESSED_PUBLIC_KEY_LEN];
        bytes.copy_from_slice(point.as_bytes());
        Self(bytes)
    }

    /// Get raw uncompressed bytes.
    pub fn as_bytes(&self) -> &[u8; UNCOMPRESSED_PUBLIC_KEY_LEN] {
        &self.0
    }

    /// Derive the discovery v4 node ID: Keccak256(X || Y).
    pub fn to_node_id(&self) -> [u8; 32] {
        // Skip 0x04 prefix
        keccak256(&self.0[1..])
    }
}

/// secp256k1 keypair.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Get public key (uncompressed, 65 bytes).
    pub fn public_key(&self) -> Secp256k1PublicKey {
        Secp256k1PublicKey::from_verifying_key(self.signing_key.verifying_key())
    }

    /// Shorthand for `public_key().to_node_id()`.
    pub fn node_id(&self) -> [u8; 32] {
        self.public_key().to_node_id()
    }
}
