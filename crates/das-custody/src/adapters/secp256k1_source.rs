//! # secp256k1 Node ID Source
//!
//! Generates a fresh secp256k1 key pair per candidate and derives its
//! discovery v4 node ID. This is how real nodes obtain their identity, so a
//! match found here can be backed by a usable key.

use crate::domain::NodeId;
use crate::ports::NodeIdSource;
use shared_crypto::Secp256k1KeyPair;

/// Key-pair backed candidate source.
#[derive(Clone, Copy, Debug, Default)]
pub struct Secp256k1NodeIdSource;

impl Secp256k1NodeIdSource {
    /// Create a new source.
    pub fn new() -> Self {
        Self
    }

    /// Generate a single random node ID.
    pub fn generate() -> NodeId {
        NodeId::new(Secp256k1KeyPair::generate().node_id())
    }
}

impl NodeIdSource for Secp256k1NodeIdSource {
    fn next_node_id(&mut self) -> NodeId {
        Self::generate()
    }

    fn fork(&self, _stream: u64) -> Self {
        // Thread RNG is per thread; forks are already independent.
        Self
    }
}
