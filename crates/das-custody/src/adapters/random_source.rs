//! # Random Node ID Source
//!
//! Uniform 32-byte candidates from a seedable RNG. Orders of magnitude
//! cheaper than key generation and reproducible when seeded, which makes it
//! the source of choice for tests and benchmarks.

use crate::domain::{NodeId, NODE_ID_LEN};
use crate::ports::NodeIdSource;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Stream spacing for forked seeds (golden ratio, 64-bit).
const STREAM_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// RNG-backed candidate source.
#[derive(Clone, Debug)]
pub struct RandomNodeIdSource {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomNodeIdSource {
    /// Source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Reproducible source.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }
}

impl Default for RandomNodeIdSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl NodeIdSource for RandomNodeIdSource {
    fn next_node_id(&mut self) -> NodeId {
        let mut bytes = [0u8; NODE_ID_LEN];
        self.rng.fill_bytes(&mut bytes);
        NodeId::new(bytes)
    }

    fn fork(&self, stream: u64) -> Self {
        match self.seed {
            Some(seed) => {
                Self::seeded(seed.wrapping_add(stream.wrapping_add(1).wrapping_mul(STREAM_STRIDE)))
            }
            None => Self::from_entropy(),
        }
    }
}
