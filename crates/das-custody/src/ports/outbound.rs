//! # Outbound Ports
//!
//! Traits for external dependencies (identity generation).

use crate::domain::NodeId;

/// Candidate node ID generator - outbound port.
///
/// Each call yields a fresh candidate. Sources need not avoid repeats.
pub trait NodeIdSource {
    /// Produce the next candidate.
    fn next_node_id(&mut self) -> NodeId;

    /// Independent source for parallel worker `stream`.
    ///
    /// Forks of a seeded source must not replay each other's candidates.
    fn fork(&self, stream: u64) -> Self
    where
        Self: Sized;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock source replaying a fixed list of node IDs, cycling when exhausted.
#[derive(Clone, Debug, Default)]
pub struct MockNodeIdSource {
    /// Candidates in replay order.
    pub ids: Vec<NodeId>,
    /// Next position.
    pub position: usize,
}

impl MockNodeIdSource {
    /// Create from a list of candidates.
    pub fn new(ids: Vec<NodeId>) -> Self {
        Self { ids, position: 0 }
    }
}

impl NodeIdSource for MockNodeIdSource {
    fn next_node_id(&mut self) -> NodeId {
        if self.ids.is_empty() {
            return NodeId::ZERO;
        }
        let id = self.ids[self.position % self.ids.len()];
        self.position = self.position.wrapping_add(1);
        id
    }

    fn fork(&self, stream: u64) -> Self {
        Self {
            ids: self.ids.clone(),
            position: stream as usize,
        }
    }
}
