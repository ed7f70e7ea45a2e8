//! # Domain Entities
//!
//! Configuration, search control and search results.

use super::errors::CustodyError;
use super::invariants::{
    DEFAULT_COLUMN_COUNT, DEFAULT_CUSTODY_SUBNET_COUNT, DEFAULT_SUBNET_COUNT,
};
use super::value_objects::{ColumnSet, NodeId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Network parameters for custody assignment.
///
/// Built once at startup and passed explicitly to every operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CustodyConfig {
    /// `DATA_COLUMN_SIDECAR_SUBNET_COUNT`: subnets partitioning the columns.
    pub subnet_count: u64,
    /// `NUMBER_OF_COLUMNS`: total columns. Expected to be a multiple of
    /// `subnet_count`; the remainder is dropped otherwise.
    pub column_count: u64,
    /// `CUSTODY_SUBNET_COUNT`: subnets this node custodies.
    pub custody_subnet_count: u64,
}

impl Default for CustodyConfig {
    fn default() -> Self {
        Self {
            subnet_count: DEFAULT_SUBNET_COUNT,
            column_count: DEFAULT_COLUMN_COUNT,
            custody_subnet_count: DEFAULT_CUSTODY_SUBNET_COUNT,
        }
    }
}

impl CustodyConfig {
    /// Create a configuration.
    pub fn new(subnet_count: u64, column_count: u64, custody_subnet_count: u64) -> Self {
        Self {
            subnet_count,
            column_count,
            custody_subnet_count,
        }
    }

    /// Columns carried by each subnet (truncating).
    pub fn columns_per_subnet(&self) -> u64 {
        self.column_count.checked_div(self.subnet_count).unwrap_or(0)
    }

    /// Columns a node custodying `custody_subnet_count` subnets holds.
    pub fn custody_column_count(&self, custody_subnet_count: u64) -> u64 {
        custody_subnet_count.saturating_mul(self.columns_per_subnet())
    }
}

/// Cooperative cancellation flag shared between a search and its owner.
///
/// Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create an untriggered token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Bounds on a preimage search.
///
/// The default control never stops the search.
#[derive(Clone, Debug, Default)]
pub struct SearchControl {
    /// Checked once per candidate.
    pub cancellation: CancellationToken,
    /// Wall-clock budget measured from the start of the search.
    pub timeout: Option<Duration>,
    /// Maximum candidates to try.
    pub max_attempts: Option<u64>,
}

impl SearchControl {
    /// Unbounded search.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Attach a cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Set a wall-clock budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set an attempt cap.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Absolute deadline for a search started at `started`.
    ///
    /// A timeout too large to represent is treated as no deadline.
    pub fn deadline_from(&self, started: Instant) -> Option<Instant> {
        self.timeout.and_then(|t| started.checked_add(t))
    }

    /// Check whether the search may take another candidate.
    pub fn check(
        &self,
        attempts: u64,
        started: Instant,
        deadline: Option<Instant>,
    ) -> Result<(), CustodyError> {
        if self.cancellation.is_cancelled() {
            return Err(CustodyError::SearchCancelled { attempts });
        }
        if let Some(max) = self.max_attempts {
            if attempts >= max {
                return Err(CustodyError::SearchExhausted { attempts });
            }
        }
        if let Some(deadline) = deadline {
            let now = Instant::now();
            if now >= deadline {
                return Err(CustodyError::SearchDeadlineExceeded {
                    attempts,
                    elapsed: now.duration_since(started),
                });
            }
        }
        Ok(())
    }
}

/// Successful preimage search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Custody-equivalent node ID found.
    pub node_id: NodeId,
    /// Its column set (equal to the source's).
    pub columns: ColumnSet,
    /// Candidates tried, across all workers.
    pub attempts: u64,
    /// Wall-clock search time.
    pub elapsed: Duration,
}
