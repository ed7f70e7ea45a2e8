//! # Domain Errors
//!
//! Error types for custody column assignment and search.

use std::time::Duration;
use thiserror::Error;

/// Subnet identifier, in `[0, subnet_count)`.
pub type SubnetId = u64;

/// Column index, in `[0, column_count)`.
pub type ColumnIndex = u64;

/// Custody error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CustodyError {
    /// A parameter is outside its allowed range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Subnet accumulation produced the wrong number of subnets.
    #[error("Internal invariant violated: {0}")]
    InternalInvariantViolation(String),

    /// Input is not a 32-byte hex identifier.
    #[error("Malformed node ID: {0}")]
    MalformedIdentifier(String),

    /// Search stopped through its cancellation token.
    #[error("Search cancelled after {attempts} attempts")]
    SearchCancelled {
        /// Candidates tried before cancellation
        attempts: u64,
    },

    /// Search ran past its deadline.
    #[error("Search deadline exceeded after {attempts} attempts ({elapsed:?})")]
    SearchDeadlineExceeded {
        /// Candidates tried before the deadline
        attempts: u64,
        /// Time spent searching
        elapsed: Duration,
    },

    /// Search used up its attempt budget.
    #[error("Search exhausted after {attempts} attempts")]
    SearchExhausted {
        /// Candidates tried
        attempts: u64,
    },

    /// Worker pool could not be started.
    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}
