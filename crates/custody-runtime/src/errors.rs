//! # Runtime Errors
//!
//! Process-level failures and their exit codes.

use das_custody::CustodyError;
use thiserror::Error;

/// Exit code for bad input or a failed source assignment.
pub const EXIT_INPUT_ERROR: u8 = 1;

/// Exit code for a failed or interrupted search.
pub const EXIT_SEARCH_ERROR: u8 = 2;

/// Runtime error types.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Configuration rejected after loading.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Positional node ID did not parse.
    #[error("Invalid node ID format: {0}")]
    MalformedNodeId(CustodyError),

    /// Custody columns of the source node could not be computed.
    #[error("Error getting custody columns: {0}")]
    Assignment(CustodyError),

    /// Search failed, was cancelled or ran out of budget.
    #[error("Error finding matching node ID: {0}")]
    Search(CustodyError),

    /// Search task panicked or was aborted.
    #[error("Search task failed: {0}")]
    SearchTask(String),

    /// Logging could not be initialised.
    #[error("Failed to initialise logging: {0}")]
    Logging(String),

    /// Report could not be written.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl RuntimeError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Search(_) | Self::SearchTask(_) => EXIT_SEARCH_ERROR,
            Self::Config(_)
            | Self::MalformedNodeId(_)
            | Self::Assignment(_)
            | Self::Logging(_)
            | Self::Output(_) => EXIT_INPUT_ERROR,
        }
    }
}
