//! Command-line arguments.

use clap::Parser;

/// custody-search: find a node ID with the same PeerDAS custody columns
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "custody-search", version)]
#[command(about = "Compute PeerDAS custody columns and search for a custody-equivalent node ID")]
pub struct Args {
    /// Source node ID (64 hex chars, optional 0x prefix). Random if omitted.
    pub node_id: Option<String>,

    /// Parallel search workers (overrides CUSTODY_SEARCH_WORKERS)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Give up after this many seconds (overrides CUSTODY_SEARCH_TIMEOUT_SECS)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Give up after this many candidates
    #[arg(long)]
    pub max_attempts: Option<u64>,

    /// Draw candidates from a seeded RNG instead of fresh key pairs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the source assignment and skip the search
    #[arg(long)]
    pub columns_only: bool,
}
