//! # custody-search
//!
//! Prints the PeerDAS custody columns of a node ID and searches for another
//! node ID with the identical column set.
//!
//! ## Exit Codes
//!
//! - `0` - Match found (or `--columns-only`)
//! - `1` - Malformed node ID, bad configuration, or the source assignment failed
//! - `2` - Search failed, was interrupted, or ran out of time or attempts

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use custody_runtime::logging::init_tracing;
use custody_runtime::report::write_failure;
use custody_runtime::{run, Args, ProcessEnv, EXIT_INPUT_ERROR};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_tracing() {
        eprintln!("{e}");
        return ExitCode::from(EXIT_INPUT_ERROR);
    }

    let mut stdout = std::io::stdout();
    match run(args, &ProcessEnv, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Run failed");
            ExitCode::from(write_failure(&mut std::io::stderr(), &e))
        }
    }
}
