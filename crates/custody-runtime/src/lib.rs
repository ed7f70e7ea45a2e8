//! # Custody Runtime
//!
//! Library half of the `custody-search` binary.
//!
//! ## Modules
//!
//! - `cli` - Command-line arguments
//! - `config` - Environment configuration with default fallback
//! - `errors` - Runtime errors and exit codes
//! - `logging` - Subscriber setup (stderr)
//! - `report` - Standard output lines
//! - `runner` - One end-to-end invocation
//!
//! ## Output
//!
//! ```text
//! custody subnet count: 1
//! Source node ID: 9f3c...
//! Source columns: [26 58 90 122]
//! Source subnets: [26]
//! Starting search...
//! Search took 2.1ms
//! Found node ID: 41d7...
//! Attempts: 29
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod report;
pub mod runner;

pub use cli::Args;
pub use config::{load_config_from, EnvSource, ProcessEnv, RuntimeConfig, SearchConfig};
pub use errors::{RuntimeError, EXIT_INPUT_ERROR, EXIT_SEARCH_ERROR};
pub use runner::{run, run_until};
