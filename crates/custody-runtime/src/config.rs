//! # Runtime Configuration
//!
//! Network parameters and search limits, read once from the environment at
//! startup and then overridden by command-line flags.
//!
//! ## Environment
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATA_COLUMN_SIDECAR_SUBNET_COUNT` | 32 |
//! | `NUMBER_OF_COLUMNS` | 128 |
//! | `CUSTODY_SUBNET_COUNT` | 1 |
//! | `CUSTODY_SEARCH_WORKERS` | 1 |
//! | `CUSTODY_SEARCH_TIMEOUT_SECS` | unset (unbounded) |
//!
//! A value that fails to parse is reported and replaced by the default.

use crate::cli::Args;
use crate::errors::RuntimeError;
use das_custody::{CustodyConfig, DEFAULT_COLUMN_COUNT, DEFAULT_CUSTODY_SUBNET_COUNT, DEFAULT_SUBNET_COUNT};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Subnet count variable.
pub const ENV_SUBNET_COUNT: &str = "DATA_COLUMN_SIDECAR_SUBNET_COUNT";
/// Column count variable.
pub const ENV_COLUMN_COUNT: &str = "NUMBER_OF_COLUMNS";
/// Custody subnet count variable.
pub const ENV_CUSTODY_SUBNET_COUNT: &str = "CUSTODY_SUBNET_COUNT";
/// Search worker count variable.
pub const ENV_SEARCH_WORKERS: &str = "CUSTODY_SEARCH_WORKERS";
/// Search timeout variable, in seconds.
pub const ENV_SEARCH_TIMEOUT_SECS: &str = "CUSTODY_SEARCH_TIMEOUT_SECS";

/// Read access to environment variables.
pub trait EnvSource {
    /// Value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Search limits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Parallel workers.
    pub workers: usize,
    /// Wall-clock budget.
    pub timeout: Option<Duration>,
    /// Attempt budget.
    pub max_attempts: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            workers: 1,
            timeout: None,
            max_attempts: None,
        }
    }
}

/// Complete runtime configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Custody network parameters.
    pub custody: CustodyConfig,
    /// Search limits.
    pub search: SearchConfig,
}

impl RuntimeConfig {
    /// Apply command-line overrides.
    pub fn apply_args(mut self, args: &Args) -> Self {
        if let Some(workers) = args.workers {
            self.search.workers = workers;
        }
        if let Some(secs) = args.timeout {
            self.search.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(max) = args.max_attempts {
            self.search.max_attempts = Some(max);
        }
        self
    }

    /// Reject settings no search can run with.
    ///
    /// The custody count bound is enforced later, when columns are computed.
    pub fn validate(&self) -> Result<(), RuntimeError> {
        if self.search.workers == 0 {
            return Err(RuntimeError::Config(
                "search workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load configuration from `env`.
pub fn load_config_from(env: &impl EnvSource) -> RuntimeConfig {
    let custody = CustodyConfig::new(
        parse_env(env, ENV_SUBNET_COUNT, DEFAULT_SUBNET_COUNT),
        parse_env(env, ENV_COLUMN_COUNT, DEFAULT_COLUMN_COUNT),
        parse_env(env, ENV_CUSTODY_SUBNET_COUNT, DEFAULT_CUSTODY_SUBNET_COUNT),
    );

    let defaults = SearchConfig::default();
    let search = SearchConfig {
        workers: parse_env(env, ENV_SEARCH_WORKERS, defaults.workers),
        timeout: parse_env_opt::<u64>(env, ENV_SEARCH_TIMEOUT_SECS).map(Duration::from_secs),
        max_attempts: defaults.max_attempts,
    };

    debug!(?custody, ?search, "Loaded configuration");
    RuntimeConfig { custody, search }
}

/// Parse `name` as `T`, falling back to `default` with a diagnostic.
fn parse_env<T>(env: &impl EnvSource, name: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = env.var(name) else {
        return default;
    };
    match parse_decimal(&raw) {
        Ok(value) => value,
        Err(e) => {
            eprintln!(
                "Error parsing environment variable {}: {}. Using default value {}",
                name, e, default
            );
            default
        }
    }
}

/// Parse an optional `name` as `T`; unset or unparsable yields `None`.
fn parse_env_opt<T>(env: &impl EnvSource, name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = env.var(name)?;
    match parse_decimal(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            eprintln!(
                "Error parsing environment variable {}: {}. Leaving it unset",
                name, e
            );
            None
        }
    }
}

/// Plain unsigned decimal: digits only, no sign.
fn parse_decimal<T>(raw: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    if raw.starts_with('+') {
        return Err(format!("invalid digit in {raw:?}"));
    }
    raw.parse().map_err(|e: T::Err| e.to_string())
}
