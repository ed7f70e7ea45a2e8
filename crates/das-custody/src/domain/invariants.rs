//! # Domain Invariants
//!
//! Rules that must always hold for custody assignment.

use super::entities::CustodyConfig;
use super::errors::{CustodyError, SubnetId};
use super::value_objects::ColumnSet;
use std::collections::HashSet;

/// Default `DATA_COLUMN_SIDECAR_SUBNET_COUNT`.
pub const DEFAULT_SUBNET_COUNT: u64 = 32;

/// Default `NUMBER_OF_COLUMNS`.
pub const DEFAULT_COLUMN_COUNT: u64 = 128;

/// Default `CUSTODY_SUBNET_COUNT`.
pub const DEFAULT_CUSTODY_SUBNET_COUNT: u64 = 1;

/// Invariant: custody count is within `[0, subnet_count]` and the subnet
/// space is non-empty.
pub fn invariant_custody_count_bounded(
    config: &CustodyConfig,
    custody_subnet_count: u64,
) -> Result<(), CustodyError> {
    if config.subnet_count == 0 {
        return Err(CustodyError::InvalidParameter(
            "subnet_count must be greater than zero".to_string(),
        ));
    }
    if custody_subnet_count > config.subnet_count {
        return Err(CustodyError::InvalidParameter(format!(
            "custody_subnet_count {} must not exceed subnet_count {}",
            custody_subnet_count, config.subnet_count
        )));
    }
    Ok(())
}

/// Invariant: subnet accumulation yields exactly the requested number of
/// distinct subnets.
pub fn invariant_distinct_subnets(
    subnets: &[SubnetId],
    custody_subnet_count: u64,
) -> Result<(), CustodyError> {
    let distinct: HashSet<_> = subnets.iter().collect();
    if distinct.len() != subnets.len() || subnets.len() as u64 != custody_subnet_count {
        return Err(CustodyError::InternalInvariantViolation(format!(
            "expected {} distinct subnets, got {} ({} distinct)",
            custody_subnet_count,
            subnets.len(),
            distinct.len()
        )));
    }
    Ok(())
}

/// Invariant: columns divide evenly across subnets.
///
/// Not enforced by assignment; uneven configurations silently drop the
/// remainder columns.
pub fn invariant_columns_divisible(config: &CustodyConfig) -> bool {
    config.subnet_count != 0 && config.column_count % config.subnet_count == 0
}

/// Invariant: a column set has the expected size, no duplicates, and every
/// index in `[0, column_count)`.
pub fn invariant_column_set_well_formed(
    config: &CustodyConfig,
    columns: &ColumnSet,
    custody_subnet_count: u64,
) -> bool {
    let expected = config.custody_column_count(custody_subnet_count);
    let distinct: HashSet<_> = columns.iter().collect();

    columns.len() as u64 == expected
        && distinct.len() == columns.len()
        && columns.iter().all(|c| *c < config.column_count)
}
