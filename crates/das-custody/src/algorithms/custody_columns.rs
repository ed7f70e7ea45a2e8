//! # Custody Column Assignment
//!
//! Deterministic mapping from node ID to custodied subnets and columns.
//!
//! Subnet `k` carries columns `k, k + S, k + 2S, ...` where `S` is the subnet
//! count. A node picks its subnets by hashing successive integers starting at
//! the leading 8 bytes of its ID.

use crate::domain::{
    invariant_custody_count_bounded, invariant_distinct_subnets, ColumnIndex, ColumnSet,
    CustodyConfig, CustodyError, NodeId, SubnetId,
};
use shared_crypto::sha256;

/// Subnet selected by hashing `value`.
///
/// SHA-256 of the 8-byte big-endian encoding, leading 8 digest bytes as a
/// big-endian integer, reduced modulo `subnet_count`.
///
/// `subnet_count` must be non-zero.
pub fn compute_subnet(value: u64, subnet_count: u64) -> SubnetId {
    let hash = sha256(&value.to_be_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&hash[..8]);
    u64::from_be_bytes(prefix) % subnet_count
}

/// Subnets custodied by `node_id`, in acceptance order.
///
/// Candidates are `base, base + 1, ...` (wrapping), where `base` is the
/// leading 8 bytes of the node ID. Duplicates are skipped until
/// `custody_subnet_count` distinct subnets are held.
pub fn custody_subnets(
    config: &CustodyConfig,
    node_id: &NodeId,
    custody_subnet_count: u64,
) -> Result<Vec<SubnetId>, CustodyError> {
    invariant_custody_count_bounded(config, custody_subnet_count)?;

    let base = node_id.leading_u64();

    let mut subnets = Vec::new();
    let mut offset: u64 = 0;

    while (subnets.len() as u64) < custody_subnet_count {
        let subnet = compute_subnet(base.wrapping_add(offset), config.subnet_count);
        if !subnets.contains(&subnet) {
            subnets.push(subnet);
        }
        offset = offset.wrapping_add(1);
    }

    invariant_distinct_subnets(&subnets, custody_subnet_count)?;
    Ok(subnets)
}

/// Columns carried by one subnet, ascending.
pub fn columns_for_subnet(
    config: &CustodyConfig,
    subnet_id: SubnetId,
) -> impl Iterator<Item = ColumnIndex> {
    let subnet_count = config.subnet_count;
    (0..config.columns_per_subnet()).map(move |j| subnet_count * j + subnet_id)
}

/// Custody columns of `node_id`.
///
/// Subnets in acceptance order, columns of each subnet ascending. The result
/// is not sorted.
///
/// # Errors
///
/// - `InvalidParameter` if `custody_subnet_count > subnet_count`, the
///   subnet count is zero, or the column set cannot be allocated
/// - `InternalInvariantViolation` if subnet accumulation misbehaves
pub fn custody_columns(
    config: &CustodyConfig,
    node_id: &NodeId,
    custody_subnet_count: u64,
) -> Result<ColumnSet, CustodyError> {
    let subnets = custody_subnets(config, node_id, custody_subnet_count)?;

    let mut columns = Vec::new();
    reserve_columns(&mut columns, config, custody_subnet_count)?;
    for subnet in subnets {
        columns.extend(columns_for_subnet(config, subnet));
    }

    Ok(ColumnSet::new(columns))
}

fn reserve_columns(
    columns: &mut Vec<ColumnIndex>,
    config: &CustodyConfig,
    custody_subnet_count: u64,
) -> Result<(), CustodyError> {
    let total = custody_subnet_count
        .checked_mul(config.columns_per_subnet())
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            CustodyError::InvalidParameter(format!(
                "{} custody subnets of {} columns each overflow the column set",
                custody_subnet_count,
                config.columns_per_subnet()
            ))
        })?;
    columns.try_reserve_exact(total).map_err(|e| {
        CustodyError::InvalidParameter(format!("cannot hold {} custody columns: {}", total, e))
    })
}
