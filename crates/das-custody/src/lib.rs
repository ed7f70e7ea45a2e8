//! # DAS Custody
//!
//! Custody column assignment for PeerDAS data availability sampling.
//!
//! ## Purpose
//!
//! - Map a node ID to the subnets and columns it must custody
//! - Search for another node ID with the identical column set
//!
//! ## Assignment
//!
//! | Parameter | Default | Source |
//! |-----------|---------|--------|
//! | Subnet count | 32 | `DATA_COLUMN_SIDECAR_SUBNET_COUNT` |
//! | Column count | 128 | `NUMBER_OF_COLUMNS` |
//! | Custody subnets | 1 | `CUSTODY_SUBNET_COUNT` |
//!
//! ## Module Structure
//!
//! ```text
//! das-custody/
//! ├── domain/          # NodeId, ColumnSet, CustodyConfig, SearchControl, errors
//! ├── algorithms/      # Column assignment, preimage search
//! ├── ports/           # CustodyApi + NodeIdSource traits
//! ├── adapters/        # secp256k1 and RNG candidate sources
//! └── service.rs       # CustodyApi implementation
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{RandomNodeIdSource, Secp256k1NodeIdSource};
pub use algorithms::{
    columns_for_subnet, compute_subnet, custody_columns, custody_subnets,
    find_equivalent_node_id, par_find_equivalent_node_id,
};
pub use domain::{
    invariant_column_set_well_formed, invariant_columns_divisible,
    invariant_custody_count_bounded, invariant_distinct_subnets, CancellationToken, ColumnIndex,
    ColumnSet, CustodyConfig, CustodyError, NodeId, SearchControl, SearchReport, SubnetId,
    DEFAULT_COLUMN_COUNT, DEFAULT_CUSTODY_SUBNET_COUNT, DEFAULT_SUBNET_COUNT, NODE_ID_LEN,
};
pub use ports::{CustodyApi, MockNodeIdSource, NodeIdSource};
pub use service::CustodyService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
