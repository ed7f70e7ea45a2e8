//! # Algorithms Module
//!
//! Core algorithms for custody assignment.

pub mod custody_columns;
pub mod preimage_search;

pub use custody_columns::{columns_for_subnet, compute_subnet, custody_columns, custody_subnets};
pub use preimage_search::{find_equivalent_node_id, par_find_equivalent_node_id};
