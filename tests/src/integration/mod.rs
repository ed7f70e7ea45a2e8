//! # Integration Flows
//!
//! - `identity` - Key pairs to node IDs to custody columns
//! - `search` - Preimage search through the service and its sources

pub mod identity;
pub mod search;
