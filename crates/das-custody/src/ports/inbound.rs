//! # Inbound Ports
//!
//! API trait defining what the custody subsystem can do.

use crate::domain::{ColumnSet, CustodyConfig, CustodyError, NodeId, SearchControl, SearchReport, SubnetId};

/// Custody API - inbound port.
pub trait CustodyApi {
    /// Subnets custodied by a node, in acceptance order.
    fn custody_subnets(
        &self,
        node_id: &NodeId,
        custody_subnet_count: u64,
    ) -> Result<Vec<SubnetId>, CustodyError>;

    /// Columns custodied by a node, in emission order.
    fn custody_columns(
        &self,
        node_id: &NodeId,
        custody_subnet_count: u64,
    ) -> Result<ColumnSet, CustodyError>;

    /// Search for another node ID with the same custody columns.
    fn find_equivalent_node_id(
        &self,
        source: &NodeId,
        custody_subnet_count: u64,
        control: &SearchControl,
    ) -> Result<SearchReport, CustodyError>;

    /// Get the active configuration.
    fn config(&self) -> &CustodyConfig;
}
