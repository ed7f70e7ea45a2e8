//! # Custody Service
//!
//! Implements the `CustodyApi` inbound port over a fixed configuration and a
//! candidate source prototype.

use crate::algorithms;
use crate::domain::{
    invariant_columns_divisible, ColumnSet, CustodyConfig, CustodyError, NodeId, SearchControl,
    SearchReport, SubnetId,
};
use crate::ports::{CustodyApi, NodeIdSource};
use tracing::warn;

/// Custody service.
///
/// Searches fork the prototype source, so repeated searches with a seeded
/// source are reproducible.
pub struct CustodyService<S> {
    config: CustodyConfig,
    candidates: S,
    workers: usize,
}

impl<S> CustodyService<S>
where
    S: NodeIdSource + Send + Sync,
{
    /// Create a sequential service.
    pub fn new(config: CustodyConfig, candidates: S) -> Self {
        if !invariant_columns_divisible(&config) {
            warn!(
                subnet_count = config.subnet_count,
                column_count = config.column_count,
                "Column count is not a multiple of subnet count; trailing columns are never custodied"
            );
        }
        Self {
            config,
            candidates,
            workers: 1,
        }
    }

    /// Use `workers` parallel search workers (minimum 1).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Configured worker count.
    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl<S> CustodyApi for CustodyService<S>
where
    S: NodeIdSource + Send + Sync,
{
    fn custody_subnets(
        &self,
        node_id: &NodeId,
        custody_subnet_count: u64,
    ) -> Result<Vec<SubnetId>, CustodyError> {
        algorithms::custody_subnets(&self.config, node_id, custody_subnet_count)
    }

    fn custody_columns(
        &self,
        node_id: &NodeId,
        custody_subnet_count: u64,
    ) -> Result<ColumnSet, CustodyError> {
        algorithms::custody_columns(&self.config, node_id, custody_subnet_count)
    }

    fn find_equivalent_node_id(
        &self,
        source: &NodeId,
        custody_subnet_count: u64,
        control: &SearchControl,
    ) -> Result<SearchReport, CustodyError> {
        if self.workers > 1 {
            algorithms::par_find_equivalent_node_id(
                &self.config,
                source,
                custody_subnet_count,
                &self.candidates,
                self.workers,
                control,
            )
        } else {
            let mut candidates = self.candidates.fork(0);
            algorithms::find_equivalent_node_id(
                &self.config,
                source,
                custody_subnet_count,
                &mut candidates,
                control,
            )
        }
    }

    fn config(&self) -> &CustodyConfig {
        &self.config
    }
}
