//! Human-readable report lines on standard output.

use crate::errors::RuntimeError;
use das_custody::{ColumnSet, NodeId, SearchReport, SubnetId};
use std::io::{self, Write};

/// Custody count and source node ID, written before any assignment.
pub fn write_source_header(
    out: &mut impl Write,
    custody_subnet_count: u64,
    node_id: &NodeId,
) -> io::Result<()> {
    writeln!(out, "custody subnet count: {custody_subnet_count}")?;
    writeln!(out, "Source node ID: {node_id}")
}

/// Source node assignment.
pub fn write_source_assignment(
    out: &mut impl Write,
    subnets: &[SubnetId],
    columns: &ColumnSet,
) -> io::Result<()> {
    writeln!(out, "Source columns: {columns}")?;
    writeln!(out, "Source subnets: [{}]", join(subnets))
}

fn join(values: &[u64]) -> String {
    values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Search start marker.
pub fn write_search_started(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Starting search...")
}

/// Search result.
pub fn write_search_result(out: &mut impl Write, report: &SearchReport) -> io::Result<()> {
    writeln!(out, "Search took {:?}", report.elapsed)?;
    writeln!(out, "Found node ID: {}", report.node_id)?;
    writeln!(out, "Attempts: {}", report.attempts)
}

/// Final diagnostic for a failed run, independent of the log filter.
///
/// Returns the process exit code.
pub fn write_failure(err_out: &mut impl Write, error: &RuntimeError) -> u8 {
    // Nothing left to report to if stderr itself is gone
    let _ = writeln!(err_out, "{error}");
    error.exit_code()
}
