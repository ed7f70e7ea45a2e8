//! # Preimage Search
//!
//! Rejection sampling for a node ID whose custody columns equal a target's.
//!
//! Every candidate is an independent trial: nothing is memoized, and the
//! expected number of attempts is the size of the column-set image (32 for
//! one custodied subnet out of 32). Cost grows combinatorially with the
//! custody count since acceptance order matters.

use super::custody_columns::custody_columns;
use crate::domain::{
    CancellationToken, ColumnSet, CustodyConfig, CustodyError, NodeId, SearchControl,
    SearchReport,
};
use crate::ports::NodeIdSource;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, info};

/// Attempts between progress log lines.
const PROGRESS_INTERVAL: u64 = 100_000;

/// Search sequentially for a node ID custody-equivalent to `source`.
///
/// Errors computing the source's columns are returned before any candidate
/// is drawn. An error on any candidate aborts the search.
pub fn find_equivalent_node_id<S>(
    config: &CustodyConfig,
    source: &NodeId,
    custody_subnet_count: u64,
    candidates: &mut S,
    control: &SearchControl,
) -> Result<SearchReport, CustodyError>
where
    S: NodeIdSource + ?Sized,
{
    let target = custody_columns(config, source, custody_subnet_count)?;
    let started = Instant::now();
    let deadline = control.deadline_from(started);
    let mut attempts: u64 = 0;

    debug!(source = %source, columns = %target, "Starting sequential search");

    loop {
        control.check(attempts, started, deadline)?;

        let candidate = candidates.next_node_id();
        attempts += 1;

        let columns = custody_columns(config, &candidate, custody_subnet_count)?;
        if columns == target {
            let elapsed = started.elapsed();
            info!(node_id = %candidate, attempts, ?elapsed, "Found custody-equivalent node ID");
            return Ok(SearchReport {
                node_id: candidate,
                columns,
                attempts,
                elapsed,
            });
        }

        if attempts % PROGRESS_INTERVAL == 0 {
            debug!(attempts, elapsed = ?started.elapsed(), "Search progress");
        }
    }
}

/// Search with `workers` independent workers on a dedicated rayon pool.
///
/// Each worker draws from `candidates.fork(worker)`. The first match or the
/// first error wins; the others stop at their next check. The attempt cap
/// and the reported attempt count span all workers.
pub fn par_find_equivalent_node_id<S>(
    config: &CustodyConfig,
    source: &NodeId,
    custody_subnet_count: u64,
    candidates: &S,
    workers: usize,
    control: &SearchControl,
) -> Result<SearchReport, CustodyError>
where
    S: NodeIdSource + Send + Sync,
{
    let target = custody_columns(config, source, custody_subnet_count)?;
    let workers = workers.max(1);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("custody-search-{i}"))
        .build()
        .map_err(|e| CustodyError::WorkerPool(e.to_string()))?;

    let started = Instant::now();
    let deadline = control.deadline_from(started);
    let attempts = AtomicU64::new(0);
    let done = CancellationToken::new();

    debug!(source = %source, columns = %target, workers, "Starting parallel search");

    let shared = WorkerShared {
        config,
        target: &target,
        custody_subnet_count,
        control,
        started,
        deadline,
        attempts: &attempts,
        done: &done,
    };

    let outcome = pool.install(|| {
        (0..workers as u64)
            .into_par_iter()
            .find_map_any(|worker| shared.run(candidates.fork(worker)))
    });

    let total = attempts.load(Ordering::SeqCst);
    match outcome {
        Some(Ok(mut report)) => {
            report.attempts = total;
            report.elapsed = started.elapsed();
            info!(
                node_id = %report.node_id,
                attempts = total,
                elapsed = ?report.elapsed,
                "Found custody-equivalent node ID"
            );
            Ok(report)
        }
        Some(Err(e)) => Err(e),
        // Every worker stopped without an outcome; only reachable if all
        // observed `done` before anyone recorded one.
        None => Err(CustodyError::SearchCancelled { attempts: total }),
    }
}

/// State shared by all parallel workers.
struct WorkerShared<'a> {
    config: &'a CustodyConfig,
    target: &'a ColumnSet,
    custody_subnet_count: u64,
    control: &'a SearchControl,
    started: Instant,
    deadline: Option<Instant>,
    attempts: &'a AtomicU64,
    done: &'a CancellationToken,
}

impl WorkerShared<'_> {
    /// Worker loop. `None` means another worker already finished.
    fn run<S: NodeIdSource>(&self, mut candidates: S) -> Option<Result<SearchReport, CustodyError>> {
        loop {
            if self.done.is_cancelled() {
                return None;
            }

            let seen = self.attempts.load(Ordering::Relaxed);
            if let Err(e) = self.control.check(seen, self.started, self.deadline) {
                return self.finish(Err(e));
            }

            let candidate = candidates.next_node_id();
            self.attempts.fetch_add(1, Ordering::Relaxed);

            match custody_columns(self.config, &candidate, self.custody_subnet_count) {
                Ok(columns) if columns == *self.target => {
                    return self.finish(Ok(SearchReport {
                        node_id: candidate,
                        columns,
                        attempts: 0,
                        elapsed: self.started.elapsed(),
                    }));
                }
                Ok(_) => {}
                Err(e) => return self.finish(Err(e)),
            }
        }
    }

    fn finish(
        &self,
        outcome: Result<SearchReport, CustodyError>,
    ) -> Option<Result<SearchReport, CustodyError>> {
        self.done.cancel();
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{RandomNodeIdSource, Secp256k1NodeIdSource};
    use crate::ports::MockNodeIdSource;
    use std::time::Duration;

    fn node_with_prefix(prefix: u64) -> NodeId {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&prefix.to_be_bytes());
        NodeId::new(bytes)
    }

    #[test]
    fn test_finds_equivalent_with_mock() {
        let config = CustodyConfig::default();
        // Prefix 5 shares subnet 26 with prefix 0; prefixes 1..4 do not.
        let mut candidates = MockNodeIdSource::new(vec![
            node_with_prefix(1),
            node_with_prefix(2),
            node_with_prefix(5),
        ]);

        let report = find_equivalent_node_id(
            &config,
            &NodeId::ZERO,
            1,
            &mut candidates,
            &SearchControl::unbounded(),
        )
        .unwrap();

        assert_eq!(report.node_id, node_with_prefix(5));
        assert_eq!(report.attempts, 3);
        assert_eq!(report.columns.as_slice(), &[26, 58, 90, 122]);
    }

    #[test]
    fn test_finds_equivalent_with_random_source() {
        let config = CustodyConfig::default();
        let source = node_with_prefix(0xABCD);
        let mut candidates = RandomNodeIdSource::seeded(11);

        let report = find_equivalent_node_id(
            &config,
            &source,
            1,
            &mut candidates,
            &SearchControl::unbounded(),
        )
        .unwrap();

        assert_eq!(
            custody_columns(&config, &report.node_id, 1).unwrap(),
            custody_columns(&config, &source, 1).unwrap()
        );
        assert!(report.attempts >= 1);
    }

    #[test]
    fn test_finds_equivalent_with_keypairs() {
        let config = CustodyConfig::default();
        let source = Secp256k1NodeIdSource::generate();
        let mut candidates = Secp256k1NodeIdSource::new();

        let report = find_equivalent_node_id(
            &config,
            &source,
            1,
            &mut candidates,
            &SearchControl::unbounded(),
        )
        .unwrap();

        assert_eq!(report.columns, custody_columns(&config, &source, 1).unwrap());
    }

    #[test]
    fn test_invalid_custody_fails_before_search() {
        let config = CustodyConfig::default();
        let mut candidates = MockNodeIdSource::new(vec![node_with_prefix(5)]);

        let result = find_equivalent_node_id(
            &config,
            &NodeId::ZERO,
            33,
            &mut candidates,
            &SearchControl::unbounded(),
        );

        assert!(matches!(result, Err(CustodyError::InvalidParameter(_))));
        assert_eq!(candidates.position, 0);
    }

    #[test]
    fn test_max_attempts_exhausts() {
        let config = CustodyConfig::default();
        // Never matches subnet 26
        let mut candidates = MockNodeIdSource::new(vec![node_with_prefix(1)]);
        let control = SearchControl::unbounded().with_max_attempts(50);

        let result = find_equivalent_node_id(&config, &NodeId::ZERO, 1, &mut candidates, &control);

        assert_eq!(result, Err(CustodyError::SearchExhausted { attempts: 50 }));
    }

    #[test]
    fn test_cancelled_before_start() {
        let config = CustodyConfig::default();
        let token = CancellationToken::new();
        token.cancel();
        let control = SearchControl::unbounded().with_cancellation(token);
        let mut candidates = MockNodeIdSource::new(vec![node_with_prefix(5)]);

        let result = find_equivalent_node_id(&config, &NodeId::ZERO, 1, &mut candidates, &control);

        assert_eq!(result, Err(CustodyError::SearchCancelled { attempts: 0 }));
    }

    #[test]
    fn test_deadline_exceeded() {
        let config = CustodyConfig::default();
        let mut candidates = MockNodeIdSource::new(vec![node_with_prefix(1)]);
        let control = SearchControl::unbounded().with_timeout(Duration::from_millis(20));

        let result = find_equivalent_node_id(&config, &NodeId::ZERO, 1, &mut candidates, &control);

        assert!(matches!(
            result,
            Err(CustodyError::SearchDeadlineExceeded { .. })
        ));
    }

    #[test]
    fn test_zero_custody_matches_first_candidate() {
        let config = CustodyConfig::default();
        let mut candidates = RandomNodeIdSource::seeded(3);

        let report = find_equivalent_node_id(
            &config,
            &NodeId::ZERO,
            0,
            &mut candidates,
            &SearchControl::unbounded(),
        )
        .unwrap();

        assert_eq!(report.attempts, 1);
        assert!(report.columns.is_empty());
    }

    #[test]
    fn test_parallel_finds_equivalent() {
        let config = CustodyConfig::default();
        let source = node_with_prefix(0x1234_5678);
        let candidates = RandomNodeIdSource::seeded(99);

        let report = par_find_equivalent_node_id(
            &config,
            &source,
            2,
            &candidates,
            4,
            &SearchControl::unbounded(),
        )
        .unwrap();

        assert_eq!(report.columns, custody_columns(&config, &source, 2).unwrap());
        assert_eq!(
            custody_columns(&config, &report.node_id, 2).unwrap(),
            report.columns
        );
        assert!(report.attempts >= 1);
    }

    #[test]
    fn test_parallel_respects_attempt_cap() {
        let config = CustodyConfig::default();
        let candidates = MockNodeIdSource::new(vec![node_with_prefix(1)]);
        let control = SearchControl::unbounded().with_max_attempts(100);

        let result = par_find_equivalent_node_id(&config, &NodeId::ZERO, 1, &candidates, 3, &control);

        assert!(matches!(result, Err(CustodyError::SearchExhausted { .. })));
    }

    #[test]
    fn test_parallel_cancelled() {
        let config = CustodyConfig::default();
        let token = CancellationToken::new();
        token.cancel();
        let control = SearchControl::unbounded().with_cancellation(token);
        let candidates = MockNodeIdSource::new(vec![node_with_prefix(5)]);

        let result = par_find_equivalent_node_id(&config, &NodeId::ZERO, 1, &candidates, 2, &control);

        assert!(matches!(result, Err(CustodyError::SearchCancelled { .. })));
    }

    #[test]
    fn test_parallel_invalid_custody() {
        let config = CustodyConfig::default();
        let candidates = RandomNodeIdSource::seeded(1);

        let result = par_find_equivalent_node_id(
            &config,
            &NodeId::ZERO,
            64,
            &candidates,
            2,
            &SearchControl::unbounded(),
        );

        assert!(matches!(result, Err(CustodyError::InvalidParameter(_))));
    }
}
