//! # Runner
//!
//! One invocation of the tool:
//!
//! 1. Load configuration (env, then flags)
//! 2. Parse or generate the source node ID
//! 3. Compute and print its custody columns
//! 4. Search on a blocking task, cancelled by Ctrl-C or the configured limits
//! 5. Print the result

use crate::cli::Args;
use crate::config::{load_config_from, EnvSource, RuntimeConfig};
use crate::errors::RuntimeError;
use crate::report;
use das_custody::{
    CancellationToken, CustodyApi, CustodyService, NodeId, NodeIdSource, RandomNodeIdSource,
    SearchControl, SearchReport, Secp256k1NodeIdSource,
};
use std::future::Future;
use std::io::Write;
use tracing::{info, warn};

/// Run with Ctrl-C wired to search cancellation.
pub async fn run(args: Args, env: &impl EnvSource, out: &mut impl Write) -> Result<(), RuntimeError> {
    run_until(args, env, out, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    })
    .await
}

/// Run, cancelling the search when `interrupt` completes.
pub async fn run_until<F>(
    args: Args,
    env: &impl EnvSource,
    out: &mut impl Write,
    interrupt: F,
) -> Result<(), RuntimeError>
where
    F: Future<Output = ()>,
{
    let config = load_config_from(env).apply_args(&args);
    config.validate()?;

    let source = match args.node_id.as_deref() {
        Some(raw) => NodeId::from_hex(raw).map_err(RuntimeError::MalformedNodeId)?,
        None => Secp256k1NodeIdSource::generate(),
    };

    match args.seed {
        Some(seed) => {
            info!(seed, "Using seeded RNG candidates");
            execute(&config, source, RandomNodeIdSource::seeded(seed), &args, out, interrupt).await
        }
        None => execute(&config, source, Secp256k1NodeIdSource::new(), &args, out, interrupt).await,
    }
}

async fn execute<S, F>(
    config: &RuntimeConfig,
    source: NodeId,
    candidates: S,
    args: &Args,
    out: &mut impl Write,
    interrupt: F,
) -> Result<(), RuntimeError>
where
    S: NodeIdSource + Send + Sync + 'static,
    F: Future<Output = ()>,
{
    let custody_subnet_count = config.custody.custody_subnet_count;
    let service = CustodyService::new(config.custody, candidates).with_workers(config.search.workers);

    report::write_source_header(out, custody_subnet_count, &source)?;

    let columns = service
        .custody_columns(&source, custody_subnet_count)
        .map_err(RuntimeError::Assignment)?;
    let subnets = service
        .custody_subnets(&source, custody_subnet_count)
        .map_err(RuntimeError::Assignment)?;

    report::write_source_assignment(out, &subnets, &columns)?;
    if args.columns_only {
        return Ok(());
    }

    report::write_search_started(out)?;
    out.flush()?;

    let token = CancellationToken::new();
    let control = build_control(config, token.clone());
    let search_report = search(service, source, custody_subnet_count, control, token, interrupt).await?;

    report::write_search_result(out, &search_report)?;
    Ok(())
}

fn build_control(config: &RuntimeConfig, token: CancellationToken) -> SearchControl {
    let mut control = SearchControl::unbounded().with_cancellation(token);
    if let Some(timeout) = config.search.timeout {
        control = control.with_timeout(timeout);
    }
    if let Some(max) = config.search.max_attempts {
        control = control.with_max_attempts(max);
    }
    control
}

/// Run the CPU-bound search off the async workers.
async fn search<S, F>(
    service: CustodyService<S>,
    source: NodeId,
    custody_subnet_count: u64,
    control: SearchControl,
    token: CancellationToken,
    interrupt: F,
) -> Result<SearchReport, RuntimeError>
where
    S: NodeIdSource + Send + Sync + 'static,
    F: Future<Output = ()>,
{
    info!(
        workers = service.workers(),
        timeout = ?control.timeout,
        max_attempts = ?control.max_attempts,
        "Starting search"
    );

    let mut handle = tokio::task::spawn_blocking(move || {
        service.find_equivalent_node_id(&source, custody_subnet_count, &control)
    });

    let joined = tokio::select! {
        joined = &mut handle => joined,
        _ = interrupt => {
            warn!("Interrupted, cancelling search");
            token.cancel();
            handle.await
        }
    };

    joined
        .map_err(|e| RuntimeError::SearchTask(e.to_string()))?
        .map_err(RuntimeError::Search)
}
