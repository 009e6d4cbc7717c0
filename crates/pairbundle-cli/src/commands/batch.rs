//! The batch command: flags in, one bundle per pair out.

use std::time::Instant;

use pairbundle_engine::{Engine, RolldownEngine};
use tracing::debug;

use crate::cli::Invocation;
use crate::collector::PairCollector;
use crate::config::BatchConfig;
use crate::error::Result;
use crate::orchestrator::{BatchOrchestrator, PairedSequences, RunReport};

/// Run the batch against a Rolldown engine rooted at the working directory.
///
/// `started` is the instant the elapsed-time report is measured from,
/// normally process start. The flags are checked before the engine is set
/// up, so a flag error is reported even where no engine could be created.
pub async fn execute(
    invocation: Invocation,
    config: &BatchConfig,
    started: Instant,
) -> Result<RunReport> {
    let pairs = collect_pairs(invocation)?;
    let engine = RolldownEngine::from_current_dir()?;
    debug!(cwd = %engine.cwd().display(), "Using Rolldown engine");
    run(engine, &pairs, config, started).await
}

/// Run the batch against any engine.
///
/// # Errors
///
/// - [`ConfigError`](crate::ConfigError) for bad interleaving, no pairs or
///   unequal counts; the engine is never called.
/// - [`CliError::JobFailure`](crate::CliError::JobFailure) for the first pair
///   the engine reports errors for.
pub async fn execute_with<E: Engine>(
    engine: E,
    invocation: Invocation,
    config: &BatchConfig,
    started: Instant,
) -> Result<RunReport> {
    let pairs = collect_pairs(invocation)?;
    run(engine, &pairs, config, started).await
}

/// Pair up the `-in`/`-out` occurrences and check the result is complete.
pub fn collect_pairs(invocation: Invocation) -> Result<PairedSequences> {
    let pairs = PairCollector::collect(invocation.occurrences)?;
    pairs.validate()?;
    debug!(pairs = pairs.len(), "Collected pairs");
    Ok(pairs)
}

async fn run<E: Engine>(
    engine: E,
    pairs: &PairedSequences,
    config: &BatchConfig,
    started: Instant,
) -> Result<RunReport> {
    BatchOrchestrator::started_at(engine, config.minify, started)
        .with_log_level(config.engine_log_level())
        .run(pairs)
        .await
}
