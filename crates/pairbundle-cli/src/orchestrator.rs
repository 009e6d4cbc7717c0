//! Batch orchestration: validate the pairs, then build them one at a time.
//!
//! Jobs run strictly in declaration order. Job `k + 1` is not started until
//! job `k` has finished, and the first job whose report carries an error ends
//! the batch; no later job is dispatched.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use pairbundle_engine::{BuildRequest, Engine, LogLevel};
use tracing::{debug, info_span, Instrument};

use crate::error::{CliError, ConfigError, Result};

/// Index-aligned `-in` and `-out` paths as collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairedSequences {
    inputs: Vec<PathBuf>,
    outputs: Vec<PathBuf>,
}

impl PairedSequences {
    pub fn new(inputs: Vec<PathBuf>, outputs: Vec<PathBuf>) -> Self {
        Self { inputs, outputs }
    }

    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[PathBuf] {
        &self.outputs
    }

    /// Number of complete pairs.
    pub fn len(&self) -> usize {
        self.inputs.len().min(self.outputs.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that there is at least one pair and that the counts match.
    ///
    /// Returns the number of pairs.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        if self.inputs.is_empty() || self.outputs.is_empty() {
            return Err(ConfigError::MissingPairs);
        }
        if self.inputs.len() != self.outputs.len() {
            return Err(ConfigError::CountMismatch {
                inputs: self.inputs.len(),
                outputs: self.outputs.len(),
            });
        }
        Ok(self.inputs.len())
    }

    /// One job per pair, in order.
    pub fn jobs(&self, minify: bool) -> impl Iterator<Item = Job<'_>> {
        self.inputs
            .iter()
            .zip(&self.outputs)
            .enumerate()
            .map(move |(index, (input, output))| Job {
                index,
                input,
                output,
                minify,
            })
    }
}

/// A single build: bundle `input` into `output`.
#[derive(Debug, Clone, Copy)]
pub struct Job<'a> {
    pub index: usize,
    pub input: &'a Path,
    pub output: &'a Path,
    pub minify: bool,
}

impl Job<'_> {
    /// The engine request for this job.
    pub fn request(&self) -> BuildRequest {
        BuildRequest::new(self.input, self.output).minify(self.minify)
    }
}

/// Outcome of a batch where every job succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Jobs dispatched (all of them succeeded).
    pub jobs: usize,
    /// Time since the batch clock was started.
    pub elapsed: Duration,
}

/// Dispatches validated pairs to an [`Engine`].
#[derive(Debug)]
pub struct BatchOrchestrator<E> {
    engine: E,
    minify: bool,
    log_level: LogLevel,
    started: Instant,
}

impl<E: Engine> BatchOrchestrator<E> {
    /// Create an orchestrator whose clock starts now.
    pub fn new(engine: E, minify: bool) -> Self {
        Self::started_at(engine, minify, Instant::now())
    }

    /// Create an orchestrator measuring from an earlier instant, typically
    /// process start.
    pub fn started_at(engine: E, minify: bool, started: Instant) -> Self {
        Self {
            engine,
            minify,
            log_level: LogLevel::default(),
            started,
        }
    }

    /// Level at which the engine prints its diagnostics for every job.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Validate the pairs and run every job in order.
    ///
    /// Stops at the first job whose report has errors and returns
    /// [`CliError::JobFailure`] for it. Warnings never stop the batch.
    pub async fn run(&self, pairs: &PairedSequences) -> Result<RunReport> {
        let total = pairs.validate()?;
        debug!(
            jobs = total,
            minify = self.minify,
            log_level = %self.log_level,
            "Starting batch"
        );

        for job in pairs.jobs(self.minify) {
            let span = info_span!(
                "job",
                index = job.index,
                input = %job.input.display(),
                output = %job.output.display()
            );
            let request = job.request().log_level(self.log_level);
            let report = self.engine.build(&request).instrument(span).await;

            if report.is_failure() {
                debug!(
                    index = job.index,
                    errors = report.errors.len(),
                    "Job failed, stopping batch"
                );
                return Err(CliError::JobFailure {
                    index: job.index,
                    entry: job.input.to_path_buf(),
                    errors: report.errors.len(),
                });
            }

            debug!(
                index = job.index,
                warnings = report.warnings.len(),
                "Job finished"
            );
        }

        Ok(RunReport {
            jobs: total,
            elapsed: self.started.elapsed(),
        })
    }
}
