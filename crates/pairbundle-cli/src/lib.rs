//! pairbundle CLI - bundle paired input/output files against a build engine.
//!
//! `pairbundle -in a.js -out a.out.js -in b.js -out b.out.js -minify` builds
//! one bundle per `-in`/`-out` pair, in declaration order, and stops at the
//! first pair the engine reports errors for.
//!
//! # Architecture
//!
//! - [`cli`] - Flag definitions, Go-style flag normalization, arrival order
//! - [`collector`] - Pairs `-in`/`-out` occurrences, rejecting bad interleavings early
//! - [`orchestrator`] - Validates the pairs and dispatches one engine job per pair
//! - [`commands`] - Wires parsing, collection and orchestration together
//! - [`config`] - Resolved batch settings
//! - [`error`] - Configuration and job failure errors
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal output: elapsed-time report, colors, error rendering
//!
//! # Example
//!
//! ```rust,no_run
//! use pairbundle_cli::{cli, commands, config::BatchConfig};
//! use std::time::Instant;
//!
//! # async fn run() -> pairbundle_cli::Result<()> {
//! let started = Instant::now();
//! let invocation = cli::parse_from(["pairbundle", "-in", "a.js", "-out", "a.out.js"])?;
//! let config = BatchConfig::from_cli(&invocation.cli);
//! let report = commands::batch_execute(invocation, &config, started).await?;
//! println!("{} job(s)", report.jobs);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod collector;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod orchestrator;
pub mod ui;

pub use error::{CliError, ConfigError, Result};
