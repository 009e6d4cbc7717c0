//! Engine boundary for pairbundle.
//!
//! The orchestrator in `pairbundle-cli` never talks to a bundler directly. It
//! hands a [`BuildRequest`] to something implementing [`Engine`] and gets a
//! [`BuildReport`] back: one bundle compiled and written, diagnostics out.
//!
//! # Architecture
//!
//! - [`request`] - The request contract (entry, output, minify switches, log level)
//! - [`report`] - Build reports and the diagnostics they carry
//! - [`diagnostics`] - Extraction of diagnostics from Rolldown errors and miette rendering
//! - [`minify`] - Mapping of the minify switches onto Rolldown options
//! - [`rolldown_engine`] - The Rolldown-backed [`Engine`] implementation
//! - `testing` - A scripted engine for orchestrator tests (feature `test-utils`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pairbundle_engine::{BuildRequest, Engine, RolldownEngine};
//!
//! # async fn run() -> std::io::Result<()> {
//! let engine = RolldownEngine::from_current_dir()?;
//! let report = engine
//!     .build(&BuildRequest::new("src/app.js", "dist/app.js").minify(true))
//!     .await;
//!
//! if report.is_failure() {
//!     eprintln!("{} error(s)", report.errors.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod diagnostics;
pub mod minify;
pub mod report;
pub mod request;
pub mod rolldown_engine;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

use async_trait::async_trait;

pub use diagnostics::{Diagnostic, DiagnosticError, DiagnosticKind, DiagnosticSeverity};
pub use minify::MinifySwitches;
pub use report::BuildReport;
pub use request::{BuildRequest, LogLevel};
pub use rolldown_engine::RolldownEngine;

/// A bundling engine: compile and write one bundle, report diagnostics.
///
/// Implementations never fail by signature. Anything that goes wrong while
/// building or writing a bundle is reported as an error diagnostic in the
/// returned [`BuildReport`]; callers treat a non-empty error list as a failed
/// job and do not inspect its content.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Build the bundle described by `request`.
    async fn build(&self, request: &BuildRequest) -> BuildReport;
}

#[async_trait]
impl<E> Engine for &E
where
    E: Engine + ?Sized,
{
    async fn build(&self, request: &BuildRequest) -> BuildReport {
        (**self).build(request).await
    }
}

#[async_trait]
impl<E> Engine for std::sync::Arc<E>
where
    E: Engine + ?Sized,
{
    async fn build(&self, request: &BuildRequest) -> BuildReport {
        (**self).build(request).await
    }
}
