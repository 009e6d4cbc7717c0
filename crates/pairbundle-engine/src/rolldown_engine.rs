//! Rolldown-backed [`Engine`].
//!
//! Each request becomes one Rolldown bundle: the entry point is the only
//! input, `outputPath` is the output file, and every emitted chunk or asset
//! is written next to it. Rolldown errors, Rolldown warnings and write
//! failures all come back as [`Diagnostic`]s, and are printed to stderr
//! according to the request's [`LogLevel`].

use async_trait::async_trait;
use path_clean::PathClean;
use rolldown::{BundlerBuilder, BundlerOptions, InputItem};
use rolldown_common::{Output, TreeshakeOptions};
use rolldown_error::BatchedBuildDiagnostic;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::minify::MinifySwitches;
use crate::report::BuildReport;
use crate::request::{BuildRequest, LogLevel};
use crate::Engine;

/// Bundles requests with Rolldown, resolving relative paths against `cwd`.
#[derive(Debug, Clone)]
pub struct RolldownEngine {
    cwd: PathBuf,
}

impl RolldownEngine {
    /// Create an engine that resolves request paths against `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into().clean(),
        }
    }

    /// Create an engine rooted at the process working directory.
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolve a request path against the working directory.
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf().clean()
        } else {
            self.cwd.join(path).clean()
        }
    }

    fn bundler_options(&self, request: &BuildRequest, entry: &Path, output: &Path) -> BundlerOptions {
        BundlerOptions {
            input: Some(vec![InputItem {
                name: None,
                import: entry.to_string_lossy().into_owned(),
            }]),
            cwd: Some(self.cwd.clone()),
            file: Some(output.to_string_lossy().into_owned()),
            minify: MinifySwitches::for_request(request).to_rolldown_options(),
            treeshake: TreeshakeOptions::Boolean(request.tree_shaking),
            ..Default::default()
        }
    }

    /// Run the bundler and collect everything into a report, without printing.
    async fn bundle(&self, request: &BuildRequest) -> BuildReport {
        if !request.bundle {
            return BuildReport::failed(
                Diagnostic::error(
                    DiagnosticKind::InvalidOption,
                    "The Rolldown engine only produces bundled output",
                )
                .with_help("Set `bundle: true` on the request"),
            );
        }

        let entry = self.resolve(request.entry_point());
        let output = self.resolve(request.output_path());
        debug!(entry = %entry.display(), output = %output.display(), "Bundling");

        let options = self.bundler_options(request, &entry, &output);
        let mut bundler = match BundlerBuilder::default().with_options(options).build() {
            Ok(bundler) => bundler,
            Err(batch) => return failed_build(batch),
        };

        let bundle = match bundler.generate().await {
            Ok(bundle) => bundle,
            Err(batch) => return failed_build(batch),
        };

        let mut report = BuildReport::clean();
        for diagnostic in Diagnostic::from_rolldown(&bundle.warnings) {
            report.push(diagnostic);
        }

        if request.write {
            let out_dir = output.parent().unwrap_or(&self.cwd);
            write_outputs(&bundle.assets, out_dir, &mut report).await;
            debug!(files = report.written.len(), "Wrote bundle output");
        }

        report
    }
}

#[async_trait]
impl Engine for RolldownEngine {
    async fn build(&self, request: &BuildRequest) -> BuildReport {
        let report = self.bundle(request).await;
        emit(&report, request.log_level);
        report
    }
}

fn failed_build(batch: BatchedBuildDiagnostic) -> BuildReport {
    let mut report = BuildReport::clean();
    for diagnostic in Diagnostic::from_batch(batch) {
        report.push(diagnostic);
    }
    // A rejected build fails the job even if every entry was a warning.
    if !report.is_failure() {
        report.push(Diagnostic::error(
            DiagnosticKind::Other("BUILD_FAILED".to_string()),
            "Rolldown rejected the build",
        ));
    }
    report
}

/// Write every emitted chunk and asset under `out_dir`.
///
/// A failed write is recorded as an error and stops further writes.
async fn write_outputs(outputs: &[Output], out_dir: &Path, report: &mut BuildReport) {
    for item in outputs {
        let path = out_dir.join(item.filename());
        if let Some(parent) = path.parent() {
            if let Err(e) = tokio::fs::create_dir_all(parent).await {
                report.push(write_failure(parent, &e));
                return;
            }
        }
        if let Err(e) = tokio::fs::write(&path, item.content_as_bytes()).await {
            report.push(write_failure(&path, &e));
            return;
        }
        report.written.push(path);
    }
}

fn write_failure(path: &Path, err: &std::io::Error) -> Diagnostic {
    Diagnostic::error(
        DiagnosticKind::WriteFailure,
        format!("Failed to write '{}': {}", path.display(), err),
    )
    .with_file(path.to_string_lossy())
    .with_help("Check output directory permissions")
}

/// Print a report's diagnostics to stderr at the given level.
fn emit(report: &BuildReport, level: LogLevel) {
    for diagnostic in report.diagnostics() {
        if level.shows(diagnostic.severity) {
            eprintln!("{}", diagnostic.render());
        }
    }
    if level == LogLevel::Info {
        for path in &report.written {
            eprintln!("  {}", path.display());
        }
    }
}
