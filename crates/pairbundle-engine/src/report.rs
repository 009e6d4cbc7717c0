//! Build reports returned by an [`Engine`](crate::Engine).

use crate::diagnostics::{Diagnostic, DiagnosticSeverity};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of a single build request.
///
/// `errors` is the diagnostics list of the engine contract: a job failed if
/// and only if it is non-empty. Warnings never fail a job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildReport {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    /// Files written to disk, in emission order
    #[serde(default)]
    pub written: Vec<PathBuf>,
}

impl BuildReport {
    /// A clean report with nothing written.
    pub fn clean() -> Self {
        Self::default()
    }

    /// A report carrying a single error.
    pub fn failed(error: Diagnostic) -> Self {
        Self {
            errors: vec![error],
            ..Self::default()
        }
    }

    /// Add a diagnostic to the list matching its severity.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            DiagnosticSeverity::Error => self.errors.push(diagnostic),
            DiagnosticSeverity::Warning => self.warnings.push(diagnostic),
        }
    }

    pub fn is_failure(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors first, then warnings.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().chain(self.warnings.iter())
    }
}
