//! Scripted engine for orchestrator tests.
//!
//! Only compiled for tests or with the `test-utils` feature.
//!
//! ```rust,ignore
//! use pairbundle_engine::testing::ScriptedEngine;
//! use pairbundle_engine::{BuildRequest, Engine};
//!
//! let engine = ScriptedEngine::new().fail_at(1, "Unexpected token");
//!
//! assert!(engine.build(&BuildRequest::new("a.js", "a.out.js")).await.is_success());
//! assert!(engine.build(&BuildRequest::new("b.js", "b.out.js")).await.is_failure());
//! assert_eq!(engine.calls(), 2);
//! ```

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::report::BuildReport;
use crate::request::BuildRequest;
use crate::Engine;

/// An [`Engine`] that records requests and returns scripted diagnostics.
///
/// Scripts are keyed by call index (0-based, in the order `build` is called),
/// so "the job at index k fails" can be expressed without touching the
/// filesystem.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    scripted: HashMap<usize, Vec<Diagnostic>>,
    requests: Mutex<Vec<BuildRequest>>,
}

impl ScriptedEngine {
    /// An engine where every call succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the call at `index` report a single error.
    pub fn fail_at(self, index: usize, message: impl Into<String>) -> Self {
        self.diagnostics_at(
            index,
            vec![Diagnostic::error(
                DiagnosticKind::Other("Scripted".to_string()),
                message,
            )],
        )
    }

    /// Make the call at `index` report the given diagnostics.
    pub fn diagnostics_at(mut self, index: usize, diagnostics: Vec<Diagnostic>) -> Self {
        self.scripted.insert(index, diagnostics);
        self
    }

    /// Every request received so far, in call order.
    pub fn requests(&self) -> Vec<BuildRequest> {
        self.requests.lock().clone()
    }

    /// Number of calls received so far.
    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    /// Entry points received so far, in call order.
    pub fn entry_points(&self) -> Vec<PathBuf> {
        self.requests
            .lock()
            .iter()
            .map(|r| r.entry_point.clone())
            .collect()
    }
}

#[async_trait]
impl Engine for ScriptedEngine {
    async fn build(&self, request: &BuildRequest) -> BuildReport {
        let index = {
            let mut requests = self.requests.lock();
            requests.push(request.clone());
            requests.len() - 1
        };

        let mut report = BuildReport::clean();
        for diagnostic in self.scripted.get(&index).cloned().unwrap_or_default() {
            report.push(diagnostic);
        }
        report
    }
}
