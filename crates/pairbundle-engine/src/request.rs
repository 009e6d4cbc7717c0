//! The build request handed to an [`Engine`](crate::Engine).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How much of its own diagnostic output an engine prints.
///
/// Levels of the engine's diagnostic channel, separate from the process
/// logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Print nothing
    Silent,
    /// Only errors
    Error,
    /// Errors and warnings
    #[default]
    Warning,
    /// Errors, warnings, and a line per written file
    Info,
}

impl LogLevel {
    /// Whether diagnostics of `severity` should be printed at this level.
    pub fn shows(&self, severity: crate::DiagnosticSeverity) -> bool {
        use crate::DiagnosticSeverity;

        match self {
            LogLevel::Silent => false,
            LogLevel::Error => matches!(severity, DiagnosticSeverity::Error),
            LogLevel::Warning | LogLevel::Info => true,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Silent => write!(f, "silent"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warning => write!(f, "warning"),
            LogLevel::Info => write!(f, "info"),
        }
    }
}

/// One bundle to build: a single entry point written to a single output file.
///
/// Serializes with the camelCase keys of the engine contract:
///
/// ```
/// use pairbundle_engine::BuildRequest;
///
/// let request = BuildRequest::new("a.js", "a.out.js");
/// assert!(request.bundle);
/// assert!(request.write);
/// assert!(request.tree_shaking);
/// assert!(!request.minify_whitespace);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    /// Entry module to bundle
    pub entry_point: PathBuf,
    /// File the bundle is written to
    pub output_path: PathBuf,
    /// Inline imported modules into the output
    pub bundle: bool,
    /// Strip whitespace and comments
    pub minify_whitespace: bool,
    /// Mangle local identifiers
    pub minify_identifiers: bool,
    /// Apply syntax-level compression
    pub minify_syntax: bool,
    /// Write the output to disk
    pub write: bool,
    /// Drop unused code
    pub tree_shaking: bool,
    /// Engine diagnostic output level
    pub log_level: LogLevel,
}

impl BuildRequest {
    /// Create a request with the defaults used for every pairbundle job:
    /// bundled, written, tree-shaken, unminified, `warning` log level.
    pub fn new(entry_point: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            entry_point: entry_point.into(),
            output_path: output_path.into(),
            bundle: true,
            minify_whitespace: false,
            minify_identifiers: false,
            minify_syntax: false,
            write: true,
            tree_shaking: true,
            log_level: LogLevel::Warning,
        }
    }

    /// Set all three minify switches at once.
    pub fn minify(mut self, enabled: bool) -> Self {
        self.minify_whitespace = enabled;
        self.minify_identifiers = enabled;
        self.minify_syntax = enabled;
        self
    }

    /// Set the engine diagnostic output level.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Skip writing the output to disk.
    pub fn dry_run(mut self) -> Self {
        self.write = false;
        self
    }

    pub fn entry_point(&self) -> &Path {
        &self.entry_point
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
