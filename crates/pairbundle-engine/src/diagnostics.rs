//! Diagnostics reported by the engine.
//!
//! Rolldown reports problems as batches of `BuildDiagnostic`s. This module
//! flattens them into [`Diagnostic`], a small cloneable, serializable shape
//! the rest of pairbundle can count and print without depending on
//! Rolldown's API. The kind and severity come from Rolldown's event kind;
//! the location and help text are read from the rendered message.

use miette::Severity;
use rolldown_error::{BatchedBuildDiagnostic, BuildDiagnostic, EventKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic kind (mirrors the Rolldown event kinds we care about).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MissingExport,
    ParseError,
    CircularDependency,
    UnresolvedEntry,
    UnresolvedImport,
    InvalidOption,
    WriteFailure,
    Other(String),
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::MissingExport => write!(f, "MissingExport"),
            DiagnosticKind::ParseError => write!(f, "ParseError"),
            DiagnosticKind::CircularDependency => write!(f, "CircularDependency"),
            DiagnosticKind::UnresolvedEntry => write!(f, "UnresolvedEntry"),
            DiagnosticKind::UnresolvedImport => write!(f, "UnresolvedImport"),
            DiagnosticKind::InvalidOption => write!(f, "InvalidOption"),
            DiagnosticKind::WriteFailure => write!(f, "WriteFailure"),
            DiagnosticKind::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A single engine-reported issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: DiagnosticSeverity,
    pub message: String,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::new(kind, DiagnosticSeverity::Error, message)
    }

    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::new(kind, DiagnosticSeverity::Warning, message)
    }

    fn new(kind: DiagnosticKind, severity: DiagnosticSeverity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            file: None,
            line: None,
            column: None,
            help: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Convert every entry of a failed Rolldown build.
    pub fn from_batch(batch: BatchedBuildDiagnostic) -> Vec<Self> {
        Self::from_rolldown(&batch.into_vec())
    }

    /// Convert Rolldown diagnostics, one per entry, keeping their severity.
    pub fn from_rolldown(diagnostics: &[BuildDiagnostic]) -> Vec<Self> {
        diagnostics.iter().map(Self::from_build_diagnostic).collect()
    }

    /// Convert a single Rolldown diagnostic.
    pub fn from_build_diagnostic(diagnostic: &BuildDiagnostic) -> Self {
        let severity = match diagnostic.severity() {
            rolldown_error::Severity::Error => DiagnosticSeverity::Error,
            rolldown_error::Severity::Warning => DiagnosticSeverity::Warning,
        };
        let message = diagnostic.to_string();
        let (file, line, column) = locate(&message);

        Self {
            kind: DiagnosticKind::from(diagnostic.kind()),
            severity,
            help: extract_help_text(&message),
            message,
            file,
            line,
            column,
        }
    }

    /// Render through miette's report handler.
    pub fn render(&self) -> String {
        format!("{:?}", miette::Report::new(DiagnosticError::from(self.clone())))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(file) = &self.file {
            write!(f, " ({}", file)?;
            if let Some(line) = self.line {
                write!(f, ":{}", line)?;
                if let Some(column) = self.column {
                    write!(f, ":{}", column)?;
                }
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl From<EventKind> for DiagnosticKind {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::MissingExportError => DiagnosticKind::MissingExport,
            EventKind::ParseError | EventKind::JsonParseError => DiagnosticKind::ParseError,
            EventKind::CircularDependency | EventKind::CircularReexportError => {
                DiagnosticKind::CircularDependency
            }
            EventKind::UnresolvedEntry => DiagnosticKind::UnresolvedEntry,
            EventKind::UnresolvedImport | EventKind::ResolveError => {
                DiagnosticKind::UnresolvedImport
            }
            EventKind::InvalidOptionError
            | EventKind::InvalidExportOptionError
            | EventKind::InvalidDefineConfigError => DiagnosticKind::InvalidOption,
            other => DiagnosticKind::Other(other.to_string()),
        }
    }
}

const SOURCE_EXTENSIONS: [&str; 6] = [".js", ".ts", ".jsx", ".tsx", ".mjs", ".cjs"];

/// Find the first source path in a message, with the `:line:column` that
/// directly follows it.
fn locate(message: &str) -> (Option<String>, Option<u32>, Option<u32>) {
    let tokens = message.split(|c: char| {
        c.is_whitespace() || matches!(c, '"' | '\'' | '`' | '(' | ')' | '[' | ']' | ',')
    });

    for token in tokens {
        for ext in SOURCE_EXTENSIONS {
            let Some(pos) = token.find(ext) else {
                continue;
            };
            let end = pos + ext.len();
            let rest = &token[end..];
            if rest.starts_with(|c: char| c.is_ascii_alphanumeric()) || pos == 0 {
                continue;
            }
            let (line, column) = extract_line_column(rest);
            return (Some(token[..end].to_string()), line, column);
        }
    }
    (None, None, None)
}

/// Extract `:line:column` directly following a file path.
fn extract_line_column(after_path: &str) -> (Option<u32>, Option<u32>) {
    let mut numbers = after_path
        .strip_prefix(':')
        .map(|rest| {
            rest.split(':')
                .take(2)
                .map(|n| {
                    n.chars()
                        .take_while(|c| c.is_ascii_digit())
                        .collect::<String>()
                        .parse::<u32>()
                        .ok()
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
        .into_iter();

    let line = numbers.next().flatten();
    let column = line.and(numbers.next().flatten());
    (line, column)
}

/// Extract help text from an error message.
fn extract_help_text(text: &str) -> Option<String> {
    for indicator in &["help: ", "Help: ", "hint: ", "Hint: "] {
        if let Some(pos) = text.find(indicator) {
            let help = text[pos + indicator.len()..]
                .lines()
                .next()
                .unwrap_or("")
                .trim()
                .trim_end_matches(['"', ',', ')', '}'])
                .to_string();
            if !help.is_empty() {
                return Some(help);
            }
        }
    }
    None
}

/// A [`Diagnostic`] as a miette diagnostic, for terminal rendering.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{inner}")]
pub struct DiagnosticError {
    inner: Diagnostic,
}

impl From<Diagnostic> for DiagnosticError {
    fn from(inner: Diagnostic) -> Self {
        Self { inner }
    }
}

impl miette::Diagnostic for DiagnosticError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("rolldown::{}", self.inner.kind)))
    }

    fn severity(&self) -> Option<Severity> {
        Some(match self.inner.severity {
            DiagnosticSeverity::Error => Severity::Error,
            DiagnosticSeverity::Warning => Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }
}
