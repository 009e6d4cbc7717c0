//! Error handling for the pairbundle CLI.
//!
//! There are two ways a run can fail:
//!
//! - [`ConfigError`] - the flags are missing, unmatched, or unequal in count.
//!   Reported with the usage text, exit status 1.
//! - [`CliError::JobFailure`] - the engine reported errors for a pair. The
//!   engine has already printed its diagnostics; the run stops with exit
//!   status 1 and later pairs are never built.
//!
//! Configuration errors derive [`miette::Diagnostic`] so they render with a
//! code and a hint.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum CliError {
    /// Missing, unmatched, or mismatched flags
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    /// The engine reported one or more errors for a pair
    #[error("Build failed for pair {index} ({}): {errors} error(s)", .entry.display())]
    JobFailure {
        /// 0-based index of the failing pair
        index: usize,
        /// Entry point of the failing pair
        entry: PathBuf,
        /// Number of errors the engine reported
        errors: usize,
    },

    /// I/O errors outside the engine (working directory lookup, stderr)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Whether the usage text should accompany this error.
    pub fn wants_usage(&self) -> bool {
        matches!(self, CliError::Config(_))
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        CliError::Config(err.into())
    }
}

/// Flag errors, detected while collecting pairs or before dispatching them.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum ConfigError {
    /// An `-in` arrived while the previous `-in` still had no `-out`
    #[error("expecting -out option, got -in {}", .path.display())]
    #[diagnostic(
        code(pairbundle::config::unexpected_input),
        help("Every -in must be followed by its matching -out before the next -in")
    )]
    UnexpectedInput {
        /// Path given to the rejected `-in`
        path: PathBuf,
    },

    /// An `-out` arrived with no pending `-in` to pair with
    #[error("expecting -in option, got -out {}", .path.display())]
    #[diagnostic(
        code(pairbundle::config::unexpected_output),
        help("Every -out must come right after its matching -in")
    )]
    UnexpectedOutput {
        /// Path given to the rejected `-out`
        path: PathBuf,
    },

    /// No complete pair was given
    #[error("must specify one or more matching -in and -out options")]
    #[diagnostic(
        code(pairbundle::config::missing_pairs),
        help("Example: pairbundle -in src/app.js -out dist/app.js")
    )]
    MissingPairs,

    /// The number of `-in` and `-out` options differs
    #[error("must specify matching -in and -out options: got {inputs} -in and {outputs} -out")]
    #[diagnostic(
        code(pairbundle::config::count_mismatch),
        help("Every -in needs exactly one -out")
    )]
    CountMismatch {
        /// Number of `-in` options
        inputs: usize,
        /// Number of `-out` options
        outputs: usize,
    },

    /// The command line could not be parsed (unknown flag, missing value, ...)
    #[error("{0}")]
    #[diagnostic(code(pairbundle::config::invalid_arguments))]
    InvalidArguments(String),
}

impl From<clap::Error> for ConfigError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let message = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string();
        ConfigError::InvalidArguments(message)
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use miette::Diagnostic;

    #[test]
    fn test_unexpected_input_message() {
        let err = ConfigError::UnexpectedInput {
            path: PathBuf::from("b.js"),
        };
        let msg = err.to_string();
        assert!(msg.contains("expecting -out option"));
        assert!(msg.contains("b.js"));
        assert!(err.help().is_some());
    }

    #[test]
    fn test_unexpected_output_message() {
        let err = ConfigError::UnexpectedOutput {
            path: PathBuf::from("b.out.js"),
        };
        let msg = err.to_string();
        assert!(msg.contains("expecting -in option"));
        assert!(msg.contains("b.out.js"));
    }

    #[test]
    fn test_count_mismatch_message() {
        let err = ConfigError::CountMismatch {
            inputs: 2,
            outputs: 1,
        };
        assert_eq!(
            err.to_string(),
            "must specify matching -in and -out options: got 2 -in and 1 -out"
        );
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("pairbundle::config::count_mismatch".to_string())
        );
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::MissingPairs.into();
        assert!(matches!(cli_err, CliError::Config(ConfigError::MissingPairs)));
        assert!(cli_err.wants_usage());
        assert_eq!(cli_err.exit_code(), 1);
        assert_eq!(cli_err.to_string(), ConfigError::MissingPairs.to_string());
        assert_eq!(
            cli_err.code().map(|c| c.to_string()),
            Some("pairbundle::config::missing_pairs".to_string())
        );
    }

    #[test]
    fn test_job_failure() {
        let err = CliError::JobFailure {
            index: 1,
            entry: PathBuf::from("b.js"),
            errors: 3,
        };
        assert_eq!(err.to_string(), "Build failed for pair 1 (b.js): 3 error(s)");
        assert!(!err.wants_usage());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_clap_error_keeps_first_line() {
        let clap_err = clap::Error::raw(ErrorKind::UnknownArgument, "unexpected argument '--bogus' found\n");
        let err = ConfigError::from(clap_err);
        match err {
            ConfigError::InvalidArguments(msg) => {
                assert_eq!(msg, "unexpected argument '--bogus' found")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
