//! Resolved batch settings.
//!
//! pairbundle reads no configuration files; everything comes from the flags.

use pairbundle_engine::LogLevel;

use crate::cli::Cli;
use crate::ui;

/// Settings shared by every job and by the terminal output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchConfig {
    /// Apply whitespace, identifier and syntax minification to every job
    pub minify: bool,
    /// Debug logging
    pub verbose: bool,
    /// Errors only
    pub quiet: bool,
    /// Colored stderr output
    pub color: bool,
}

impl BatchConfig {
    /// Resolve the settings from parsed flags and the environment.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            minify: cli.minify,
            verbose: cli.verbose,
            quiet: cli.quiet,
            color: !cli.no_color && ui::should_use_color(),
        }
    }

    /// Level at which the engine prints diagnostics.
    pub fn engine_log_level(&self) -> LogLevel {
        if self.quiet {
            LogLevel::Error
        } else if self.verbose {
            LogLevel::Info
        } else {
            LogLevel::Warning
        }
    }
}
