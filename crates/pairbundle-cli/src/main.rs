//! pairbundle - bundle paired input/output files.
//!
//! Parses the flags, initializes logging and colors, runs the batch and maps
//! the outcome to an exit status.

use clap::error::ErrorKind;
use pairbundle_cli::{cli, commands, config::BatchConfig, logger, ui, CliError, ConfigError};
use std::process::ExitCode;
use std::time::Instant;

#[tokio::main]
async fn main() -> ExitCode {
    let started = Instant::now();

    let invocation = match cli::parse() {
        Ok(invocation) => invocation,
        Err(err) => return parse_failure(err),
    };

    let config = BatchConfig::from_cli(&invocation.cli);
    logger::init_logger(config.verbose, config.quiet, !config.color);
    ui::init_colors(config.color);

    match commands::batch_execute(invocation, &config, started).await {
        Ok(report) => {
            ui::report_elapsed(report.elapsed);
            ExitCode::SUCCESS
        }
        Err(err) => failure(err),
    }
}

fn parse_failure(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            ui::init_colors(ui::should_use_color());
            ui::usage_error(ConfigError::from(err), &cli::usage());
            ExitCode::FAILURE
        }
    }
}

fn failure(err: CliError) -> ExitCode {
    let code = ExitCode::from(err.exit_code());
    if err.wants_usage() {
        ui::usage_error(err, &cli::usage());
    } else if let CliError::JobFailure { .. } = err {
        // The engine already printed the diagnostics for the failing pair.
        tracing::debug!("{err}");
    } else {
        ui::error(&err);
    }
    code
}
