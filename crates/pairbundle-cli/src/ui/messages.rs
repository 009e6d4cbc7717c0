//! Messages printed to stderr.

use miette::{Diagnostic, Report};
use owo_colors::OwoColorize;
use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

use super::{color_enabled, format_duration};

/// The single line printed after a fully successful run.
pub fn elapsed_line(elapsed: Duration, color: bool) -> String {
    let duration = format_duration(elapsed);
    if color {
        format!("{} {}", "Bundled in:".green().bold(), duration.bold())
    } else {
        format!("Bundled in: {duration}")
    }
}

/// Print `Bundled in: <duration>` to stderr.
pub fn report_elapsed(elapsed: Duration) {
    eprintln!("{}", elapsed_line(elapsed, color_enabled()));
}

/// Print an error followed by the usage text.
pub fn usage_error<E>(err: E, usage: &str)
where
    E: Diagnostic + Send + Sync + 'static,
{
    let _ = write_usage_error(&mut io::stderr().lock(), err, usage);
}

pub(crate) fn write_usage_error<E>(out: &mut impl Write, err: E, usage: &str) -> io::Result<()>
where
    E: Diagnostic + Send + Sync + 'static,
{
    writeln!(out, "{:?}", Report::new(err))?;
    writeln!(out)?;
    writeln!(out, "{usage}")
}

/// Print a plain error line.
pub fn error(message: impl Display) {
    if color_enabled() {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    } else {
        eprintln!("error: {message}");
    }
}
