//! Command-line interface definition for pairbundle.
//!
//! The flags are declared with clap's derive macros. Because `-in`/`-out` are
//! written with a single dash (`pairbundle -in a.js -out a.out.js`), the raw
//! arguments go through [`normalize`] first, which turns the single-dash long
//! names into the `--long` form clap understands.
//!
//! Clap keeps `-in` and `-out` values in two separate lists, which loses
//! their interleaving. [`parse_from`] rebuilds the arrival order from the
//! value indices so the pair collector sees every occurrence as it was typed.

mod normalize;
mod tests;

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::collector::FlagOccurrence;

pub use normalize::normalize;

/// pairbundle - bundle paired input/output files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pairbundle",
    version,
    about = "Bundle one output file per -in/-out pair",
    long_about = "Bundles each -in entry point into the -out file that follows it.\n\
                  Pairs are built in order; the first pair that fails stops the run.",
    args_override_self = true
)]
pub struct Cli {
    /// Entry point to bundle; must be followed by its -out
    #[arg(long = "in", value_name = "FILE", allow_hyphen_values = true)]
    pub inputs: Vec<PathBuf>,

    /// Output file for the preceding -in
    #[arg(long = "out", value_name = "FILE", allow_hyphen_values = true)]
    pub outputs: Vec<PathBuf>,

    /// Minify every bundle (whitespace, identifiers and syntax)
    ///
    /// Accepts an optional value: `-minify`, `-minify=true`, `-minify=false`.
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value = "false",
        value_parser = clap::builder::BoolishValueParser::new(),
        action = clap::ArgAction::Set
    )]
    pub minify: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Parsed flags together with the `-in`/`-out` occurrences in typed order.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub cli: Cli,
    pub occurrences: Vec<FlagOccurrence>,
}

/// Parse the process arguments.
pub fn parse() -> Result<Invocation, clap::Error> {
    parse_from(std::env::args_os())
}

/// Parse an argument list (the first item is the program name).
pub fn parse_from<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = normalize(args.into_iter().map(Into::into));
    let matches = Cli::command().try_get_matches_from(args)?;
    let occurrences = occurrences_in_order(&matches);
    let cli = Cli::from_arg_matches(&matches)?;
    Ok(Invocation { cli, occurrences })
}

/// Full help text, used as the usage message on configuration errors.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

fn occurrences_in_order(matches: &ArgMatches) -> Vec<FlagOccurrence> {
    let mut indexed: Vec<(usize, FlagOccurrence)> = Vec::new();
    indexed.extend(indexed_values(matches, "inputs").map(|(i, p)| (i, FlagOccurrence::Input(p))));
    indexed.extend(indexed_values(matches, "outputs").map(|(i, p)| (i, FlagOccurrence::Output(p))));
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, occurrence)| occurrence).collect()
}

fn indexed_values<'a>(
    matches: &'a ArgMatches,
    id: &str,
) -> impl Iterator<Item = (usize, PathBuf)> + 'a {
    let indices = matches.indices_of(id).into_iter().flatten();
    let values = matches
        .get_many::<PathBuf>(id)
        .into_iter()
        .flatten()
        .cloned();
    indices.zip(values)
}
