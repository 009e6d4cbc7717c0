//! Logging setup for the pairbundle CLI.
//!
//! Logs go to stderr through a compact `tracing` formatter. By default only
//! warnings are shown, so a clean run prints nothing but the elapsed-time
//! line.
//!
//! ```rust,no_run
//! use pairbundle_cli::logger::init_logger;
//!
//! init_logger(false, false, true);
//! tracing::debug!("hidden unless --verbose or RUST_LOG");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "pairbundle=debug,pairbundle_cli=debug,pairbundle_engine=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "warn";

/// Initialize the global tracing subscriber.
///
/// The filter is chosen in this order:
/// 1. `verbose`: debug for the pairbundle crates
/// 2. `quiet`: errors only
/// 3. `RUST_LOG`, if set and valid
/// 4. warnings only
///
/// Calling it a second time is a no-op.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}

fn filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
