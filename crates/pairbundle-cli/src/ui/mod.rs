//! Terminal output: color detection, error rendering and the elapsed-time
//! report.

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::format_duration;
pub use messages::{elapsed_line, error, report_elapsed, usage_error};

static COLOR: AtomicBool = AtomicBool::new(false);

/// Check if color output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them; otherwise colors
/// are used when stderr is a terminal.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Record the color decision and configure miette's error rendering to match.
///
/// Call once, early in `main`.
pub fn init_colors(color: bool) {
    COLOR.store(color, Ordering::Relaxed);
    let _ = miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .color(color)
                .unicode(color)
                .build(),
        )
    }));
}

/// Whether colored output was enabled by [`init_colors`].
pub fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}
