//! Mapping of a request's minify switches onto Rolldown's minifier options.
//!
//! A [`BuildRequest`](crate::BuildRequest) carries three independent switches.
//! Each one maps to its own part of Rolldown's detailed minify options:
//!
//! - whitespace: `remove_whitespace`
//! - identifiers: the mangler
//! - syntax: the compressor
//!
//! With all three on, Rolldown's own `minify: true` preset is used, which
//! tunes the mangler and compressor for the output format.

use oxc_minifier::{CompressOptions, MangleOptions, MinifierOptions};
use rolldown::{RawMinifyOptions, RawMinifyOptionsDetailed};

/// The three minify switches of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinifySwitches {
    pub whitespace: bool,
    pub identifiers: bool,
    pub syntax: bool,
}

impl MinifySwitches {
    /// Switches requested by a build request.
    ///
    /// # Examples
    ///
    /// ```
    /// use pairbundle_engine::{BuildRequest, MinifySwitches};
    ///
    /// let request = BuildRequest::new("a.js", "a.out.js").minify(true);
    /// assert!(MinifySwitches::for_request(&request).is_full());
    /// ```
    pub fn for_request(request: &crate::BuildRequest) -> Self {
        Self {
            whitespace: request.minify_whitespace,
            identifiers: request.minify_identifiers,
            syntax: request.minify_syntax,
        }
    }

    /// All three switches on.
    pub fn is_full(&self) -> bool {
        self.whitespace && self.identifiers && self.syntax
    }

    /// No switch on.
    pub fn is_off(&self) -> bool {
        !(self.whitespace || self.identifiers || self.syntax)
    }

    /// Convert to Rolldown's minify option; `None` leaves minification off.
    pub(crate) fn to_rolldown_options(self) -> Option<RawMinifyOptions> {
        if self.is_off() {
            return None;
        }
        if self.is_full() {
            return Some(RawMinifyOptions::Bool(true));
        }

        Some(RawMinifyOptions::Object(RawMinifyOptionsDetailed {
            options: MinifierOptions {
                mangle: self.identifiers.then(|| MangleOptions {
                    top_level: true,
                    ..MangleOptions::default()
                }),
                compress: self.syntax.then(CompressOptions::smallest),
            },
            default_target: true,
            remove_whitespace: self.whitespace,
        }))
    }
}
