//! Pairing of `-in`/`-out` flag occurrences.
//!
//! Occurrences are fed one at a time, in command-line order. An `-in` may run
//! one step ahead of its `-out`, never more, and an `-out` never runs ahead of
//! its `-in`; anything else is rejected at the offending occurrence.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::orchestrator::PairedSequences;

/// A single `-in <path>` or `-out <path>` on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagOccurrence {
    Input(PathBuf),
    Output(PathBuf),
}

/// Accumulates occurrences into two index-aligned sequences.
#[derive(Debug, Default)]
pub struct PairCollector {
    inputs: Vec<PathBuf>,
    outputs: Vec<PathBuf>,
}

impl PairCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed every occurrence in order and hand back the sequences.
    ///
    /// Stops at the first occurrence that breaks alternation. The returned
    /// sequences may still be incomplete (a trailing `-in`, or no pairs at
    /// all); that is checked by [`PairedSequences::validate`].
    pub fn collect<I>(occurrences: I) -> Result<PairedSequences, ConfigError>
    where
        I: IntoIterator<Item = FlagOccurrence>,
    {
        let mut collector = Self::new();
        for occurrence in occurrences {
            collector.push(occurrence)?;
        }
        Ok(collector.finish())
    }

    pub fn push(&mut self, occurrence: FlagOccurrence) -> Result<(), ConfigError> {
        match occurrence {
            FlagOccurrence::Input(path) => self.push_input(path),
            FlagOccurrence::Output(path) => self.push_output(path),
        }
    }

    /// Record an `-in`. Fails if the previous `-in` has no `-out` yet.
    pub fn push_input(&mut self, path: impl Into<PathBuf>) -> Result<(), ConfigError> {
        let path = path.into();
        if self.has_pending_input() {
            return Err(ConfigError::UnexpectedInput { path });
        }
        self.inputs.push(path);
        Ok(())
    }

    /// Record an `-out`. Fails unless an `-in` is waiting for it.
    pub fn push_output(&mut self, path: impl Into<PathBuf>) -> Result<(), ConfigError> {
        let path = path.into();
        if !self.has_pending_input() {
            return Err(ConfigError::UnexpectedOutput { path });
        }
        self.outputs.push(path);
        Ok(())
    }

    /// True when the last `-in` has not been matched by an `-out` yet.
    pub fn has_pending_input(&self) -> bool {
        self.inputs.len() > self.outputs.len()
    }

    /// Hand the sequences over, by value.
    pub fn finish(self) -> PairedSequences {
        PairedSequences::new(self.inputs, self.outputs)
    }
}
