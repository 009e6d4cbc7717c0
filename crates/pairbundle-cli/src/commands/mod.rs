//! Command implementations.
//!
//! pairbundle has a single command, [`batch`]: collect the pairs, then hand
//! them to the orchestrator.

pub mod batch;

pub use batch::execute as batch_execute;
