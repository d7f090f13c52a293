//! Experiment configuration and sequence composition.
//!
//! - `Parameters` — caller-facing knobs, validation, catch count
//! - `Experiment` — validated parameters plus the immutable base graph
//! - `Sequence` — stitched, label-mapped output of sampled rounds

mod experiment;
mod parameters;
mod sequence;

pub use experiment::*;
pub use parameters::*;
pub use sequence::*;
