//! Balanced, randomized trial sequences for behavioral experiments.
//!
//! Every required stimulus transition becomes an edge of a directed
//! multigraph. A uniformly random Eulerian circuit of that graph is a
//! sequence in which each transition occurs exactly as often as required.
//! Circuits are sampled with the BEST theorem construction: draw a uniform
//! in-tree by backward random walk, order each vertex's outgoing edges
//! randomly with its tree edge last, then walk greedily.
//!
//! # Module Structure
//!
//! - `chance` — Injectable randomness
//! - `graph` — Multigraph arena, builders, catch augmentation, samplers
//! - `experiment` — Parameters, experiment configuration, sequence composition

mod chance;
mod error;
mod experiment;
mod graph;
mod stimulus;

pub use chance::*;
pub use error::*;
pub use experiment::*;
pub use graph::*;
pub use stimulus::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Dense index into a graph's vertex arena.
pub type VertexId = usize;
/// Dense index into a graph's edge arena.
pub type EdgeId = usize;
/// Fraction of trials that should be catch trials.
pub type Frequency = f64;

// ============================================================================
// EXPERIMENT PARAMETERS
// ============================================================================
/// Label printed for the catch stimulus.
pub const CATCH_LABEL: &str = "C";
/// Catch frequency ceiling. Each catch trial is followed by a stimulus,
/// so catches can never exceed half of all trials.
pub const MAX_CATCH_FREQUENCY: Frequency = 0.5;
/// Stimulus count used when none is given.
pub const DEFAULT_STIMULI: usize = 4;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging. Verbose runs log DEBUG, otherwise INFO.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
