//! Directed multigraph arena and the BEST theorem sampling pipeline.
//!
//! - `Multigraph` — vertices and edges in two dense arenas
//! - `Mode` — pairwise and triplet transition graphs
//! - `augment` — catch vertex attachment
//! - `Arborescence` — uniform in-tree by backward random walk
//! - `Schedule` — per-vertex outgoing order with tree edges last
//! - `Tour` — greedy Eulerian circuit extraction

mod arborescence;
mod catch;
mod edge;
mod mode;
mod multigraph;
mod schedule;
mod tour;
mod vertex;

pub use arborescence::*;
pub use catch::*;
pub use edge::*;
pub use mode::*;
pub use multigraph::*;
pub use schedule::*;
pub use tour::*;
pub use vertex::*;
