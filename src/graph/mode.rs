use crate::*;

/// Which transitions the sequence has to balance.
///
/// - `Pairwise` — one vertex per stimulus, an edge per ordered pair
/// - `Triplet` — one vertex per ordered pair, an edge per ordered triplet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Mode {
    Pairwise,
    Triplet,
}

impl Mode {
    /// Build the base transition graph. `repeats` parallel edges back each
    /// transition; `loops` admits same-stimulus transitions.
    pub fn build(&self, stimuli: usize, repeats: usize, loops: bool) -> Multigraph {
        let graph = match self {
            Self::Pairwise => Self::pairwise(stimuli, repeats, loops),
            Self::Triplet => Self::triplet(stimuli, repeats, loops),
        };
        log::debug!(
            "built {:?} graph with {} vertices and {} edges",
            self,
            graph.n(),
            graph.m()
        );
        graph
    }

    fn pairwise(stimuli: usize, repeats: usize, loops: bool) -> Multigraph {
        let mut graph = Multigraph::default();
        for i in 0..stimuli {
            graph.add_vertex(vec![Stimulus::Trial(i)]);
        }
        for i in 0..stimuli {
            for j in (0..stimuli).filter(|&j| loops || i != j) {
                for _ in 0..repeats {
                    graph.add_edge(i, j);
                }
            }
        }
        graph
    }

    /// vertex (a, b) connects to (c, d) iff b == c,
    /// so each edge spells out the triplet (a, b, d)
    fn triplet(stimuli: usize, repeats: usize, loops: bool) -> Multigraph {
        let mut graph = Multigraph::default();
        for a in 0..stimuli {
            for b in (0..stimuli).filter(|&b| loops || a != b) {
                graph.add_vertex(vec![Stimulus::Trial(a), Stimulus::Trial(b)]);
            }
        }
        let n = graph.n();
        for i in 0..n {
            for j in 0..n {
                let tail = graph.vertex(i).labels()[1];
                let head = graph.vertex(j).head();
                if tail == head {
                    for _ in 0..repeats {
                        graph.add_edge(i, j);
                    }
                }
            }
        }
        graph
    }
}
