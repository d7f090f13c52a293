use crate::*;
use std::collections::BTreeSet;

/// A spanning in-tree: every non-root vertex keeps exactly one edge,
/// pointing one step closer to the root.
///
/// Sampled uniformly over all in-trees rooted at `root` with the
/// Aldous–Broder walk run backwards: from the current vertex pick an
/// incoming edge uniformly, step to its source, and keep the edge iff
/// that source is visited for the first time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arborescence {
    root: VertexId,
    edges: BTreeSet<EdgeId>,
}

impl Arborescence {
    pub fn sample(
        graph: &Multigraph,
        root: VertexId,
        rng: &mut impl Chance,
    ) -> Result<Self, EulerError> {
        let n = graph.n();
        if root >= n {
            return Err(EulerError::GraphInvariantViolation(format!(
                "root {} outside graph of {} vertices",
                root, n
            )));
        }
        let mut edges = BTreeSet::new();
        let mut visited = vec![false; n];
        let mut remaining = n - 1;
        let mut current = root;
        let mut steps = 0usize;
        visited[root] = true;
        while remaining > 0 {
            let edge = rng
                .choose(graph.vertex(current).incoming())
                .copied()
                .ok_or_else(|| {
                    EulerError::GraphInvariantViolation(format!(
                        "vertex {} has no incoming edges",
                        current
                    ))
                })?;
            current = graph.edge(edge).source();
            if !visited[current] {
                visited[current] = true;
                remaining -= 1;
                edges.insert(edge);
            }
            steps += 1;
        }
        log::trace!("sampled in-tree rooted at {} after {} steps", root, steps);
        Ok(Self { root, edges })
    }

    pub fn root(&self) -> VertexId {
        self.root
    }
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    pub fn contains(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().copied()
    }
    /// the tree edge leaving a vertex, None for the root
    pub fn parent(&self, graph: &Multigraph, vertex: VertexId) -> Option<EdgeId> {
        graph
            .vertex(vertex)
            .outgoing()
            .iter()
            .copied()
            .find(|&e| self.contains(e))
    }
}
