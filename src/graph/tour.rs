use crate::*;

/// A closed walk over vertex ids that uses every edge exactly once.
///
/// Holds `m + 1` vertices for a graph of `m` edges; first and last coincide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour(Vec<VertexId>);

impl Tour {
    /// Walk from `start`, always leaving through the first unused edge in
    /// the schedule. Getting stuck before all edges are spent, or ending
    /// away from `start`, means the graph or schedule broke the Eulerian
    /// invariants.
    pub fn extract(
        graph: &Multigraph,
        schedule: &Schedule,
        start: VertexId,
    ) -> Result<Self, EulerError> {
        let m = graph.m();
        let mut used = vec![false; m];
        let mut walk = Vec::with_capacity(m + 1);
        let mut current = start;
        walk.push(current);
        for step in 0..m {
            let edge = schedule
                .order(current)
                .iter()
                .copied()
                .find(|&e| !used[e])
                .ok_or_else(|| {
                    EulerError::GraphInvariantViolation(format!(
                        "walk stuck at vertex {} after {} of {} edges",
                        current, step, m
                    ))
                })?;
            used[edge] = true;
            current = graph.edge(edge).target();
            walk.push(current);
        }
        if current != start {
            return Err(EulerError::GraphInvariantViolation(format!(
                "walk ended at vertex {} instead of {}",
                current, start
            )));
        }
        Ok(Self(walk))
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn first(&self) -> VertexId {
        self.0[0]
    }
    pub fn last(&self) -> VertexId {
        self.0[self.0.len() - 1]
    }
}
