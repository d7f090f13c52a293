use crate::*;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// Directed multigraph stored as two dense arenas.
///
/// Vertex `i` lives at `vertices[i]`, edge `j` at `edges[j]`; adjacency is
/// kept as edge id lists on each vertex. Ids are handed out sequentially
/// and never reused. Vertices and edges are only ever appended.
///
/// # Invariant
///
/// An Eulerian circuit exists iff every vertex has equal in- and out-degree
/// and all vertices sit in one weakly connected component. Builders and
/// [`Multigraph::augment`] preserve this; [`Multigraph::validate`] checks it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Multigraph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Multigraph {
    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.vertices.len()
    }
    /// Number of edges.
    pub fn m(&self) -> usize {
        self.edges.len()
    }
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id]
    }
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    /// append a vertex and get its id
    pub fn add_vertex(&mut self, labels: Vec<Stimulus>) -> VertexId {
        let id = self.vertices.len();
        self.vertices.push(Vertex::new(id, labels));
        id
    }
    /// append an edge, registering it on both endpoints
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> EdgeId {
        let id = self.edges.len();
        self.edges.push(Edge::new(id, source, target));
        self.vertices[source].emit(id);
        self.vertices[target].receive(id);
        id
    }

    /// vertices whose first label is the given stimulus
    pub fn headed(&self, stimulus: Stimulus) -> Vec<VertexId> {
        self.vertices
            .iter()
            .filter(|v| v.head() == stimulus)
            .map(|v| v.id())
            .collect()
    }

    /// Check that an Eulerian circuit through every vertex exists.
    pub fn validate(&self) -> Result<(), EulerError> {
        if self.vertices.is_empty() {
            return Err(EulerError::GraphInvariantViolation(
                "graph has no vertices".into(),
            ));
        }
        if let Some(v) = self
            .vertices
            .iter()
            .find(|v| v.incoming().len() != v.outgoing().len())
        {
            return Err(EulerError::GraphInvariantViolation(format!(
                "vertex {} has in-degree {} but out-degree {}",
                v.id(),
                v.incoming().len(),
                v.outgoing().len()
            )));
        }
        match petgraph::algo::connected_components(&self.skeleton()) {
            1 => Ok(()),
            k => Err(EulerError::GraphInvariantViolation(format!(
                "graph splits into {} weakly connected components",
                k
            ))),
        }
    }

    /// petgraph view of the arena, weights dropped, ids preserved
    fn skeleton(&self) -> DiGraph<(), ()> {
        let mut graph = DiGraph::with_capacity(self.n(), self.m());
        self.vertices.iter().for_each(|_| {
            graph.add_node(());
        });
        self.edges.iter().for_each(|e| {
            graph.add_edge(NodeIndex::new(e.source()), NodeIndex::new(e.target()), ());
        });
        graph
    }
}

impl std::fmt::Display for Multigraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for vertex in self.vertices.iter() {
            let labels = vertex
                .labels()
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(",");
            let targets = vertex
                .outgoing()
                .iter()
                .map(|&e| self.edge(e).target().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{:>4} [{}] → {}", vertex.id(), labels, targets)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: usize) -> Multigraph {
        let mut graph = Multigraph::default();
        (0..n).for_each(|i| {
            graph.add_vertex(vec![Stimulus::Trial(i)]);
        });
        (0..n).for_each(|i| {
            graph.add_edge(i, (i + 1) % n);
        });
        graph
    }

    #[test]
    fn ids_are_dense() {
        let graph = cycle(5);
        assert!(graph.vertices().iter().enumerate().all(|(i, v)| v.id() == i));
        assert!(graph.edges().iter().enumerate().all(|(i, e)| e.id() == i));
    }

    #[test]
    fn adjacency_is_registered() {
        let graph = cycle(3);
        assert!(graph.vertex(0).outgoing() == &[0]);
        assert!(graph.vertex(1).incoming() == &[0]);
        assert!(graph.edge(2).source() == 2);
        assert!(graph.edge(2).target() == 0);
    }

    #[test]
    fn cycle_is_eulerian() {
        assert!(cycle(6).validate().is_ok());
    }

    #[test]
    fn empty_is_rejected() {
        assert!(Multigraph::default().validate().is_err());
    }

    #[test]
    fn imbalance_is_rejected() {
        let mut graph = cycle(3);
        graph.add_edge(0, 2);
        assert!(matches!(
            graph.validate(),
            Err(EulerError::GraphInvariantViolation(_))
        ));
    }

    #[test]
    fn disconnection_is_rejected() {
        let mut graph = cycle(3);
        let a = graph.add_vertex(vec![Stimulus::Trial(3)]);
        let b = graph.add_vertex(vec![Stimulus::Trial(4)]);
        graph.add_edge(a, b);
        graph.add_edge(b, a);
        assert!(matches!(
            graph.validate(),
            Err(EulerError::GraphInvariantViolation(_))
        ));
    }

    #[test]
    fn isolated_vertex_is_rejected() {
        let mut graph = cycle(3);
        graph.add_vertex(vec![Stimulus::Trial(3)]);
        assert!(graph.validate().is_err());
    }

    #[test]
    fn single_vertex_is_eulerian() {
        let mut graph = Multigraph::default();
        graph.add_vertex(vec![Stimulus::Trial(0)]);
        assert!(graph.validate().is_ok());
    }
}
