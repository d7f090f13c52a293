use crate::*;

impl Multigraph {
    /// Copy this graph and attach a catch vertex with `catches` connections.
    ///
    /// Connection `c` links the catch vertex to the `c mod n`-th vertex of a
    /// uniformly shuffled order of the existing vertices, with one edge in
    /// each direction so every degree stays balanced. The receiver is left
    /// untouched; each call draws a fresh set of connections.
    pub fn augment(&self, catches: usize, rng: &mut impl Chance) -> Multigraph {
        let mut graph = self.clone();
        if catches == 0 || self.n() == 0 {
            return graph;
        }
        let n = self.n();
        let catch = graph.add_vertex(vec![Stimulus::Catch]);
        let mut order = (0..n).collect::<Vec<VertexId>>();
        rng.shuffle(&mut order);
        for c in 0..catches {
            let v = order[c % n];
            graph.add_edge(v, catch);
            graph.add_edge(catch, v);
        }
        log::trace!("attached catch vertex {} with {} connections", catch, catches);
        graph
    }

    /// the catch vertex, if this graph has been augmented
    pub fn catch(&self) -> Option<VertexId> {
        self.vertices()
            .iter()
            .rev()
            .find(|v| v.head().is_catch())
            .map(|v| v.id())
    }
}
