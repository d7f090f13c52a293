use crate::*;

/// The order in which each vertex hands out its outgoing edges.
///
/// Rebuilt per sampling round rather than written back into the graph.
/// Non-tree edges are uniformly permuted; the vertex's in-tree edge, if
/// any, goes last. With that order the greedy walk of [`Tour::extract`]
/// cannot strand itself before every edge is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule(Vec<Vec<EdgeId>>);

impl Schedule {
    pub fn shuffle(graph: &Multigraph, tree: &Arborescence, rng: &mut impl Chance) -> Self {
        Self(
            graph
                .vertices()
                .iter()
                .map(|vertex| {
                    let (mut order, last): (Vec<EdgeId>, Vec<EdgeId>) = vertex
                        .outgoing()
                        .iter()
                        .copied()
                        .partition(|&e| !tree.contains(e));
                    debug_assert!(last.len() <= 1);
                    rng.shuffle(&mut order);
                    order.extend(last);
                    order
                })
                .collect(),
        )
    }

    /// outgoing edges of a vertex in traversal order
    pub fn order(&self, vertex: VertexId) -> &[EdgeId] {
        &self.0[vertex]
    }
}

impl From<Vec<Vec<EdgeId>>> for Schedule {
    fn from(orders: Vec<Vec<EdgeId>>) -> Self {
        Self(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn orders_are_permutations() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let graph = Mode::Pairwise.build(4, 2, true);
        let tree = Arborescence::sample(&graph, 0, rng).expect("connected");
        let schedule = Schedule::shuffle(&graph, &tree, rng);
        for v in graph.vertices() {
            let mut order = schedule.order(v.id()).to_vec();
            let mut outgoing = v.outgoing().to_vec();
            order.sort();
            outgoing.sort();
            assert!(order == outgoing);
        }
    }

    #[test]
    fn tree_edges_go_last() {
        let graph = Mode::Pairwise.build(5, 1, true);
        for seed in 0..16 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let tree = Arborescence::sample(&graph, 2, rng).expect("connected");
            let schedule = Schedule::shuffle(&graph, &tree, rng);
            for v in graph.vertices().iter().filter(|v| v.id() != 2) {
                let last = schedule.order(v.id()).last().copied();
                assert!(last.is_some_and(|e| tree.contains(e)));
                assert!(schedule.order(v.id()).iter().filter(|&&e| tree.contains(e)).count() == 1);
            }
            assert!(!schedule.order(2).iter().any(|&e| tree.contains(e)));
        }
    }

    #[test]
    fn orders_vary() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let graph = Mode::Pairwise.build(6, 1, true);
        let tree = Arborescence::sample(&graph, 0, rng).expect("connected");
        let a = Schedule::shuffle(&graph, &tree, rng);
        let b = Schedule::shuffle(&graph, &tree, rng);
        assert!(a != b);
    }
}
