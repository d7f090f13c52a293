use crate::*;

/// A node of the transition multigraph.
///
/// Pairwise and catch vertices carry one label; triplet vertices carry
/// the two stimuli of an overlapping pair. Edge lists hold edge ids in
/// insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: VertexId,
    labels: Vec<Stimulus>,
    incoming: Vec<EdgeId>,
    outgoing: Vec<EdgeId>,
}

impl Vertex {
    pub fn new(id: VertexId, labels: Vec<Stimulus>) -> Self {
        debug_assert!(!labels.is_empty());
        Self {
            id,
            labels,
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }
    pub fn id(&self) -> VertexId {
        self.id
    }
    pub fn labels(&self) -> &[Stimulus] {
        &self.labels
    }
    /// first label, the one emitted when the walk passes through
    pub fn head(&self) -> Stimulus {
        self.labels[0]
    }
    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }
    pub(crate) fn receive(&mut self, edge: EdgeId) {
        self.incoming.push(edge);
    }
    pub(crate) fn emit(&mut self, edge: EdgeId) {
        self.outgoing.push(edge);
    }
}
