use crate::*;

/// A required transition from one vertex to another.
///
/// Parallel edges share `(source, target)` and differ only by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    id: EdgeId,
    source: VertexId,
    target: VertexId,
}

impl Edge {
    pub fn new(id: EdgeId, source: VertexId, target: VertexId) -> Self {
        Self { id, source, target }
    }
    pub fn id(&self) -> EdgeId {
        self.id
    }
    pub fn source(&self) -> VertexId {
        self.source
    }
    pub fn target(&self) -> VertexId {
        self.target
    }
}
