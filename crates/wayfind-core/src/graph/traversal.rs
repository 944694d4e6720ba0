use crate::graph::store::Graph;
use crate::graph::types::{Edge, NodeId};

/// Trait for providing graph adjacency to the search algorithms
pub trait GraphProvider {
    /// Outgoing arcs of `id` in traversal order (empty for unknown nodes)
    fn edges(&self, id: &NodeId) -> &[Edge];
    fn contains(&self, id: &NodeId) -> bool;
}

impl GraphProvider for Graph {
    fn edges(&self, id: &NodeId) -> &[Edge] {
        Graph::edges(self, id)
    }

    fn contains(&self, id: &NodeId) -> bool {
        Graph::contains(self, id)
    }
}
