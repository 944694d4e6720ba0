use serde::Serialize;
use std::fmt;

/// Cumulative or per-edge traversal cost
pub type Cost = u64;

/// Node label, normalized to trimmed uppercase on construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(label: impl AsRef<str>) -> Self {
        NodeId(label.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(label: &str) -> Self {
        NodeId::new(label)
    }
}

impl From<String> for NodeId {
    fn from(label: String) -> Self {
        NodeId::new(label)
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

/// Directed arc in the adjacency list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub destination: NodeId,
    pub cost: Cost,
}

/// An undirected edge as reported by listings (each pair once)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UndirectedEdge {
    pub source: NodeId,
    pub destination: NodeId,
    pub cost: Cost,
}

/// A path from start to goal with its cumulative edge-weight cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub cost: Cost,
    pub path: Vec<NodeId>,
}

impl SearchResult {
    /// Number of edges walked along the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Working-set record shared by every search frontier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub node: NodeId,
    pub cost: Cost,
    pub path: Vec<NodeId>,
}

impl FrontierEntry {
    /// The entry every search starts from: `{start, 0, [start]}`
    pub fn seed(start: &NodeId) -> Self {
        FrontierEntry {
            node: start.clone(),
            cost: 0,
            path: vec![start.clone()],
        }
    }

    /// Follow `edge` out of this entry, accumulating cost and extending the path
    pub fn extend(&self, edge: &Edge) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend(self.path.iter().cloned());
        path.push(edge.destination.clone());
        FrontierEntry {
            node: edge.destination.clone(),
            cost: self.cost.saturating_add(edge.cost),
            path,
        }
    }

    pub fn into_result(self) -> SearchResult {
        SearchResult {
            cost: self.cost,
            path: self.path,
        }
    }
}
