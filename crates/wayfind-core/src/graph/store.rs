//! Adjacency-list graph store
//!
//! Edges are always stored as a pair of directed arcs with equal cost, so the
//! graph behaves as an undirected multigraph. Node keys keep the order in
//! which labels were first seen.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::types::{Cost, Edge, NodeId, UndirectedEdge};

/// Parse a user-supplied edge cost as a non-negative base-10 integer
pub fn parse_cost(text: &str) -> Result<Cost> {
    let trimmed = text.trim();
    match trimmed.parse::<Cost>() {
        Ok(cost) => Ok(cost),
        Err(_) => {
            let negative = trimmed
                .strip_prefix('-')
                .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()));
            if negative {
                bail_invalid!("cost", text, "must be a non-negative integer")
            }
            bail_invalid!("cost", text, "not an integer")
        }
    }
}

const DEMO_NODES: [&str; 6] = [
    "ISLAMABAD",
    "LAHORE",
    "KARACHI",
    "MURREE",
    "GUJRANWALA",
    "PESHAWAR",
];

const DEMO_EDGES: [(&str, &str, Cost); 6] = [
    ("LAHORE", "KARACHI", 7),
    ("GUJRANWALA", "PESHAWAR", 5),
    ("LAHORE", "PESHAWAR", 4),
    ("ISLAMABAD", "LAHORE", 4),
    ("ISLAMABAD", "MURREE", 3),
    ("MURREE", "GUJRANWALA", 8),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    id: NodeId,
    edges: Vec<Edge>,
}

/// Weighted undirected graph held as an adjacency list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    slots: Vec<Slot>,
    index: HashMap<NodeId, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// The six-city graph the demo starts with.
    ///
    /// Nodes are created up front and the edges inserted in an order that
    /// yields the demo's adjacency lists, e.g. LAHORE -> KARACHI, PESHAWAR,
    /// ISLAMABAD. Neighbor order drives BFS and DFS, so it is fixed here.
    pub fn demo() -> Self {
        let mut graph = Graph::new();
        for label in DEMO_NODES {
            graph.ensure_node(&NodeId::new(label));
        }
        for (source, destination, cost) in DEMO_EDGES {
            graph.add_edge(source, destination, cost);
        }
        graph
    }

    fn ensure_node(&mut self, id: &NodeId) -> usize {
        if let Some(&slot) = self.index.get(id) {
            return slot;
        }
        let slot = self.slots.len();
        self.slots.push(Slot {
            id: id.clone(),
            edges: Vec::new(),
        });
        self.index.insert(id.clone(), slot);
        slot
    }

    /// Insert an undirected edge as two directed arcs.
    ///
    /// Missing endpoints are created. Repeated calls add parallel edges and a
    /// self-loop stores two arcs on the same node.
    pub fn add_edge(
        &mut self,
        source: impl Into<NodeId>,
        destination: impl Into<NodeId>,
        cost: Cost,
    ) {
        let source = source.into();
        let destination = destination.into();
        let source_slot = self.ensure_node(&source);
        let destination_slot = self.ensure_node(&destination);

        self.slots[source_slot].edges.push(Edge {
            destination: destination.clone(),
            cost,
        });
        self.slots[destination_slot].edges.push(Edge {
            destination: source.clone(),
            cost,
        });

        debug!(source = %source, destination = %destination, cost, "add_edge");
    }

    /// Insert an edge from raw user input.
    ///
    /// Labels are case-normalized and the cost must parse as a non-negative
    /// integer. Nothing is inserted when validation fails.
    pub fn add_edge_str(&mut self, source: &str, destination: &str, cost: &str) -> Result<()> {
        let source_id = NodeId::new(source);
        if source_id.is_empty() {
            bail_invalid!("source", source, "node label is empty")
        }
        let destination_id = NodeId::new(destination);
        if destination_id.is_empty() {
            bail_invalid!("destination", destination, "node label is empty")
        }
        let cost = parse_cost(cost)?;

        self.add_edge(source_id, destination_id, cost);
        Ok(())
    }

    /// Outgoing arcs of `id` in insertion order (empty for unknown nodes)
    pub fn edges(&self, id: &NodeId) -> &[Edge] {
        self.index
            .get(id)
            .map(|&slot| self.slots[slot].edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Node labels in the order they were first inserted
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.slots.iter().map(|slot| &slot.id)
    }

    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of stored directed arcs (twice the number of insertions)
    pub fn edge_count(&self) -> usize {
        self.slots.iter().map(|slot| slot.edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Every undirected edge between distinct nodes once.
    ///
    /// Nodes are walked in insertion order and an arc is reported only when
    /// it leads to a node not yet walked. A node counts as walked before its
    /// own arcs, so self-loops are never listed.
    pub fn undirected_edges(&self) -> Vec<UndirectedEdge> {
        let mut walked: HashSet<&NodeId> = HashSet::new();
        let mut result = Vec::new();

        for slot in &self.slots {
            walked.insert(&slot.id);
            for edge in &slot.edges {
                if walked.contains(&edge.destination) {
                    continue;
                }
                result.push(UndirectedEdge {
                    source: slot.id.clone(),
                    destination: edge.destination.clone(),
                    cost: edge.cost,
                });
            }
        }

        result
    }
}
