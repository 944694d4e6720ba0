use std::collections::{HashSet, VecDeque};

use tracing::trace;

use crate::graph::types::{FrontierEntry, NodeId, SearchResult};
use crate::graph::GraphProvider;

/// Working set of not-yet-processed entries; the pop discipline is what
/// distinguishes one search strategy from another
pub trait Frontier {
    fn push(&mut self, entry: FrontierEntry);
    fn pop(&mut self) -> Option<FrontierEntry>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in first-out queue (breadth-first)
#[derive(Debug, Default)]
pub struct FifoFrontier(VecDeque<FrontierEntry>);

impl Frontier for FifoFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.0.push_back(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Last-in first-out stack (depth-first)
#[derive(Debug, Default)]
pub struct LifoFrontier(Vec<FrontierEntry>);

impl Frontier for LifoFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.0.push(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Push every neighbor of `current` that has not been visited yet.
///
/// The visited check happens here and again after the pop, so a node can sit
/// in the frontier several times before its first visit.
pub fn expand_neighbors<F: Frontier>(
    provider: &dyn GraphProvider,
    current: &FrontierEntry,
    visited: &HashSet<NodeId>,
    frontier: &mut F,
) {
    trace!(node = %current.node, cost = current.cost, "expand");
    for edge in provider.edges(&current.node) {
        if !visited.contains(&edge.destination) {
            frontier.push(current.extend(edge));
        }
    }
}

/// Shared loop for searches that stop at the first visit of the goal.
///
/// Pops an entry, skips it when already visited, marks it visited, returns it
/// if it is the goal and otherwise expands it. An empty frontier means there
/// is no path.
pub fn first_arrival_search<F: Frontier>(
    provider: &dyn GraphProvider,
    start: &NodeId,
    goal: &NodeId,
    mut frontier: F,
) -> Option<SearchResult> {
    if !provider.contains(start) {
        return None;
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    frontier.push(FrontierEntry::seed(start));

    while let Some(current) = frontier.pop() {
        if visited.contains(&current.node) {
            continue;
        }
        visited.insert(current.node.clone());

        if &current.node == goal {
            return Some(current.into_result());
        }

        expand_neighbors(provider, &current, &visited, &mut frontier);
    }

    None
}
