use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::WayfindError;
use crate::graph::algos::shared::{expand_neighbors, Frontier};
use crate::graph::types::{Cost, FrontierEntry, NodeId, SearchResult};
use crate::graph::GraphProvider;

/// How the uniform-cost frontier keeps entries ordered by cumulative cost.
///
/// Both kinds break cost ties by insertion order and yield identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UcsFrontier {
    /// Stable re-sort of a plain list before every dequeue
    #[default]
    Resort,
    /// Binary min-heap keyed by (cost, insertion sequence)
    Heap,
}

impl FromStr for UcsFrontier {
    type Err = WayfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "resort" => Ok(UcsFrontier::Resort),
            "heap" => Ok(UcsFrontier::Heap),
            other => Err(WayfindError::unsupported(
                "ucs frontier",
                other,
                "resort, heap",
            )),
        }
    }
}

impl fmt::Display for UcsFrontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UcsFrontier::Resort => write!(f, "resort"),
            UcsFrontier::Heap => write!(f, "heap"),
        }
    }
}

/// List frontier, stably sorted by cost before each pop
#[derive(Debug, Default)]
pub struct ResortFrontier(Vec<FrontierEntry>);

impl Frontier for ResortFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.0.push(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        if self.0.is_empty() {
            return None;
        }
        self.0.sort_by_key(|entry| entry.cost);
        Some(self.0.remove(0))
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Wrapper for BinaryHeap to use as min-heap (ordered by cost, then sequence)
#[derive(Debug, Clone)]
struct HeapEntry {
    cost: Cost,
    sequence: u64,
    entry: FrontierEntry,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.sequence == other.sequence
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Heap frontier with the same tie order as [`ResortFrontier`]
#[derive(Debug, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_sequence: u64,
}

impl Frontier for HeapFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(HeapEntry {
            cost: entry.cost,
            sequence,
            entry,
        }));
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(heap_entry)| heap_entry.entry)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Uniform-cost search from `start` to `goal` with the default frontier
pub fn ucs_search(
    provider: &dyn GraphProvider,
    start: &NodeId,
    goal: &NodeId,
) -> Vec<SearchResult> {
    ucs_search_with(provider, start, goal, UcsFrontier::default())
}

/// Uniform-cost search from `start` to `goal`.
///
/// The goal is checked before the visited set and is never marked visited or
/// expanded: every time it is dequeued the entry is recorded and the search
/// continues. Results come back in non-decreasing cost order, the first being
/// a minimum-cost path. An empty list means no path.
#[tracing::instrument(skip(provider), fields(start = %start, goal = %goal, frontier = %frontier))]
pub fn ucs_search_with(
    provider: &dyn GraphProvider,
    start: &NodeId,
    goal: &NodeId,
    frontier: UcsFrontier,
) -> Vec<SearchResult> {
    let results = match frontier {
        UcsFrontier::Resort => goal_arrivals(provider, start, goal, ResortFrontier::default()),
        UcsFrontier::Heap => goal_arrivals(provider, start, goal, HeapFrontier::default()),
    };
    debug!(
        arrivals = results.len(),
        best_cost = results.first().map(|r| r.cost),
        "ucs_search"
    );
    results
}

fn goal_arrivals<F: Frontier>(
    provider: &dyn GraphProvider,
    start: &NodeId,
    goal: &NodeId,
    mut frontier: F,
) -> Vec<SearchResult> {
    let mut results = Vec::new();
    if !provider.contains(start) {
        return results;
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    frontier.push(FrontierEntry::seed(start));

    while let Some(current) = frontier.pop() {
        if &current.node == goal {
            trace!(cost = current.cost, "goal_arrival");
            results.push(current.into_result());
            continue;
        }

        if visited.contains(&current.node) {
            continue;
        }
        visited.insert(current.node.clone());

        expand_neighbors(provider, &current, &visited, &mut frontier);
    }

    results
}
