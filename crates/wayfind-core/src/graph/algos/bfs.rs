use tracing::debug;

use crate::graph::algos::shared::{first_arrival_search, FifoFrontier};
use crate::graph::types::{NodeId, SearchResult};
use crate::graph::GraphProvider;

/// Breadth-first search from `start` to `goal`.
///
/// Returns the first path that reaches the goal in FIFO order: the fewest
/// edges, which is the cheapest path only when all weights are equal.
/// Returns `None` when the goal is unreachable or `start` is not in the graph.
#[tracing::instrument(skip(provider), fields(start = %start, goal = %goal))]
pub fn bfs_search(
    provider: &dyn GraphProvider,
    start: &NodeId,
    goal: &NodeId,
) -> Option<SearchResult> {
    let result = first_arrival_search(provider, start, goal, FifoFrontier::default());
    debug!(found = result.is_some(), cost = result.as_ref().map(|r| r.cost), "bfs_search");
    result
}
