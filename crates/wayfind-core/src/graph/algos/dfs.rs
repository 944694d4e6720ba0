use tracing::debug;

use crate::graph::algos::shared::{first_arrival_search, LifoFrontier};
use crate::graph::types::{NodeId, SearchResult};
use crate::graph::GraphProvider;

/// Depth-first search from `start` to `goal`.
///
/// Same loop as BFS over a LIFO stack. The path is whatever depth-first
/// order reaches first and is not shortest by any metric.
#[tracing::instrument(skip(provider), fields(start = %start, goal = %goal))]
pub fn dfs_search(
    provider: &dyn GraphProvider,
    start: &NodeId,
    goal: &NodeId,
) -> Option<SearchResult> {
    let result = first_arrival_search(provider, start, goal, LifoFrontier::default());
    debug!(found = result.is_some(), cost = result.as_ref().map(|r| r.cost), "dfs_search");
    result
}
