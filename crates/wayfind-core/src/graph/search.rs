//! Algorithm selection and dispatch

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::WayfindError;
use crate::graph::algos::{bfs_search, dfs_search, ucs_search_with, UcsFrontier};
use crate::graph::types::{NodeId, SearchResult};
use crate::graph::GraphProvider;

/// Search strategy selectable by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchAlgorithm {
    /// Breadth-first search
    Bfs,
    /// Depth-first search
    Dfs,
    /// Uniform-cost search
    #[default]
    Ucs,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 3] =
        [SearchAlgorithm::Bfs, SearchAlgorithm::Dfs, SearchAlgorithm::Ucs];

    pub fn description(&self) -> &'static str {
        match self {
            SearchAlgorithm::Bfs => "breadth-first search (fewest edges)",
            SearchAlgorithm::Dfs => "depth-first search (first path found)",
            SearchAlgorithm::Ucs => "uniform-cost search (cheapest path first)",
        }
    }
}

impl FromStr for SearchAlgorithm {
    type Err = WayfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(SearchAlgorithm::Bfs),
            "dfs" => Ok(SearchAlgorithm::Dfs),
            "ucs" => Ok(SearchAlgorithm::Ucs),
            other => Err(WayfindError::unsupported("algorithm", other, "bfs, dfs, ucs")),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchAlgorithm::Bfs => write!(f, "bfs"),
            SearchAlgorithm::Dfs => write!(f, "dfs"),
            SearchAlgorithm::Ucs => write!(f, "ucs"),
        }
    }
}

/// Options for a dispatched search
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Frontier kind used by uniform-cost search
    pub ucs_frontier: UcsFrontier,
}

/// Results of one search call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub algorithm: SearchAlgorithm,
    pub start: NodeId,
    pub goal: NodeId,
    /// Zero or one entry for BFS/DFS; every goal arrival for UCS
    pub results: Vec<SearchResult>,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        !self.results.is_empty()
    }

    /// The result a caller should render: the first (cheapest for UCS)
    pub fn best(&self) -> Option<&SearchResult> {
        self.results.first()
    }
}

/// Run `algorithm` from `start` to `goal`, wrapping single results in a list
pub fn search(
    provider: &dyn GraphProvider,
    algorithm: SearchAlgorithm,
    start: &NodeId,
    goal: &NodeId,
    options: SearchOptions,
) -> SearchOutcome {
    let results = match algorithm {
        SearchAlgorithm::Bfs => bfs_search(provider, start, goal).into_iter().collect(),
        SearchAlgorithm::Dfs => dfs_search(provider, start, goal).into_iter().collect(),
        SearchAlgorithm::Ucs => ucs_search_with(provider, start, goal, options.ucs_frontier),
    };

    let outcome = SearchOutcome {
        algorithm,
        start: start.clone(),
        goal: goal.clone(),
        results,
    };
    debug!(
        algorithm = %algorithm,
        found = outcome.found(),
        results = outcome.results.len(),
        "search"
    );
    outcome
}
