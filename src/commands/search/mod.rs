//! `wayfind search` command
//!
//! Normalizes the node labels, runs the selected algorithm and renders the
//! best path, or every goal arrival with `--all`.

mod format;

use tracing::debug;

use crate::cli::OutputFormat;
use crate::output_by_format;
use wayfind_core::error::Result;
use wayfind_core::graph::{
    search, Graph, NodeId, SearchAlgorithm, SearchOptions, SearchOutcome, SearchResult,
    UcsFrontier,
};

/// Parameters for the search command
pub struct SearchParams<'a> {
    pub start: &'a str,
    pub goal: &'a str,
    pub algorithm: SearchAlgorithm,
    pub frontier: UcsFrontier,
    pub all: bool,
}

/// Results chosen for display
pub(crate) fn shown_results(outcome: &SearchOutcome, all: bool) -> &[SearchResult] {
    if all {
        &outcome.results
    } else {
        &outcome.results[..outcome.results.len().min(1)]
    }
}

/// Execute the search command
pub fn execute(format: OutputFormat, graph: &Graph, params: &SearchParams<'_>) -> Result<()> {
    let start = NodeId::new(params.start);
    let goal = NodeId::new(params.goal);

    if !graph.contains(&start) {
        debug!(start = %start, "start node is not in the graph");
    }

    let outcome = search(
        graph,
        params.algorithm,
        &start,
        &goal,
        SearchOptions {
            ucs_frontier: params.frontier,
        },
    );

    output_by_format!(format,
        json => { format::json::output_json(&outcome, params.all)? },
        human => { format::human::output_human(&outcome, params.all); },
        records => { format::records::output_records(&outcome, params.all); }
    );

    Ok(())
}
