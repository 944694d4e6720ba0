use wayfind_core::error::Result;
use wayfind_core::graph::SearchOutcome;

use super::super::shown_results;

/// Output search results in JSON format
pub fn output_json(outcome: &SearchOutcome, all: bool) -> Result<()> {
    let results: Vec<serde_json::Value> = shown_results(outcome, all)
        .iter()
        .map(|result| {
            serde_json::json!({
                "cost": result.cost,
                "hops": result.hops(),
                "path": result.path,
            })
        })
        .collect();

    let output = serde_json::json!({
        "algorithm": outcome.algorithm,
        "start": outcome.start,
        "goal": outcome.goal,
        "found": outcome.found(),
        "arrivals": outcome.results.len(),
        "results": results,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
