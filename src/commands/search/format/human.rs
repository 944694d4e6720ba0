use wayfind_core::graph::{SearchOutcome, SearchResult};

use super::super::shown_results;

fn print_result(result: &SearchResult) {
    for node in &result.path {
        println!("{}", node);
    }
    println!("Overall Cost: {}", result.cost);
}

/// Output search results in human-readable format
pub fn output_human(outcome: &SearchOutcome, all: bool) {
    let shown = shown_results(outcome, all);
    if shown.is_empty() {
        println!(
            "No path found from {} to {} ({})",
            outcome.start, outcome.goal, outcome.algorithm
        );
        return;
    }

    if shown.len() == 1 {
        print_result(&shown[0]);
        return;
    }

    for (i, result) in shown.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Path {} of {}:", i + 1, shown.len());
        print_result(result);
    }
}
