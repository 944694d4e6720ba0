use wayfind_core::graph::SearchOutcome;

use super::super::shown_results;

/// Output search results in records format
///
/// ```text
/// H wayfind=1 records=1 mode=search algorithm=ucs start=A goal=C found=true results=1
/// R 1 cost=8 hops=2
/// N A
/// N B
/// N C
/// ```
pub fn output_records(outcome: &SearchOutcome, all: bool) {
    let shown = shown_results(outcome, all);
    println!(
        "H wayfind=1 records=1 mode=search algorithm={} start={} goal={} found={} results={}",
        outcome.algorithm,
        outcome.start,
        outcome.goal,
        outcome.found(),
        shown.len()
    );

    for (i, result) in shown.iter().enumerate() {
        println!("R {} cost={} hops={}", i + 1, result.cost, result.hops());
        for node in &result.path {
            println!("N {}", node);
        }
    }
}
