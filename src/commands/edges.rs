//! `wayfind edges` command

use crate::cli::OutputFormat;
use crate::output_by_format;
use wayfind_core::error::Result;
use wayfind_core::graph::Graph;

/// Execute the edges command
pub fn execute(format: OutputFormat, graph: &Graph) -> Result<()> {
    let edges = graph.undirected_edges();

    output_by_format!(format,
        json => {
            println!("{}", serde_json::to_string_pretty(&edges)?);
        },
        human => {
            if edges.is_empty() {
                println!("Graph has no edges");
            }
            for edge in &edges {
                println!("{} -- {} ({})", edge.source, edge.destination, edge.cost);
            }
        },
        records => {
            println!(
                "H wayfind=1 records=1 mode=edges nodes={} edges={}",
                graph.node_count(),
                edges.len()
            );
            for edge in &edges {
                println!("E {} {} {}", edge.source, edge.destination, edge.cost);
            }
        }
    );

    Ok(())
}
