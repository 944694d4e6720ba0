//! `wayfind nodes` command

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::output_by_format;
use wayfind_core::error::Result;
use wayfind_core::graph::{Graph, NodeId};

#[derive(Debug, Serialize)]
struct NodeRow<'a> {
    id: &'a NodeId,
    degree: usize,
}

fn node_rows(graph: &Graph) -> Vec<NodeRow<'_>> {
    graph
        .nodes()
        .map(|id| NodeRow {
            id,
            degree: graph.edges(id).len(),
        })
        .collect()
}

/// Execute the nodes command
pub fn execute(format: OutputFormat, graph: &Graph) -> Result<()> {
    let rows = node_rows(graph);

    output_by_format!(format,
        json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        },
        human => {
            if rows.is_empty() {
                println!("Graph has no nodes");
            }
            for row in &rows {
                let noun = if row.degree == 1 { "edge" } else { "edges" };
                println!("{} ({} {})", row.id, row.degree, noun);
            }
        },
        records => {
            println!("H wayfind=1 records=1 mode=nodes nodes={}", rows.len());
            for row in &rows {
                println!("N {} degree={}", row.id, row.degree);
            }
        }
    );

    Ok(())
}
