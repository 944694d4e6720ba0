//! Edge-list graph files
//!
//! A graph file lists undirected edges in insertion order:
//!
//! ```toml
//! [[edges]]
//! source = "islamabad"
//! destination = "lahore"
//! cost = 4
//! ```
//!
//! JSON files use the same shape (`{"edges": [{...}]}`). Costs may be written
//! as integers or strings; both go through the same validation as user input.

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, WayfindError};
use crate::graph::store::Graph;

#[derive(Debug, Deserialize)]
struct GraphFile {
    #[serde(default)]
    edges: Vec<EdgeRow>,
}

#[derive(Debug, Deserialize)]
struct EdgeRow {
    source: String,
    destination: String,
    cost: RawCost,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCost {
    Integer(i64),
    Text(String),
    Other(serde_json::Value),
}

impl RawCost {
    fn as_text(&self) -> String {
        match self {
            RawCost::Integer(value) => value.to_string(),
            RawCost::Text(text) => text.clone(),
            RawCost::Other(value) => value.to_string(),
        }
    }
}

/// Graph file syntax, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFileFormat {
    Toml,
    Json,
}

impl GraphFileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "toml" => Ok(GraphFileFormat::Toml),
            "json" => Ok(GraphFileFormat::Json),
            other => Err(WayfindError::unsupported(
                "graph file format",
                if other.is_empty() { "(none)" } else { other },
                "toml, json",
            )),
        }
    }
}

/// Read a graph file from disk
pub fn load_graph(path: &Path) -> Result<Graph> {
    let format = GraphFileFormat::from_path(path)?;
    if !path.exists() {
        return Err(WayfindError::not_found(
            "graph file",
            path.display().to_string(),
        ));
    }

    let content = fs::read_to_string(path)?;
    let start = Instant::now();
    let graph = parse_graph(&content, format)
        .map_err(|e| WayfindError::invalid_graph_file(path, e))?;
    crate::trace_time!(start, "parse_graph", arcs = graph.edge_count());

    debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        arcs = graph.edge_count(),
        "load_graph"
    );
    Ok(graph)
}

/// Build a graph from file content.
///
/// The returned error message names the 1-based edge row that failed.
pub fn parse_graph(
    content: &str,
    format: GraphFileFormat,
) -> std::result::Result<Graph, String> {
    let file: GraphFile = match format {
        GraphFileFormat::Toml => toml::from_str(content).map_err(|e| e.to_string())?,
        GraphFileFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
    };

    let mut graph = Graph::new();
    for (row, edge) in file.edges.iter().enumerate() {
        graph
            .add_edge_str(&edge.source, &edge.destination, &edge.cost.as_text())
            .map_err(|e| format!("edge {}: {}", row + 1, e))?;
    }
    Ok(graph)
}
