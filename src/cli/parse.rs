use wayfind_core::format::OutputFormat;
use wayfind_core::graph::{SearchAlgorithm, UcsFrontier};

/// An edge given on the command line; the cost stays raw text so the graph
/// store performs the numeric validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub source: String,
    pub destination: String,
    pub cost: String,
}

/// Parse `SOURCE,DESTINATION,COST`
pub fn parse_edge_spec(s: &str) -> std::result::Result<EdgeSpec, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [source, destination, cost] => Ok(EdgeSpec {
            source: source.to_string(),
            destination: destination.to_string(),
            cost: cost.to_string(),
        }),
        _ => Err(format!(
            "expected SOURCE,DESTINATION,COST but got '{}'",
            s
        )),
    }
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse search algorithm from string
pub fn parse_algorithm(s: &str) -> std::result::Result<SearchAlgorithm, String> {
    s.parse::<SearchAlgorithm>().map_err(|e| e.to_string())
}

/// Parse uniform-cost frontier kind from string
pub fn parse_frontier(s: &str) -> std::result::Result<UcsFrontier, String> {
    s.parse::<UcsFrontier>().map_err(|e| e.to_string())
}
