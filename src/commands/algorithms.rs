//! `wayfind algorithms` command

use crate::cli::OutputFormat;
use crate::output_by_format;
use wayfind_core::error::Result;
use wayfind_core::graph::SearchAlgorithm;

/// Execute the algorithms command
pub fn execute(format: OutputFormat) -> Result<()> {
    output_by_format!(format,
        json => {
            let list: Vec<serde_json::Value> = SearchAlgorithm::ALL
                .iter()
                .map(|a| serde_json::json!({"name": a, "description": a.description()}))
                .collect();
            println!("{}", serde_json::to_string_pretty(&list)?);
        },
        human => {
            for algorithm in SearchAlgorithm::ALL {
                println!("{:<4} {}", algorithm.to_string(), algorithm.description());
            }
        },
        records => {
            println!(
                "H wayfind=1 records=1 mode=algorithms count={}",
                SearchAlgorithm::ALL.len()
            );
            for algorithm in SearchAlgorithm::ALL {
                println!("A {} \"{}\"", algorithm, algorithm.description());
            }
        }
    );

    Ok(())
}
