//! CLI argument parsing for wayfind
//!
//! Global flags choose the graph (demo, file, extra edges), the output format
//! and logging; subcommands run searches or list the graph.

pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use parse::EdgeSpec;
use parse::{parse_algorithm, parse_edge_spec, parse_frontier, parse_output_format};
pub use wayfind_core::format::OutputFormat;
use wayfind_core::graph::{SearchAlgorithm, UcsFrontier};

/// Wayfind - watch BFS, DFS and uniform-cost search find a path
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records) [default: from config, else human]
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, trace, or a full directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file to use instead of ~/.config/wayfind/config.toml
    #[arg(long, global = true, env = "WAYFIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Load the graph from a TOML or JSON edge-list file
    #[arg(long, short, global = true)]
    pub graph: Option<PathBuf>,

    /// Start from an empty graph instead of the demo graph
    #[arg(long, global = true, conflicts_with = "graph")]
    pub empty: bool,

    /// Add an undirected edge SOURCE,DESTINATION,COST (repeatable)
    #[arg(long, short, global = true, value_parser = parse_edge_spec, action = clap::ArgAction::Append)]
    pub edge: Vec<EdgeSpec>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for a path between two nodes
    Search {
        /// Start node (case-insensitive)
        start: String,

        /// Goal node (case-insensitive)
        goal: String,

        /// Search algorithm (bfs, dfs, ucs) [default: from config, else ucs]
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<SearchAlgorithm>,

        /// Uniform-cost frontier (resort, heap) [default: from config, else resort]
        #[arg(long, value_parser = parse_frontier)]
        frontier: Option<UcsFrontier>,

        /// Show every goal arrival instead of only the best path
        #[arg(long)]
        all: bool,
    },

    /// List each undirected edge once
    Edges,

    /// List nodes with their number of edges
    Nodes,

    /// List the available search algorithms
    Algorithms,

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
