//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use wayfind_core::config::Config;
use wayfind_core::error::Result;
use wayfind_core::graph::{load_graph, Graph};

use super::macros::trace_command;

/// Build the graph a command operates on.
///
/// The base is an empty graph (`--empty`), a graph file (`--graph`, else the
/// configured file) or the demo graph; `--edge` arguments are added on top in
/// the order given.
pub fn build_graph(cli: &Cli, config: &Config) -> Result<Graph> {
    let mut graph = if cli.empty {
        Graph::new()
    } else if let Some(path) = cli.graph.as_ref().or(config.graph.as_ref()) {
        load_graph(path)?
    } else {
        Graph::demo()
    };

    for spec in &cli.edge {
        graph.add_edge_str(&spec.source, &spec.destination, &spec.cost)?;
    }

    Ok(graph)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Output format from the command line, else from config
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.format)
    }

    pub fn build_graph(&self) -> Result<Graph> {
        let graph = build_graph(self.cli, &self.config)?;
        trace_command!(self.cli, self.start, "build_graph");
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("wayfind {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Watch breadth-first, depth-first and uniform-cost search find a path.");
        println!();
        println!("Run `wayfind --help` for usage information.");
        Ok(())
    }
}
