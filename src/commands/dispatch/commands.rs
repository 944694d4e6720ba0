//! Command implementations for all wayfind commands

use crate::cli::{Commands, ConfigCommands};
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::search::SearchParams;
use wayfind_core::error::Result;

use super::macros::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Search {
                start,
                goal,
                algorithm,
                frontier,
                all,
            } => {
                let graph = ctx.build_graph()?;
                let params = SearchParams {
                    start,
                    goal,
                    algorithm: algorithm.unwrap_or(ctx.config.default_algorithm),
                    frontier: frontier.unwrap_or(ctx.config.ucs_frontier),
                    all: *all,
                };
                commands::search::execute(ctx.format(), &graph, &params)
            }
            Commands::Edges => {
                let graph = ctx.build_graph()?;
                commands::edges::execute(ctx.format(), &graph)
            }
            Commands::Nodes => {
                let graph = ctx.build_graph()?;
                commands::nodes::execute(ctx.format(), &graph)
            }
            Commands::Algorithms => commands::algorithms::execute(ctx.format()),
            Commands::Config { command } => match command {
                ConfigCommands::Show => commands::config::show(ctx),
                ConfigCommands::Init { force } => commands::config::init(ctx, *force),
            },
        };

        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}
