//! Command dispatch logic for wayfind

use std::time::Instant;

use crate::cli::{Cli, Commands, ConfigCommands};
use wayfind_core::config::Config;
use wayfind_core::error::Result;

mod command;
mod commands;
mod macros;

pub use command::CommandContext;
use command::{Command, NoCommand};
use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // `config init` never reads an existing config file
    let config = match &cli.command {
        Some(Commands::Config {
            command: ConfigCommands::Init { .. },
        }) => Config::default(),
        _ => Config::resolve(cli.config.as_deref())?,
    };

    trace_command!(cli, start, "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
