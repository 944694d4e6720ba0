//! `wayfind config` commands

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format;
use wayfind_core::config::Config;
use wayfind_core::bail_usage;
use wayfind_core::error::Result;

/// Print the effective configuration
pub fn show(ctx: &CommandContext) -> Result<()> {
    let config = &ctx.config;

    output_by_format!(ctx.format(),
        json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        },
        human => {
            println!("default_algorithm = {}", config.default_algorithm);
            println!("ucs_frontier = {}", config.ucs_frontier);
            println!("format = {}", config.format);
            match &config.graph {
                Some(path) => println!("graph = {}", path.display()),
                None => println!("graph = (demo graph)"),
            }
        },
        records => {
            println!(
                "H wayfind=1 records=1 mode=config default_algorithm={} ucs_frontier={} format={}",
                config.default_algorithm, config.ucs_frontier, config.format
            );
        }
    );

    Ok(())
}

/// Write a default config file to `--config` or the default location
pub fn init(ctx: &CommandContext, force: bool) -> Result<()> {
    let path = match &ctx.cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };

    if path.exists() && !force {
        bail_usage!(format!(
            "config file already exists: {} (use --force to overwrite)",
            path.display()
        ));
    }

    Config::default().save(&path)?;

    if !ctx.cli.quiet {
        println!("{}", path.display());
    }
    Ok(())
}
