//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[storage]");
    ctx.output.kv(
        "catalog_path",
        &ctx.catalog_path().display().to_string(),
    );
    ctx.output.kv(
        "usernames_path",
        &ctx.usernames_path().display().to_string(),
    );

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv(
        "resync_on_print",
        &ctx.config.catalog.resync_on_print.to_string(),
    );
    ctx.output.kv(
        "low_stock_threshold",
        &ctx.config.catalog.low_stock_threshold.to_string(),
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("storekeep.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}
