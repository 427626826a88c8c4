//! Storekeep CLI - Manager console and shopping center for a product catalog.
//!
//! Commands:
//! - `storekeep menu` - Interactive numeric menu (default)
//! - `storekeep add` - Add a product
//! - `storekeep delete` - Delete a product
//! - `storekeep list` - List products as a table
//! - `storekeep print` - Print products sorted by ID
//! - `storekeep save` - Save products to file
//! - `storekeep shop` - Fill a cart and see the discounts
//! - `storekeep config` - Manage configuration

mod commands;
mod config;
mod context;
mod display;
mod logging;
mod output;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AddArgs, ConfigArgs, DeleteArgs, ListArgs, SaveArgs, ShopArgs};

/// Storekeep - Manage a product catalog and shop from it
#[derive(Parser)]
#[command(name = "storekeep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu
    Menu,

    /// Add a product to the catalog
    Add(AddArgs),

    /// Delete a product by ID
    Delete(DeleteArgs),

    /// List products
    List(ListArgs),

    /// Print products sorted by ID
    Print,

    /// Save products to file
    Save(SaveArgs),

    /// Shop from the catalog
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::run(&ctx),
        Commands::Add(args) => commands::add::run(args, &ctx),
        Commands::Delete(args) => commands::delete::run(args, &ctx),
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::Print => commands::print::run(&ctx),
        Commands::Save(args) => commands::save::run(args, &ctx),
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
