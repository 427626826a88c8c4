//! CLI command implementations.

pub mod add;
pub mod config;
pub mod delete;
pub mod list;
pub mod menu;
pub mod print;
pub mod save;
pub mod shop;

use clap::{Args, Subcommand, ValueEnum};

/// Product category as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Clothing,
    Electronics,
}

/// Arguments for the add command.
///
/// Any field left out is prompted for.
#[derive(Args, Default)]
pub struct AddArgs {
    /// Product category.
    #[arg(short = 't', long = "type", value_enum)]
    pub category: Option<CategoryArg>,

    /// Product ID.
    #[arg(long)]
    pub id: Option<String>,

    /// Product name.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Number of items available.
    #[arg(short, long)]
    pub quantity: Option<i64>,

    /// Unit price.
    #[arg(short, long)]
    pub price: Option<f64>,

    /// Clothing size.
    #[arg(long)]
    pub size: Option<String>,

    /// Clothing color.
    #[arg(long)]
    pub color: Option<String>,

    /// Electronics brand.
    #[arg(long)]
    pub brand: Option<String>,

    /// Electronics warranty period in months.
    #[arg(long)]
    pub warranty: Option<u32>,
}

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// ID of the product to delete.
    pub id: String,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only show one category ("clothing", "electronics" or "all").
    #[arg(long, default_value = "all")]
    pub category: String,
}

/// Arguments for the save command.
#[derive(Args)]
pub struct SaveArgs {
    /// Write to this file instead of the configured catalog file.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Shopper username.
    #[arg(short, long)]
    pub user: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
