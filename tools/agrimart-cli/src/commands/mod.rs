//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod config;
pub mod facets;

use clap::{Args, Subcommand};

use cart::CartOp;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category to show, or "all".
    #[arg(short = 'C', long, default_value = "all")]
    pub category: String,

    /// Sort policy (featured, price-low, price-high, rating, discount, newest).
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Lowest price to include.
    #[arg(long)]
    pub min: Option<f64>,

    /// Highest price to include.
    #[arg(long)]
    pub max: Option<f64>,

    /// Number of "load more" presses.
    #[arg(short, long, default_value = "0")]
    pub more: usize,
}

/// Arguments for the facets command.
#[derive(Args)]
pub struct FacetsArgs {
    /// Restrict the price span to one category.
    #[arg(short = 'C', long)]
    pub category: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Operation to apply, in order: add=ID, inc=ID or dec=ID.
    #[arg(short, long = "op", value_name = "OP=ID")]
    pub ops: Vec<CartOp>,

    /// Also list tracked lines with zero quantity.
    #[arg(long)]
    pub all: bool,
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
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
