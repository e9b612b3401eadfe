//! AgriMart CLI - drive the storefront catalog and cart from a terminal.
//!
//! Commands:
//! - `agrimart browse` - Filter, sort and page through the catalog
//! - `agrimart facets` - Show category counts and the price span
//! - `agrimart cart` - Apply cart operations and print totals
//! - `agrimart config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, CartArgs, ConfigArgs, FacetsArgs};

/// AgriMart CLI - browse the farm marketplace catalog and build a cart
#[derive(Parser)]
#[command(name = "agrimart")]
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
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, sort and page through the catalog
    Browse(BrowseArgs),

    /// Show category counts and the catalog price span
    Facets(FacetsArgs),

    /// Apply add/increment/decrement operations and print cart totals
    Cart(CartArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    agrimart_observability::init(&ctx.config.logging.verbose(cli.verbose));
    tracing::debug!(config = ?ctx.config_path, "loaded configuration");

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Facets(args) => commands::facets::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
