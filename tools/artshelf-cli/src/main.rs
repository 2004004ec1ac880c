//! artshelf - Command line browser for the art-supply catalog.
//!
//! Commands:
//! - `artshelf browse` - List products, optionally filtered
//! - `artshelf brands` - List the brands in the catalog
//! - `artshelf show` - Show a product with its ratings
//! - `artshelf favorites` - List and edit favorites
//! - `artshelf rate` - Rate a product
//! - `artshelf config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, ConfigArgs, FavoritesArgs, RateArgs, ShowArgs};

/// artshelf - Browse art supplies, keep favorites and rate products
#[derive(Parser)]
#[command(name = "artshelf")]
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
    /// List products in the catalog
    Browse(BrowseArgs),

    /// List the brands available for filtering
    Brands,

    /// Show product details and ratings
    Show(ShowArgs),

    /// Manage favorites
    Favorites(FavoritesArgs),

    /// Rate a product
    Rate(RateArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    init_tracing(&ctx.config.log.level, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Brands => commands::brands::run(&ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Favorites(args) => commands::favorites::run(args, &ctx).await,
        Commands::Rate(args) => commands::rate::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Install the log subscriber. `RUST_LOG` wins over the configured level;
/// `--verbose` raises the configured level to `debug`.
fn init_tracing(level: &str, verbose: bool) {
    let fallback = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
