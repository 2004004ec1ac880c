//! CLI command implementations.

pub mod brands;
pub mod browse;
pub mod config;
pub mod favorites;
pub mod rate;
pub mod show;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Case-insensitive text the product name must contain.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Brand to show ("All" for every brand).
    #[arg(short, long)]
    pub brand: Option<String>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the favorites command.
#[derive(Args)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub command: Option<FavoritesCommand>,
}

#[derive(Subcommand)]
pub enum FavoritesCommand {
    /// List favorited products.
    List,
    /// Add a product to favorites.
    Add {
        /// Product ID.
        id: String,
    },
    /// Remove a product from favorites.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Add the product if absent, remove it otherwise.
    Toggle {
        /// Product ID.
        id: String,
    },
}

/// Arguments for the rate command.
#[derive(Args)]
pub struct RateArgs {
    /// Product ID.
    pub id: String,

    /// Stars, 1 to 5.
    #[arg(short, long)]
    pub score: u8,

    /// Comment text.
    #[arg(long)]
    pub comment: String,

    /// Rate as this user instead of the configured one.
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
