//! Kawane CLI - Session-store migrations and demo seeding.
//!
//! # Usage
//!
//! ```bash
//! # Create the storefront session schema
//! kawane-cli migrate storefront
//!
//! # Create the admin session schema
//! kawane-cli migrate admin
//!
//! # Both
//! kawane-cli migrate all
//!
//! # Seed a demo catalog through the admin API
//! kawane-cli seed --products 24
//! ```
//!
//! # Commands
//!
//! - `migrate` - Create tower-sessions schemas in the service databases
//! - `seed` - Seed demo catalog data via the Kawane admin API

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "kawane-cli")]
#[command(author, version, about = "Kawane Studio CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create session-store schemas
    Migrate {
        #[command(subcommand)]
        target: MigrateTarget,
    },
    /// Seed demo catalog data through the admin API
    Seed {
        /// How many demo products to create
        #[arg(long, default_value_t = 12)]
        products: u32,

        /// Also create demo banners and lookbook photos
        #[arg(long)]
        content: bool,
    },
}

#[derive(Subcommand)]
enum MigrateTarget {
    /// Storefront session database
    Storefront,
    /// Admin session database
    Admin,
    /// Both databases
    All,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate { target } => match target {
            MigrateTarget::Storefront => commands::migrate::storefront().await?,
            MigrateTarget::Admin => commands::migrate::admin().await?,
            MigrateTarget::All => {
                commands::migrate::storefront().await?;
                commands::migrate::admin().await?;
            }
        },
        Commands::Seed { products, content } => {
            commands::seed::catalog(products, content).await?;
        }
    }
    Ok(())
}
