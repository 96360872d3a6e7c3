//! Honey CLI - browse the catalog and manage a local cart.
//!
//! # Usage
//!
//! ```bash
//! # List products, optionally by category
//! honey products --category raw
//!
//! # Show one product
//! honey product 3
//!
//! # Manage the cart (persisted under $HONEY_DATA_DIR, default .honey/)
//! honey cart add 3 --quantity 2
//! honey cart update 3 5
//! honey cart remove 3
//! honey cart show
//! honey cart clear
//!
//! # Account
//! honey whoami
//! honey logout
//! ```
//!
//! # Environment Variables
//!
//! - `HONEY_API_URL` - Catalog/auth API base URL (default: `http://localhost:8000`)
//! - `HONEY_SESSION_TOKEN` - Auth session cookie value
//! - `HONEY_CATALOG_CACHE_TTL_SECS` - Product cache lifetime
//! - `HONEY_DATA_DIR` - Cart directory (default: `.honey`)
//! - `RUST_LOG` - Log filter

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use honey_core::ProductId;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

use error::CliError;

const DEFAULT_LOG_FILTER: &str = "honey=info,honey_cart=info,honey_catalog=info";

#[derive(Parser)]
#[command(name = "honey")]
#[command(author, version, about = "Honey storefront CLI")]
struct Cli {
    /// Directory the cart is persisted in
    #[arg(long, global = true, env = "HONEY_DATA_DIR", default_value = ".honey")]
    data_dir: PathBuf,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Only list products in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show a single product
    Product {
        /// Product ID
        id: ProductId,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Show the signed-in user
    Whoami,
    /// End the current session
    Logout,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and subtotal
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID
        id: ProductId,

        /// Units to add
        #[arg(
            short,
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        quantity: u32,
    },
    /// Set the quantity of a cart line (0 or less removes it)
    Update {
        /// Product ID
        id: ProductId,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        id: ProductId,
    },
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.json);

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing with `EnvFilter`, defaulting to info for our crates.
fn init_tracing(json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Products { category } => {
            let catalog = commands::catalog_client()?;
            commands::catalog::list(&catalog, category.as_deref()).await?;
        }
        Commands::Product { id } => {
            let catalog = commands::catalog_client()?;
            commands::catalog::show(&catalog, id).await?;
        }
        Commands::Cart { action } => {
            let cart = commands::cart::open(&cli.data_dir)?;
            match action {
                CartAction::Show => commands::cart::show(&cart),
                CartAction::Add { id, quantity } => {
                    let catalog = commands::catalog_client()?;
                    let product = catalog.get_product(id).await?;
                    commands::cart::add(&cart, &product, quantity)?;
                }
                CartAction::Update { id, quantity } => {
                    commands::cart::update(&cart, id, quantity)?;
                }
                CartAction::Remove { id } => commands::cart::remove(&cart, id),
                CartAction::Clear => commands::cart::clear(&cart),
            }
        }
        Commands::Whoami => {
            let catalog = commands::catalog_client()?;
            commands::account::whoami(&catalog).await?;
        }
        Commands::Logout => {
            let catalog = commands::catalog_client()?;
            commands::account::logout(&catalog).await?;
        }
    }
    Ok(())
}
