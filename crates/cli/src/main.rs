//! MyStore CLI - terminal storefront over the engine library.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog (initial load, then N extra pages)
//! mystore browse --pages 2
//!
//! # Inspect one product
//! mystore product laptop-17
//!
//! # Cart operations (the cart persists between invocations)
//! mystore cart show
//! mystore cart add laptop-17 --price '$1,299.99' --image https://cdn/p.jpg
//! mystore cart set-quantity laptop-17 3
//! mystore cart remove laptop-17
//! mystore cart clear
//!
//! # Place a simulated order
//! mystore checkout --confirm
//! ```
//!
//! # Environment Variables
//!
//! - `MYSTORE_CATALOG_URL` - Base URL of the remote catalog API
//! - `MYSTORE_CART_DIR` - Directory holding the persisted cart

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use mystore_storefront::{AppState, StorefrontConfig};

mod commands;

#[derive(Parser)]
#[command(name = "mystore")]
#[command(author, version, about = "MyStore terminal storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the paginated product catalog
    Browse {
        /// Extra pages to load after the initial load
        #[arg(short, long, default_value_t = 0)]
        pages: u32,
    },
    /// Show detail for one product
    Product {
        /// Catalog product ID
        id: String,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Summarize the order and simulate payment
    Checkout {
        /// Actually place the order (otherwise only the summary is shown)
        #[arg(long)]
        confirm: bool,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart contents and total
    Show,
    /// Add a product to the cart (or bump its quantity)
    Add {
        /// Catalog product ID
        id: String,

        /// Price as displayed, e.g. '$1,299.99'
        #[arg(short, long)]
        price: Option<String>,

        /// Product image URL
        #[arg(short, long, default_value = "")]
        image: String,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Remove a product from the cart
    Remove {
        /// Catalog product ID
        id: String,
    },
    /// Set a product's quantity (0 or less removes it)
    SetQuantity {
        /// Catalog product ID
        id: String,

        /// New quantity
        quantity: String,
    },
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing; default to warnings so command output stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mystore=warn".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::new(config);

    match cli.command {
        Commands::Browse { pages } => commands::browse::run(&state, pages).await?,
        Commands::Product { id } => commands::browse::product(&state, &id).await?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&state),
            CartAction::Add {
                id,
                price,
                image,
                name,
            } => commands::cart::add(&state, &id, price, image, name),
            CartAction::Remove { id } => commands::cart::remove(&state, &id),
            CartAction::SetQuantity { id, quantity } => {
                commands::cart::set_quantity(&state, &id, &quantity);
            }
            CartAction::Clear => commands::cart::clear(&state),
        },
        Commands::Checkout { confirm } => commands::checkout::run(&state, confirm).await?,
    }
    Ok(())
}
