//! Catalog browsing commands.
//!
//! `browse` runs the loader's initial load and any requested number of
//! extra pages, then prints the accumulated list. `product` fetches one
//! detail document.

use mystore_core::{ProductId, normalize};
use mystore_storefront::AppState;
use mystore_storefront::catalog::LoadPhase;
use thiserror::Error;

/// Errors reported by the browse commands.
#[derive(Debug, Error)]
pub enum BrowseError {
    /// The initial catalog load failed.
    #[error("catalog is unavailable (initial load failed)")]
    CatalogUnavailable,
    /// Detail fetch failed.
    #[error("product lookup failed: {0}")]
    Lookup(#[from] mystore_storefront::CatalogError),
}

/// Load the catalog and print the accumulated product list.
pub async fn run(state: &AppState, extra_pages: u32) -> Result<(), BrowseError> {
    let loader = state.loader();

    loader.load_initial().await;
    if loader.phase() == LoadPhase::Error {
        return Err(BrowseError::CatalogUnavailable);
    }

    for _ in 0..extra_pages {
        if !loader.has_more() {
            break;
        }
        loader.load_more().await;
    }

    let snapshot = loader.snapshot();

    #[allow(clippy::print_stdout)]
    {
        for product in &snapshot.products {
            let price = normalize(product.price.as_ref());
            println!("{:<24} ${:>10.2}  {}", product.product_id, price, product.image_url);
        }
        if snapshot.has_more {
            println!("(more products available - rerun with a larger --pages)");
        } else {
            println!("(end of catalog)");
        }
    }

    Ok(())
}

/// Print the detail document for one product.
pub async fn product(state: &AppState, id: &str) -> Result<(), BrowseError> {
    let detail = state
        .catalog()
        .product_detail(&ProductId::new(id))
        .await?;

    #[allow(clippy::print_stdout)]
    {
        println!("Product: {id}");
        println!("  Price: ${:.2}", normalize(detail.price.as_ref()));
        if let Some(description) = &detail.short_description {
            println!("  Description: {description}");
        }
        if let Some(screen) = &detail.screen_size {
            println!("  Screen: {screen}");
        }
        if let Some(weight) = &detail.weight {
            println!("  Weight: {weight}");
        }
        if let Some(battery) = &detail.battery_spec {
            println!("  Battery: {battery}");
        }
        for url in &detail.image_urls {
            println!("  Image: {url}");
        }
    }

    Ok(())
}
