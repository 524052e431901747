//! Remote catalog API client and incremental page loader.
//!
//! # Architecture
//!
//! - [`CatalogClient`] speaks the catalog's query-string protocol over
//!   `reqwest` and caches product-detail responses via `moka`
//!   (5-minute TTL)
//! - [`CatalogLoader`] drives page fetches through the [`PageFetcher`]
//!   seam and accumulates results across "load more" triggers
//!
//! The loader never surfaces transport failures to the UI: a failed
//! fetch parks it in an error phase from which the next "load more"
//! retries the same page token.

mod client;
mod loader;

pub use client::CatalogClient;
pub use loader::{CatalogLoader, CatalogSnapshot, LoadPhase};

use std::future::Future;

use thiserror::Error;

use mystore_core::CatalogPage;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connection, transport).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog answered with a non-success status.
    #[error("catalog returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Seam between the loader and the network.
///
/// Production uses [`CatalogClient`]; tests drive the loader with
/// scripted fetchers.
pub trait PageFetcher: Send + Sync {
    /// Fetch one page of the product list by batch number (1-based).
    fn fetch_page(
        &self,
        batch: u32,
    ) -> impl Future<Output = Result<CatalogPage, CatalogError>> + Send;
}
