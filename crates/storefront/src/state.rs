//! Application state shared across consumers.

use std::sync::Arc;

use crate::cart::{CartEngine, FileStore};
use crate::catalog::{CatalogClient, CatalogLoader};
use crate::config::StorefrontConfig;

/// Application state shared across all consumers.
///
/// This struct is cheaply cloneable via `Arc` and hands out the cart
/// engine, the catalog client, and the catalog loader by reference -
/// the single owned state container injected into every view.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    cart: CartEngine,
    catalog: CatalogClient,
    loader: CatalogLoader<CatalogClient>,
}

impl AppState {
    /// Wire up the engines from configuration.
    ///
    /// Opens the persisted cart (the session's one storage read) and
    /// builds an idle catalog loader over the catalog client.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let cart = CartEngine::open(FileStore::new(config.cart_dir.clone()));
        let catalog = CatalogClient::new(&config);
        let loader = CatalogLoader::new(catalog.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                cart,
                catalog,
                loader,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the cart engine.
    #[must_use]
    pub fn cart(&self) -> &CartEngine {
        &self.inner.cart
    }

    /// Get a reference to the catalog API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the catalog loader.
    #[must_use]
    pub fn loader(&self) -> &CatalogLoader<CatalogClient> {
        &self.inner.loader
    }
}
