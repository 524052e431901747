//! MyStore Storefront engine library.
//!
//! This crate owns the two stateful cores of the storefront:
//!
//! - the **cart engine** ([`cart::CartEngine`]) - in-memory cart state
//!   with write-through persistence to a [`cart::CartStore`]
//! - the **incremental catalog loader** ([`catalog::CatalogLoader`]) -
//!   accumulates paginated product lists fetched from the remote
//!   catalog API via [`catalog::CatalogClient`]
//!
//! Rendering, routing, and form handling live in consumers of this
//! crate (the CLI, or any UI); both cores expose cheap snapshots and
//! the cart additionally notifies subscribed observers after each
//! committed mutation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod state;

pub use cart::{AddToCart, CartEngine, CartStore, FileStore, MemoryStore, StoreError};
pub use catalog::{CatalogClient, CatalogError, CatalogLoader, LoadPhase, PageFetcher};
pub use checkout::{CheckoutError, OrderConfirmation, OrderSummary};
pub use config::{ConfigError, StorefrontConfig};
pub use state::AppState;
