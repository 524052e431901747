//! Core types for MyStore.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod catalog;
pub mod id;
pub mod price;

pub use cart::CartLine;
pub use catalog::{CatalogPage, ProductDetail, ProductSummary};
pub use id::ProductId;
pub use price::{RawPrice, normalize};
