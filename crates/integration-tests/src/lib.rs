//! Integration tests for MyStore.
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart engine round-trips through a real file
//!   store: sessions share state via the persisted blob
//! - `catalog_flow` - Loader lifecycle driven end to end with scripted
//!   page fetchers
//!
//! The suites exercise the public API of `mystore-storefront` only;
//! unit-level behavior lives in each crate's `#[cfg(test)]` modules.

use std::path::PathBuf;

/// A unique scratch directory for one test's file store.
///
/// Tests run in parallel; keying the directory by UUID keeps their
/// stores from colliding.
#[must_use]
pub fn scratch_dir(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("mystore-it-{prefix}-{}", uuid::Uuid::new_v4()))
}
