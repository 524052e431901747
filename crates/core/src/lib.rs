//! MyStore Core - Shared types library.
//!
//! This crate provides common types used across all MyStore components:
//! - `storefront` - Cart engine and catalog loader library
//! - `cli` - Command-line storefront driver
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! HTTP clients, no storage access. This keeps it lightweight and allows
//! it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product IDs, cart lines, catalog pages, and price
//!   normalization

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
