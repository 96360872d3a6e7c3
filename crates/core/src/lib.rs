//! Honey Core - Shared types library.
//!
//! This crate provides the domain types shared by every Honey component:
//! - `cart` - Client-side shopping cart store
//! - `catalog` - HTTP client for the product catalog and auth API
//! - `cli` - Command-line storefront
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no storage,
//! no HTTP clients. Products are value snapshots handed out by the catalog;
//! nothing here mutates them.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, products, users, emails, and price formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
