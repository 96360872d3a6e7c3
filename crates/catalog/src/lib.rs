//! Honey Catalog - client for the catalog and auth API.
//!
//! The storefront consumes four calls from the backend:
//!
//! - [`CatalogClient::get_products`] - product listing, optionally by category
//! - [`CatalogClient::get_product`] - a single product
//! - [`CatalogClient::get_current_user`] - the signed-in user, if any
//! - [`CatalogClient::logout`] - end the session
//!
//! Products returned here are the snapshots the cart copies into its lines.
//! Nothing in this crate touches the cart.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod cache;
pub mod client;
pub mod config;
pub mod error;

pub use client::CatalogClient;
pub use config::{CatalogConfig, ConfigError, SESSION_COOKIE_NAME};
pub use error::CatalogError;
