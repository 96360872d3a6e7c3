//! Integration tests for the Honey storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p honey-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart snapshots across store instances and backends
//! - `cart_notifications` - Change notifications seen by rendering surfaces
//! - `catalog_to_cart` - Products fetched from the catalog API flowing into the cart
//!
//! This library only holds shared fixtures.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{DateTime, Utc};
use honey_core::{Product, ProductId};
use rust_decimal::Decimal;

/// Fixed creation time so snapshots compare equal across runs.
#[must_use]
pub fn created_at() -> DateTime<Utc> {
    DateTime::from_timestamp(1_714_555_800, 0).unwrap_or_default()
}

/// A product priced at `price_cents` with `stock` units available.
#[must_use]
pub fn product(id: i32, price_cents: i64, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Honey #{id}"),
        description: Some("Small-batch raw honey".to_string()),
        price: Decimal::new(price_cents, 2),
        stock,
        image_url: Some(format!("https://cdn.honey.test/{id}.jpg")),
        category: Some("raw".to_string()),
        created_at: created_at(),
    }
}

/// The catalog API's JSON for [`product`].
#[must_use]
pub fn product_json(id: i32, price_cents: i64, stock: u32) -> serde_json::Value {
    serde_json::to_value(product(id, price_cents, stock)).unwrap_or_default()
}
