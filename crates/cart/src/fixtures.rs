//! Product fixtures for unit tests.

use chrono::{TimeZone, Utc};
use honey_core::{Product, ProductId};
use rust_decimal::Decimal;

/// A product priced at `price_cents` with `stock` units available.
pub fn product(id: i32, price_cents: i64, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Honey #{id}"),
        description: Some("Small-batch raw honey".to_string()),
        price: Decimal::new(price_cents, 2),
        stock,
        image_url: None,
        category: Some("raw".to_string()),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
    }
}
