//! Product records supplied by the catalog.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Stock level below which the storefront shows an "Only N left!" badge.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// A product as returned by the catalog API.
///
/// Products are immutable snapshots: the cart copies whichever version it was
/// handed and never re-fetches it, so price and stock may drift from the
/// catalog until the product is added again.
///
/// The JSON shape matches the catalog API (snake_case fields, numeric price).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price in dollars, written as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Whether at least one unit can be ordered.
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Whether the product is in stock but running low.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock < LOW_STOCK_THRESHOLD
    }

    /// How many more units may be added given `already_in_cart` units.
    ///
    /// This is a presentation-layer rule; the cart store itself accepts any
    /// positive quantity.
    #[must_use]
    pub const fn max_orderable(&self, already_in_cart: u32) -> u32 {
        self.stock.saturating_sub(already_in_cart)
    }
}
