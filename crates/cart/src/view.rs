//! Render-ready cart data.
//!
//! Presentation surfaces subscribe to cart changes and rebuild a [`CartView`]
//! from the store each time; they never mutate the cart through it.

use honey_core::{ProductId, format_price};
use serde::Serialize;

use crate::line::CartLine;
use crate::store::CartStore;

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub quantity: u32,
    pub unit_price: String,
    pub line_price: String,
    /// Whether the "+" control is enabled (quantity below known stock).
    pub can_increment: bool,
}

/// Cart display data for the cart page and navigation badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: format_price(rust_decimal::Decimal::ZERO),
            item_count: 0,
        }
    }

    /// Snapshot the store's current state.
    #[must_use]
    pub fn from_store(store: &CartStore) -> Self {
        Self::from_lines(&store.read())
    }

    /// Build a view from cart lines.
    #[must_use]
    pub fn from_lines(lines: &[CartLine]) -> Self {
        Self {
            items: lines.iter().map(CartItemView::from).collect(),
            subtotal: format_price(lines.iter().map(CartLine::line_total).sum()),
            item_count: lines.iter().map(|line| u64::from(line.quantity)).sum(),
        }
    }

    /// Whether there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Heading text, e.g. "3 items ready for checkout".
    ///
    /// Counts distinct products, not units.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.items.len() {
            1 => "1 item ready for checkout".to_string(),
            n => format!("{n} items ready for checkout"),
        }
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product.id,
            name: line.product.name.clone(),
            category: line.product.category.clone(),
            image_url: line.product.image_url.clone(),
            quantity: line.quantity,
            unit_price: format_price(line.product.price),
            line_price: format_price(line.line_total()),
            can_increment: line.quantity < line.product.stock,
        }
    }
}
