//! Cart lines.

use honey_core::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product and how many units of it are in the cart.
///
/// `product` is the snapshot the line was created with, or the one passed to
/// the most recent add. Quantity is always at least one while the line is in
/// a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Create a line for `quantity` units of `product`.
    #[must_use]
    pub const fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// The product this line is keyed by.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}
