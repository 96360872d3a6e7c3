//! Cart commands.
//!
//! Stock limits are enforced here, not in the cart store: the store accepts
//! any positive quantity, the storefront decides what a shopper may request.

use std::path::Path;
use std::sync::Arc;

use honey_cart::{CartStore, CartView, EventBus, FileStore};
use honey_core::{Product, ProductId};
use tracing::{info, warn};

use crate::error::CliError;

/// Open the cart persisted under `data_dir`.
///
/// A subscriber logs the new item count after every change, standing in for
/// the navigation badge.
pub fn open(data_dir: &Path) -> Result<Arc<CartStore>, CliError> {
    let storage = FileStore::open(data_dir)?;
    let cart = Arc::new(CartStore::new(Arc::new(storage), Arc::new(EventBus::new())));

    let badge = Arc::downgrade(&cart);
    cart.subscribe(move || {
        if let Some(cart) = badge.upgrade() {
            tracing::debug!(items = cart.item_count(), "Cart changed");
        }
    });

    Ok(cart)
}

/// Print the cart.
#[allow(clippy::print_stdout)]
pub fn show(cart: &CartStore) {
    for line in render(&CartView::from_store(cart)) {
        println!("{line}");
    }
}

/// Cart page text: summary, one row per line, subtotal.
pub fn render(view: &CartView) -> Vec<String> {
    if view.is_empty() {
        return vec!["Your cart is empty".to_string()];
    }

    let mut lines = vec![view.summary()];
    lines.extend(view.items.iter().map(|item| {
        format!(
            "#{} {} x{} @ {} = {}",
            item.product_id, item.name, item.quantity, item.unit_price, item.line_price
        )
    }));
    lines.push(format!("Subtotal: {}", view.subtotal));
    lines
}

/// Add `quantity` units of `product`, refusing to exceed its stock.
pub fn add(cart: &CartStore, product: &Product, quantity: u32) -> Result<(), CliError> {
    let in_cart = cart.line(product.id).map_or(0, |line| line.quantity);
    check_stock(product, in_cart, quantity)?;

    cart.add_item(product, quantity);
    info!("Added {quantity} x {} to cart", product.name);
    Ok(())
}

/// Set a line's quantity. Zero or less removes the line.
pub fn update(cart: &CartStore, id: ProductId, quantity: i64) -> Result<(), CliError> {
    let Some(line) = cart.line(id) else {
        warn!("Product {id} is not in the cart");
        return Ok(());
    };

    if quantity > i64::from(line.product.stock) {
        return Err(CliError::QuantityAboveStock {
            id,
            stock: line.product.stock,
        });
    }

    cart.update_quantity(id, quantity);
    if quantity <= 0 {
        info!("Removed {} from cart", line.product.name);
    } else {
        info!("{} quantity set to {quantity}", line.product.name);
    }
    Ok(())
}

/// Remove a product from the cart.
pub fn remove(cart: &CartStore, id: ProductId) {
    cart.remove_item(id);
    info!("Removed product {id} from cart");
}

/// Empty the cart.
pub fn clear(cart: &CartStore) {
    cart.clear();
    info!("Cart cleared");
}

/// Check that `requested` more units fit within the product's stock.
pub fn check_stock(product: &Product, in_cart: u32, requested: u32) -> Result<(), CliError> {
    if !product.is_in_stock() {
        return Err(CliError::OutOfStock {
            name: product.name.clone(),
        });
    }

    let available = product.max_orderable(in_cart);
    if requested > available {
        return Err(CliError::InsufficientStock {
            name: product.name.clone(),
            available,
        });
    }
    Ok(())
}
