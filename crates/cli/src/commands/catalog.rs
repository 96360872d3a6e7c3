//! Product browsing commands.

use honey_catalog::CatalogClient;
use honey_core::{Product, ProductId, format_price};
use tracing::debug;

use crate::error::CliError;

/// List products, optionally in one category.
#[allow(clippy::print_stdout)]
pub async fn list(catalog: &CatalogClient, category: Option<&str>) -> Result<(), CliError> {
    let products = catalog.get_products(category).await?;
    debug!(count = products.len(), ?category, "Fetched products");

    for line in listing(&products) {
        println!("{line}");
    }
    Ok(())
}

/// Show a single product.
#[allow(clippy::print_stdout)]
pub async fn show(catalog: &CatalogClient, id: ProductId) -> Result<(), CliError> {
    let product = catalog.get_product(id).await?;

    for line in details(&product) {
        println!("{line}");
    }
    Ok(())
}

/// One row per product plus a count footer.
pub fn listing(products: &[Product]) -> Vec<String> {
    if products.is_empty() {
        return vec!["No products found".to_string()];
    }

    let mut lines: Vec<String> = products
        .iter()
        .map(|product| {
            format!(
                "#{} {} {} {}",
                product.id,
                product.name,
                format_price(product.price),
                stock_badge(product)
            )
        })
        .collect();
    lines.push(format!("{} products", products.len()));
    lines
}

/// Product page text: heading, optional category and description, stock.
pub fn details(product: &Product) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", product.name, format_price(product.price))];
    if let Some(category) = &product.category {
        lines.push(format!("Category: {category}"));
    }
    if let Some(description) = &product.description {
        lines.push(description.clone());
    }
    lines.push(stock_badge(product));
    lines
}

/// Stock line shown next to a product.
pub fn stock_badge(product: &Product) -> String {
    if !product.is_in_stock() {
        "Out of Stock".to_string()
    } else if product.is_low_stock() {
        format!("Only {} left!", product.stock)
    } else {
        "In Stock".to_string()
    }
}
