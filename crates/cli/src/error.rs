//! CLI error type.

use honey_cart::StorageError;
use honey_catalog::{CatalogError, ConfigError};
use honey_core::ProductId;
use thiserror::Error;

/// Errors that end a CLI command with a non-zero exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalog API call failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Cart directory could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The product cannot be ordered at all.
    #[error("{name} is out of stock")]
    OutOfStock { name: String },

    /// The request exceeds the stock that is left to order.
    #[error("Only {available} more of {name} can be added")]
    InsufficientStock { name: String, available: u32 },

    /// The requested quantity exceeds the known stock of a cart line.
    #[error("Product {id} has only {stock} in stock")]
    QuantityAboveStock { id: ProductId, stock: u32 },

    /// A user session is required but not present.
    #[error("Not signed in")]
    NotSignedIn,
}
