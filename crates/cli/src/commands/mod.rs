//! CLI command implementations.

pub mod account;
pub mod cart;
pub mod catalog;

use honey_catalog::{CatalogClient, CatalogConfig};

use crate::error::CliError;

/// Build a catalog client from the environment.
pub fn catalog_client() -> Result<CatalogClient, CliError> {
    let config = CatalogConfig::from_env()?;
    tracing::debug!(?config, "Loaded catalog configuration");
    Ok(CatalogClient::new(&config))
}
