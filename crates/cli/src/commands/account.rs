//! Account commands.

use honey_catalog::CatalogClient;
use tracing::{info, warn};

use crate::error::CliError;

/// Report the signed-in user.
#[allow(clippy::print_stdout)]
pub async fn whoami(catalog: &CatalogClient) -> Result<(), CliError> {
    let Some(user) = catalog.get_current_user().await else {
        if let Ok(url) = catalog.login_url() {
            info!("Sign in at {url}");
        }
        return Err(CliError::NotSignedIn);
    };

    println!("Signed in as {} <{}>", user.display_name(), user.email);
    if !user.is_active {
        warn!("Account is inactive");
    }
    Ok(())
}

/// End the current session.
pub async fn logout(catalog: &CatalogClient) -> Result<(), CliError> {
    catalog.logout().await?;
    info!("Signed out");
    Ok(())
}
