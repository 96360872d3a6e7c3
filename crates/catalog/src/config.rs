//! Catalog client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HONEY_API_URL` - Base URL of the catalog/auth API (default: `http://localhost:8000`)
//! - `HONEY_SESSION_TOKEN` - Value of the `honey_session` auth cookie
//! - `HONEY_CATALOG_CACHE_TTL_SECS` - Product cache lifetime in seconds (default: 300)

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Name of the cookie the auth API reads the session token from.
pub const SESSION_COOKIE_NAME: &str = "honey_session";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog API client configuration.
///
/// Implements `Debug` manually to redact the session token.
#[derive(Clone)]
pub struct CatalogConfig {
    /// Base URL of the API, always ending in `/`
    pub api_url: Url,
    /// Auth session token sent as the `honey_session` cookie
    pub session_token: Option<SecretString>,
    /// How long product responses are cached
    pub cache_ttl: Duration,
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("api_url", &self.api_url.as_str())
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("cache_ttl", &self.cache_ttl)
            .finish()
    }
}

impl CatalogConfig {
    /// Configuration for an API at `api_url` with no session and default caching.
    #[must_use]
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url: with_trailing_slash(api_url),
            session_token: None,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }

    /// Attach an auth session token.
    #[must_use]
    pub fn with_session_token(mut self, token: SecretString) -> Self {
        self.session_token = Some(token);
        self
    }

    /// Override the product cache lifetime.
    #[must_use]
    pub const fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("HONEY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&raw_url)
            .map_err(|e| ConfigError::InvalidEnvVar("HONEY_API_URL".to_string(), e.to_string()))?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar(
                "HONEY_API_URL".to_string(),
                format!("unsupported scheme {:?}", api_url.scheme()),
            ));
        }

        let cache_ttl = match lookup("HONEY_CATALOG_CACHE_TTL_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("HONEY_CATALOG_CACHE_TTL_SECS".to_string(), e.to_string())
            })?,
            None => DEFAULT_CACHE_TTL_SECS,
        };

        let session_token = lookup("HONEY_SESSION_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .map(SecretString::from);

        Ok(Self {
            api_url: with_trailing_slash(api_url),
            session_token,
            cache_ttl: Duration::from_secs(cache_ttl),
        })
    }
}

/// Relative joins replace the last path segment unless it ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
