//! Catalog and auth API client.
//!
//! Plain request/response calls with no retries. Product responses are cached
//! using `moka` for the configured TTL; auth calls are never cached.

use std::sync::Arc;

use honey_core::{Product, ProductId, User};
use moka::future::Cache;
use reqwest::{Method, RequestBuilder, StatusCode, header};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::cache::{CacheKey, CacheValue};
use crate::config::{CatalogConfig, SESSION_COOKIE_NAME};
use crate::error::{CatalogError, Result};

const PRODUCTS_PATH: &str = "api/v1/products/";
const CURRENT_USER_PATH: &str = "api/v1/auth/me";
const LOGOUT_PATH: &str = "api/v1/auth/logout";

/// Longest response body excerpt kept in errors and logs.
const BODY_EXCERPT_CHARS: usize = 200;

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the catalog and auth API.
///
/// Cloning is cheap and clones share the cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
    session_token: Option<SecretString>,
    cache: Cache<CacheKey, CacheValue>,
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("authenticated", &self.inner.session_token.is_some())
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_url.clone(),
                session_token: config.session_token.clone(),
                cache,
            }),
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// List products, optionally restricted to one category.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the request fails or the response is not a
    /// product list.
    #[instrument(skip(self))]
    pub async fn get_products(&self, category: Option<&str>) -> Result<Vec<Product>> {
        let category = category.map(str::trim).filter(|c| !c.is_empty());
        let key = CacheKey::Products {
            category: category.map(str::to_owned),
        };
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&key).await {
            debug!("Product list served from cache");
            return Ok(products);
        }

        let mut url = self.endpoint(PRODUCTS_PATH)?;
        if let Some(category) = category {
            url.query_pairs_mut().append_pair("category", category);
        }

        let products: Vec<Product> = self.fetch(url, None).await?;
        debug!(count = products.len(), "Fetched products");

        self.inner
            .cache
            .insert(key, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the product does not exist, or
    /// another `CatalogError` if the request fails.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product> {
        let key = CacheKey::Product(id);
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&key).await {
            debug!("Product served from cache");
            return Ok(*product);
        }

        let url = self.endpoint(&format!("{PRODUCTS_PATH}{id}"))?;
        let product: Product = self.fetch(url, Some(format!("product {id}"))).await?;

        self.inner
            .cache
            .insert(key, CacheValue::Product(Box::new(product.clone())))
            .await;
        Ok(product)
    }

    /// Drop all cached product responses.
    pub fn invalidate_cache(&self) {
        self.inner.cache.invalidate_all();
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// The signed-in user, or `None` if not signed in.
    ///
    /// Any failure (no session, expired session, unreachable API, unexpected
    /// payload) is reported as `None`.
    #[instrument(skip(self))]
    pub async fn get_current_user(&self) -> Option<User> {
        let url = self.endpoint(CURRENT_USER_PATH).ok()?;
        match self.fetch::<User>(url, None).await {
            Ok(user) => Some(user),
            Err(e) => {
                debug!(error = %e, "No current user");
                None
            }
        }
    }

    /// End the current session.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the request fails.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        let url = self.endpoint(LOGOUT_PATH)?;
        let response = self.request(Method::POST, url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }
        Ok(())
    }

    /// Browser URL of the login page.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidUrl` if the URL cannot be built.
    pub fn login_url(&self) -> Result<Url> {
        self.endpoint("ui/auth/login")
    }

    /// Browser URL of the registration page.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidUrl` if the URL cannot be built.
    pub fn register_url(&self) -> Result<Url> {
        self.endpoint("ui/auth/register")
    }

    /// Browser URL of the logout page.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidUrl` if the URL cannot be built.
    pub fn logout_url(&self) -> Result<Url> {
        self.endpoint("ui/auth/logout")
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.inner.base_url.join(path)?)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self
            .inner
            .client
            .request(method, url)
            .header(header::ACCEPT, "application/json");
        match &self.inner.session_token {
            Some(token) => builder.header(
                header::COOKIE,
                format!("{SESSION_COOKIE_NAME}={}", token.expose_secret()),
            ),
            None => builder,
        }
    }

    /// GET `url` and decode the JSON body.
    ///
    /// A 404 maps to `CatalogError::NotFound(resource)` when `resource` is set.
    async fn fetch<T: DeserializeOwned>(&self, url: Url, resource: Option<String>) -> Result<T> {
        let response = self.request(Method::GET, url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND
            && let Some(resource) = resource
        {
            return Err(CatalogError::NotFound(resource));
        }

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(
                error = %e,
                body = %excerpt(&body),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }
}

fn status_error(status: StatusCode, body: &str) -> CatalogError {
    CatalogError::Status {
        status: status.as_u16(),
        body: excerpt(body),
    }
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}
