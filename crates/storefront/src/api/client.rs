//! HTTP client for the storefront-scoped Kawane backend endpoints.
//!
//! Catalog reads are cached in `moka` (5-minute TTL); cart, checkout, order,
//! and auth calls always hit the backend.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use kawane_core::{CartItemId, ProductId};

use crate::config::KawaneApiConfig;

use super::types::{
    AuthSession, Banner, Cart, Category, CheckoutRequest, CheckoutResponse, Deal, LookbookPhoto,
    Order, OrderSummary, Product, ProductPage, ProductSort, RegisterRequest, TrackedOrder, User,
};
use super::{ApiError, parse_error_message};

/// Header carrying the guest cart token.
const CART_TOKEN_HEADER: &str = "x-cart-token";

/// Header carrying the per-binary service token.
const SERVICE_TOKEN_HEADER: &str = "x-kawane-service-token";

/// Catalog cache TTL.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Cached catalog value types.
#[derive(Debug, Clone)]
enum CacheValue {
    Product(Box<Product>),
    Products(ProductPage),
    Categories(Vec<Category>),
    Deals(Vec<Deal>),
    Banners(Vec<Banner>),
    Lookbook(Vec<LookbookPhoto>),
}

/// Query parameters for product listings.
#[derive(Debug, Default, Clone)]
pub struct ProductListParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub category: Option<String>,
    pub sort: ProductSort,
    pub query: Option<String>,
}

impl ProductListParams {
    fn cache_key(&self) -> String {
        format!(
            "products:{}:{}:{}:{}",
            self.page.unwrap_or(1),
            self.per_page.unwrap_or(12),
            self.category.as_deref().unwrap_or(""),
            self.sort.as_str()
        )
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("perPage", per_page.to_string()));
        }
        if let Some(category) = &self.category {
            query.push(("category", category.clone()));
        }
        query.push(("sort", self.sort.as_str().to_string()));
        if let Some(q) = &self.query {
            query.push(("q", q.clone()));
        }
        query
    }
}

/// Client for storefront-scoped Kawane backend endpoints.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct StorefrontApi {
    inner: Arc<StorefrontApiInner>,
}

struct StorefrontApiInner {
    client: reqwest::Client,
    base_url: String,
    service_token: String,
    cache: Cache<String, CacheValue>,
}

impl StorefrontApi {
    /// Create a new storefront API client.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized (startup-only path).
    #[must_use]
    pub fn new(config: &KawaneApiConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(CACHE_TTL)
            .build();

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("reqwest client with static configuration builds");

        Self {
            inner: Arc::new(StorefrontApiInner {
                client,
                base_url: config.base_url.clone(),
                service_token: config.storefront_token.expose_secret().to_string(),
                cache,
            }),
        }
    }

    // =========================================================================
    // Transport
    // =========================================================================

    /// Execute a request and parse the JSON response.
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        bearer: Option<&str>,
        cart_token: Option<&str>,
        body: Option<&(impl Serialize + Sync)>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);

        let mut request = self
            .inner
            .client
            .request(method, &url)
            .header(SERVICE_TOKEN_HEADER, &self.inner.service_token);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if let Some(token) = cart_token {
            request = request.header(CART_TOKEN_HEADER, token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(ApiError::RateLimited(retry_after));
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized);
        }

        // Read the body as text first for better error diagnostics
        let response_text = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            let message =
                parse_error_message(&response_text).unwrap_or_else(|| path.to_string());
            return Err(ApiError::NotFound(message));
        }

        if !status.is_success() {
            let message = parse_error_message(&response_text).unwrap_or_else(|| {
                response_text.chars().take(200).collect::<String>()
            });
            tracing::error!(
                status = %status,
                path = %path,
                message = %message,
                "Kawane API returned non-success status"
            );
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        match serde_json::from_str(&response_text) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    path = %path,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Kawane API response"
                );
                Err(ApiError::Parse(e))
            }
        }
    }

    /// Execute a request where the backend returns no meaningful body.
    async fn execute_no_content(
        &self,
        method: Method,
        path: &str,
        bearer: Option<&str>,
        cart_token: Option<&str>,
    ) -> Result<(), ApiError> {
        let url = format!("{}{path}", self.inner.base_url);

        let mut request = self
            .inner
            .client
            .request(method, &url)
            .header(SERVICE_TOKEN_HEADER, &self.inner.service_token);

        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if let Some(token) = cart_token {
            request = request.header(CART_TOKEN_HEADER, token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = parse_error_message(&body)
                .unwrap_or_else(|| body.chars().take(200).collect::<String>());
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }

    const NO_BODY: Option<&'static ()> = None;

    // =========================================================================
    // Catalog (cached)
    // =========================================================================

    /// Get a paginated product listing.
    ///
    /// Listings without a free-text query are cached for 5 minutes.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_products(&self, params: &ProductListParams) -> Result<ProductPage, ApiError> {
        let cacheable = params.query.is_none();
        let cache_key = params.cache_key();

        if cacheable
            && let Some(CacheValue::Products(page)) = self.inner.cache.get(&cache_key).await
        {
            debug!("Cache hit for products");
            return Ok(page);
        }

        let page: ProductPage = self
            .execute(
                Method::GET,
                "/products",
                &params.to_query(),
                None,
                None,
                Self::NO_BODY,
            )
            .await?;

        if cacheable {
            self.inner
                .cache
                .insert(cache_key, CacheValue::Products(page.clone()))
                .await;
        }

        Ok(page)
    }

    /// Get a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn get_product(&self, product_id: &ProductId) -> Result<Product, ApiError> {
        let cache_key = format!("product:{product_id}");

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let product: Product = self
            .execute(
                Method::GET,
                &format!("/products/{product_id}"),
                &[],
                None,
                None,
                Self::NO_BODY,
            )
            .await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    /// Get all product categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        let cache_key = "categories".to_string();

        if let Some(CacheValue::Categories(categories)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let categories: Vec<Category> = self
            .execute(Method::GET, "/categories", &[], None, None, Self::NO_BODY)
            .await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Categories(categories.clone()))
            .await;

        Ok(categories)
    }

    /// Get the currently active deals.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_active_deals(&self) -> Result<Vec<Deal>, ApiError> {
        let cache_key = "deals:active".to_string();

        if let Some(CacheValue::Deals(deals)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for deals");
            return Ok(deals);
        }

        let deals: Vec<Deal> = self
            .execute(Method::GET, "/deals/active", &[], None, None, Self::NO_BODY)
            .await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Deals(deals.clone()))
            .await;

        Ok(deals)
    }

    /// Get active homepage banners, ordered by position.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_banners(&self) -> Result<Vec<Banner>, ApiError> {
        let cache_key = "banners".to_string();

        if let Some(CacheValue::Banners(banners)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for banners");
            return Ok(banners);
        }

        let banners: Vec<Banner> = self
            .execute(Method::GET, "/banners", &[], None, None, Self::NO_BODY)
            .await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Banners(banners.clone()))
            .await;

        Ok(banners)
    }

    /// Get the lookbook photo set, in curated order.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_lookbook(&self) -> Result<Vec<LookbookPhoto>, ApiError> {
        let cache_key = "lookbook".to_string();

        if let Some(CacheValue::Lookbook(photos)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for lookbook");
            return Ok(photos);
        }

        let photos: Vec<LookbookPhoto> = self
            .execute(Method::GET, "/lookbook", &[], None, None, Self::NO_BODY)
            .await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Lookbook(photos.clone()))
            .await;

        Ok(photos)
    }

    /// Search products by free text (not cached).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn search_products(&self, query: &str, limit: u32) -> Result<Vec<Product>, ApiError> {
        self.execute(
            Method::GET,
            "/search/products",
            &[("q", query.to_string()), ("limit", limit.to_string())],
            None,
            None,
            Self::NO_BODY,
        )
        .await
    }

    /// Invalidate all cached catalog data.
    pub async fn invalidate_catalog(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }

    // =========================================================================
    // Cart (never cached - mutable state)
    // =========================================================================

    /// Fetch the current cart for a cart token.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart is not found or the request fails.
    #[instrument(skip(self, cart_token))]
    pub async fn get_cart(&self, cart_token: &str) -> Result<Cart, ApiError> {
        self.execute(
            Method::GET,
            "/cart",
            &[],
            None,
            Some(cart_token),
            Self::NO_BODY,
        )
        .await
    }

    /// Add a product to the cart.
    ///
    /// With no `cart_token`, the backend creates a new cart and returns it;
    /// the caller stores the returned token in the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is unavailable or the request fails.
    #[instrument(skip(self, cart_token), fields(product_id = %product_id, quantity))]
    pub async fn add_to_cart(
        &self,
        cart_token: Option<&str>,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Cart, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct AddItem<'a> {
            product_id: &'a ProductId,
            quantity: u32,
        }

        self.execute(
            Method::POST,
            "/cart/items",
            &[],
            None,
            cart_token,
            Some(&AddItem {
                product_id,
                quantity,
            }),
        )
        .await
    }

    /// Update a cart line's quantity.
    ///
    /// Callers must not send non-positive quantities; use
    /// [`Self::remove_cart_item`] instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not found or the request fails.
    #[instrument(skip(self, cart_token), fields(item_id = %item_id, quantity))]
    pub async fn update_cart_item(
        &self,
        cart_token: &str,
        item_id: &CartItemId,
        quantity: u32,
    ) -> Result<Cart, ApiError> {
        #[derive(Serialize)]
        struct UpdateItem {
            quantity: u32,
        }

        self.execute(
            Method::PATCH,
            &format!("/cart/items/{item_id}"),
            &[],
            None,
            Some(cart_token),
            Some(&UpdateItem { quantity }),
        )
        .await
    }

    /// Remove a line from the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, cart_token), fields(item_id = %item_id))]
    pub async fn remove_cart_item(
        &self,
        cart_token: &str,
        item_id: &CartItemId,
    ) -> Result<Cart, ApiError> {
        self.execute(
            Method::DELETE,
            &format!("/cart/items/{item_id}"),
            &[],
            None,
            Some(cart_token),
            Self::NO_BODY,
        )
        .await
    }

    /// Remove every line from the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, cart_token))]
    pub async fn clear_cart(&self, cart_token: &str) -> Result<(), ApiError> {
        self.execute_no_content(Method::DELETE, "/cart", None, Some(cart_token))
            .await
    }

    // =========================================================================
    // Checkout & Orders
    // =========================================================================

    /// Submit a checkout for the given cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the checkout (empty cart,
    /// stock conflict) or the request fails.
    #[instrument(skip(self, cart_token, request))]
    pub async fn checkout(
        &self,
        cart_token: &str,
        bearer: Option<&str>,
        request: &CheckoutRequest,
    ) -> Result<CheckoutResponse, ApiError> {
        self.execute(
            Method::POST,
            "/checkout",
            &[],
            bearer,
            Some(cart_token),
            Some(request),
        )
        .await
    }

    /// List the authenticated user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid or the request fails.
    #[instrument(skip(self, bearer))]
    pub async fn my_orders(&self, bearer: &str) -> Result<Vec<OrderSummary>, ApiError> {
        self.execute(
            Method::GET,
            "/orders",
            &[],
            Some(bearer),
            None,
            Self::NO_BODY,
        )
        .await
    }

    /// Fetch one of the authenticated user's orders by order number.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is not found or the request fails.
    #[instrument(skip(self, bearer), fields(order_number = %order_number))]
    pub async fn my_order(&self, bearer: &str, order_number: &str) -> Result<Order, ApiError> {
        self.execute(
            Method::GET,
            &format!("/orders/{order_number}"),
            &[],
            Some(bearer),
            None,
            Self::NO_BODY,
        )
        .await
    }

    /// Cancel one of the authenticated user's orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the order cannot be cancelled or the request fails.
    #[instrument(skip(self, bearer), fields(order_number = %order_number))]
    pub async fn cancel_order(&self, bearer: &str, order_number: &str) -> Result<Order, ApiError> {
        self.execute(
            Method::POST,
            &format!("/orders/{order_number}/cancel"),
            &[],
            Some(bearer),
            None,
            Self::NO_BODY,
        )
        .await
    }

    /// Track an order publicly by order number + email.
    ///
    /// # Errors
    ///
    /// Returns an error if no matching order exists or the request fails.
    #[instrument(skip(self, email), fields(order_number = %order_number))]
    pub async fn track_order(
        &self,
        order_number: &str,
        email: &str,
    ) -> Result<TrackedOrder, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct TrackRequest<'a> {
            order_number: &'a str,
            email: &'a str,
        }

        self.execute(
            Method::POST,
            "/orders/track",
            &[],
            None,
            None,
            Some(&TrackRequest {
                order_number,
                email,
            }),
        )
        .await
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Register a new customer account.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is taken or the request fails.
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthSession, ApiError> {
        self.execute(Method::POST, "/auth/register", &[], None, None, Some(request))
            .await
    }

    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are invalid or the request fails.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        self.execute(
            Method::POST,
            "/auth/login",
            &[],
            None,
            None,
            Some(&LoginRequest { email, password }),
        )
        .await
    }

    /// Exchange a still-valid bearer token for a fresh one.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid or the request fails.
    #[instrument(skip(self, bearer))]
    pub async fn refresh(&self, bearer: &str) -> Result<AuthSession, ApiError> {
        self.execute(
            Method::POST,
            "/auth/refresh",
            &[],
            Some(bearer),
            None,
            Self::NO_BODY,
        )
        .await
    }

    /// Fetch the current user for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid or the request fails.
    #[instrument(skip(self, bearer))]
    pub async fn me(&self, bearer: &str) -> Result<User, ApiError> {
        self.execute(
            Method::GET,
            "/auth/me",
            &[],
            Some(bearer),
            None,
            Self::NO_BODY,
        )
        .await
    }

    /// Revoke a bearer token server-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, bearer))]
    pub async fn logout(&self, bearer: &str) -> Result<(), ApiError> {
        self.execute_no_content(Method::POST, "/auth/logout", Some(bearer), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_list_params_cache_key() {
        let params = ProductListParams {
            page: Some(2),
            per_page: Some(24),
            category: Some("outerwear".to_string()),
            sort: ProductSort::PriceAsc,
            query: None,
        };
        assert_eq!(params.cache_key(), "products:2:24:outerwear:price_asc");
    }

    #[test]
    fn test_product_list_params_defaults() {
        let params = ProductListParams::default();
        assert_eq!(params.cache_key(), "products:1:12::newest");

        let query = params.to_query();
        assert!(query.contains(&("sort", "newest".to_string())));
        assert!(!query.iter().any(|(k, _)| *k == "q"));
    }

    #[test]
    fn test_product_list_params_query_includes_search() {
        let params = ProductListParams {
            query: Some("linen".to_string()),
            ..Default::default()
        };
        let query = params.to_query();
        assert!(query.contains(&("q", "linen".to_string())));
    }
}
