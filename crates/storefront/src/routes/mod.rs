//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home payload (banners, lookbook, deals, featured)
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /products               - Product listing (paged, filterable)
//! GET  /products/{id}          - Product detail
//! GET  /categories             - Category list
//! GET  /search                 - Product search
//!
//! # Cart
//! GET  /cart                   - Current cart
//! POST /cart/add               - Add item (creates backend cart on first add)
//! POST /cart/update            - Update quantity (qty <= 0 removes the line)
//! POST /cart/remove            - Remove item
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Cart count badge
//!
//! # Checkout
//! POST /checkout               - Validate shipping form, submit to backend
//!
//! # Orders
//! GET  /orders                 - Order history (auth)
//! GET  /orders/{order_number}  - Order detail (auth)
//! POST /orders/{order_number}/cancel - Cancel while still cancellable (auth)
//! POST /orders/track           - Public tracking by order number + email
//!
//! # Auth
//! POST /auth/register          - Create account
//! POST /auth/login             - Login
//! POST /auth/logout            - Logout
//! POST /auth/refresh           - Refresh bearer token
//!
//! # Account (requires auth)
//! GET  /account                - Current user profile
//! ```

pub mod account;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod home;
pub mod orders;
pub mod products;
pub mod search;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::{api_rate_limiter, auth_rate_limiter};
use crate::state::AppState;

/// Create the auth routes router (strictly rate limited).
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/refresh", post(auth::refresh))
        .layer(auth_rate_limiter())
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/track", post(orders::track))
        .route("/{order_number}", get(orders::show))
        .route("/{order_number}/cancel", post(orders::cancel))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home payload
        .route("/", get(home::home))
        // Catalog
        .nest("/products", product_routes())
        .route("/categories", get(products::categories))
        .route("/search", get(search::search).layer(api_rate_limiter()))
        // Cart
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", post(checkout::submit))
        // Orders
        .nest("/orders", order_routes())
        // Auth
        .nest("/auth", auth_routes())
        // Account
        .route("/account", get(account::show))
}
