//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                   - Health check
//! POST /auth/login               - Staff login (Customer role rejected)
//! POST /auth/logout              - Staff logout
//!
//! # Everything below requires a staff session; routes marked (admin)
//! # additionally require the Admin role.
//!
//! GET  /dashboard                - Order/revenue/stock/notification overview
//!
//! GET  /orders                   - Order list (status/payment/text filters)
//! GET  /orders/export.csv        - Order list export
//! GET  /orders/{id}              - Order detail
//! POST /orders/{id}/status       - Lifecycle transition
//! POST /orders/{id}/payment-status - Payment status change
//! POST /orders/{id}/cancel       - Cancel (only while cancellable)
//!
//! GET  /products                 - Product list
//! GET  /products/export.csv      - Product list export
//! POST /products                 - Create product
//! GET  /products/{id}            - Product detail
//! PATCH /products/{id}           - Partial update
//! DELETE /products/{id}          - Delete (admin)
//!
//! GET  /inventory                - Stock levels
//! POST /inventory/{id}/adjust    - Manual stock adjustment
//! GET  /inventory/low-stock      - Low stock report
//!
//! GET  /users                    - User list (admin)
//! GET  /users/{id}               - User detail (admin)
//! POST /users/{id}/role          - Role change (admin)
//! POST /users/{id}/verify        - Verification flag (admin)
//!
//! GET  /deals                    - Deal list
//! POST /deals                    - Create deal (validated locally first)
//! PATCH /deals/{id}              - Partial update
//! DELETE /deals/{id}             - Delete (admin)
//! POST /deals/{id}/activate      - Activate
//! POST /deals/{id}/deactivate    - Deactivate
//!
//! GET/POST/PATCH/DELETE /banners  + POST /banners/reorder
//! GET/POST/PATCH/DELETE /lookbook + POST /lookbook/reorder
//!
//! GET  /shipments                - Shipment list
//! POST /shipments                - Create shipment for an order
//! GET  /shipments/{id}           - Shipment detail
//! POST /shipments/{id}/status    - Courier status update
//!
//! GET  /notifications            - Notification list
//! GET  /notifications/badge      - Unread badge (served from poller state)
//! POST /notifications/{id}/read  - Mark one read
//! POST /notifications/read-all   - Mark all read
//!
//! GET  /search                   - Global search (debounced; 204 = superseded)
//! GET  /analytics                - Sales summary + daily revenue
//! GET  /analytics/export.csv     - Daily revenue export
//! ```

pub mod analytics;
pub mod auth;
pub mod banners;
pub mod dashboard;
pub mod deals;
pub mod inventory;
pub mod lookbook;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod search;
pub mod shipments;
pub mod users;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/export.csv", get(orders::export_csv))
        .route("/{id}", get(orders::show))
        .route("/{id}/status", post(orders::update_status))
        .route("/{id}/payment-status", post(orders::update_payment_status))
        .route("/{id}/cancel", post(orders::cancel))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/export.csv", get(products::export_csv))
        .route(
            "/{id}",
            get(products::show)
                .patch(products::update)
                .delete(products::destroy),
        )
}

/// Create the inventory routes router.
pub fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(inventory::index))
        .route("/low-stock", get(inventory::low_stock))
        .route("/{id}/adjust", post(inventory::adjust))
}

/// Create the user management routes router (Admin role only).
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::index))
        .route("/{id}", get(users::show))
        .route("/{id}/role", post(users::update_role))
        .route("/{id}/verify", post(users::set_verified))
}

/// Create the deal routes router.
pub fn deal_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(deals::index).post(deals::create))
        .route("/{id}", patch(deals::update).delete(deals::destroy))
        .route("/{id}/activate", post(deals::activate))
        .route("/{id}/deactivate", post(deals::deactivate))
}

/// Create the banner routes router.
pub fn banner_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(banners::index).post(banners::create))
        .route("/reorder", post(banners::reorder))
        .route("/{id}", patch(banners::update).delete(banners::destroy))
}

/// Create the lookbook routes router.
pub fn lookbook_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(lookbook::index).post(lookbook::create))
        .route("/reorder", post(lookbook::reorder))
        .route("/{id}", patch(lookbook::update).delete(lookbook::destroy))
}

/// Create the shipment routes router.
pub fn shipment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shipments::index).post(shipments::create))
        .route("/{id}", get(shipments::show))
        .route("/{id}/status", post(shipments::update_status))
}

/// Create the notification routes router.
pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(notifications::index))
        .route("/badge", get(notifications::badge))
        .route("/read-all", post(notifications::mark_all_read))
        .route("/{id}/read", post(notifications::mark_read))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/dashboard", get(dashboard::show))
        .nest("/orders", order_routes())
        .nest("/products", product_routes())
        .nest("/inventory", inventory_routes())
        .nest("/users", user_routes())
        .nest("/deals", deal_routes())
        .nest("/banners", banner_routes())
        .nest("/lookbook", lookbook_routes())
        .nest("/shipments", shipment_routes())
        .nest("/notifications", notification_routes())
        .route("/search", get(search::global))
        .route("/analytics", get(analytics::show))
        .route("/analytics/export.csv", get(analytics::export_csv))
}
