//! Database operations for storefront `PostgreSQL`.
//!
//! # Database: `kawane_storefront`
//!
//! Stores session data only - the Kawane backend is the source of truth for
//! users, products, carts, and orders:
//!
//! ## Tables
//!
//! - `tower_sessions.session` - Tower-sessions storage (bearer token, cart
//!   token, user mirror)
//!
//! # Migrations
//!
//! The session schema is created via:
//! ```bash
//! cargo run -p kawane-cli -- migrate storefront
//! ```

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
