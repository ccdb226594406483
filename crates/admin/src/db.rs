//! Database operations for admin `PostgreSQL`.
//!
//! # Database: `kawane_admin`
//!
//! Stores session data only - the Kawane backend is the source of truth for
//! every commerce entity:
//!
//! ## Tables
//!
//! - `tower_sessions.session` - Tower-sessions storage (staff token + mirror)
//!
//! # Migrations
//!
//! The session schema is created via:
//! ```bash
//! cargo run -p kawane-cli -- migrate admin
//! ```

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Create a `PostgreSQL` connection pool with sensible defaults.
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
