//! Session-store migration commands.
//!
//! The only local persistence either service owns is its tower-sessions
//! table; the Kawane backend holds every commerce entity. These commands
//! create that schema in each service database.
//!
//! # Environment Variables
//!
//! - `STOREFRONT_DATABASE_URL` - `PostgreSQL` connection string for storefront
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string for admin

use sqlx::PgPool;
use tower_sessions_sqlx_store::PostgresStore;
use tracing::info;

/// Errors that can occur while migrating.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create the storefront session schema.
///
/// # Errors
///
/// Returns an error if the database URL is missing or the migration fails.
pub async fn storefront() -> Result<(), MigrationError> {
    migrate_database("STOREFRONT_DATABASE_URL", "storefront").await
}

/// Create the admin session schema.
///
/// # Errors
///
/// Returns an error if the database URL is missing or the migration fails.
pub async fn admin() -> Result<(), MigrationError> {
    migrate_database("ADMIN_DATABASE_URL", "admin").await
}

async fn migrate_database(env_var: &'static str, label: &str) -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var(env_var).map_err(|_| MigrationError::MissingEnvVar(env_var))?;

    info!("Connecting to {label} database...");
    let pool = PgPool::connect(&database_url).await?;

    info!("Creating {label} session schema...");
    let store = PostgresStore::new(pool);
    store.migrate().await?;

    info!("{label} session schema ready");
    Ok(())
}
