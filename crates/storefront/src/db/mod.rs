//! Database access for the storefront `PostgreSQL` instance.
//!
//! # Tables
//!
//! - `products` - Catalog items (prices, stock, vehicle compatibility)
//! - `categories` - Product categories (count derived on read)
//! - `vehicle_makes` / `vehicle_models` - Static compatibility reference data
//! - `cart_items` - Session-keyed cart rows, unique per (session, product)
//! - `users` - Legacy template table, no routes attached
//!
//! # Migrations
//!
//! Migrations live in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p lumenparts-cli -- migrate
//! ```

pub mod cart;
pub mod catalog;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use cart::CartRepository;
pub use catalog::CatalogRepository;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// Bounded at 10 connections with a 30-second idle reclaim, matching the
/// store's historical pool settings.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .idle_timeout(Duration::from_secs(30))
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
