//! Persistence for the distribution hub catalog.
//!
//! [`store::EntityRepository`] is the seam the API talks to. It has a
//! PostgreSQL backend built from the zero-sized repositories in
//! [`repositories`] and an in-memory backend seeded from [`fixtures`].

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod fixtures;
pub mod models;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use store::{EntityRepository, MemoryEntityRepository, PgEntityRepository};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
