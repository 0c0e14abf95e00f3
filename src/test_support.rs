//! Shared fixtures for tests that need a database handle.

use crate::db::Database;
use crate::schema;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

/// Connect to the database named by `TEST_DATABASE_URL` and migrate it.
///
/// Store-backed tests are `#[ignore]`d; run them with
/// `TEST_DATABASE_URL=postgres://... cargo test -- --include-ignored`.
pub async fn test_database() -> Database {
    let url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must point at a PostgreSQL database for store-backed tests");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("Failed to connect to TEST_DATABASE_URL");

    schema::migrate(&pool)
        .await
        .expect("Failed to migrate test database");

    Database::from_pool(pool)
}

/// A handle that never connects until a query runs.
///
/// Good for exercising routes that must answer before touching the store.
pub fn lazy_database() -> Database {
    Database::from_pool(PgPoolOptions::new().connect_lazy_with(PgConnectOptions::new()))
}

pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

/// The full router over `db`, as served by the binary
pub fn test_app(db: Database) -> axum::Router {
    crate::routes::app(crate::state::AppState { db })
}
