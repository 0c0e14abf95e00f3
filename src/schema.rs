use anyhow::{Context, Result};
use sqlx::migrate::Migrator;
use sqlx::PgPool;

pub const PRODUCTS_TABLE: &str = "products";

/// Migrations under `migrations/`, embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Bring the schema up to date.
///
/// Applied versions are recorded by the migrator, so running this against an
/// up-to-date database changes nothing.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    tracing::info!(
        "Applying schema migrations ({} known)",
        MIGRATOR.iter().count()
    );

    let existed = table_exists(pool, PRODUCTS_TABLE).await?;

    MIGRATOR
        .run(pool)
        .await
        .context("Failed to apply schema migrations")?;

    if existed {
        tracing::info!("Table '{}' already exists", PRODUCTS_TABLE);
    } else {
        tracing::info!("Table '{}' created successfully", PRODUCTS_TABLE);
    }
    Ok(())
}

pub async fn table_exists(pool: &PgPool, table: &str) -> Result<bool> {
    sqlx::query_scalar::<_, bool>("SELECT to_regclass($1::text) IS NOT NULL")
        .bind(table)
        .fetch_one(pool)
        .await
        .with_context(|| format!("Failed to check whether table '{}' exists", table))
}
