use anyhow::{Context, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::Config;
use crate::models::{Product, ProductInput};
use crate::schema;

/// Shareable database handle for use across async handlers
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and bring the schema up to date
    ///
    /// Fails if the store cannot be reached with the configured credentials
    /// or if a migration cannot be applied; the caller is expected to abort
    /// startup in that case.
    pub async fn from_config(config: &Config) -> Result<Self> {
        tracing::info!(
            "Connecting to PostgreSQL at {}:{}",
            config.pg_host,
            config.pg_port
        );

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(config.connect_options())
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to PostgreSQL database '{}' at {}:{} as '{}'",
                    config.pg_database, config.pg_host, config.pg_port, config.pg_user
                )
            })?;

        tracing::info!(
            "Successfully connected to PostgreSQL database: {}",
            config.pg_database
        );

        schema::migrate(&pool).await?;

        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// List every product, oldest id first
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, in_stock FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list products")?;

        tracing::debug!("Listed {} products", products.len());
        Ok(products)
    }

    /// Insert a new product and return it with its store-assigned id
    ///
    /// The returned price is the value as stored, i.e. already rounded to
    /// two decimal places by the column type.
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price, in_stock) VALUES ($1, $2, $3) \
             RETURNING id, name, price, in_stock",
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.in_stock)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert product")?;

        tracing::debug!("Created product with id: {}", product.id);
        Ok(product)
    }

    /// Read a product by id
    ///
    /// # Returns
    /// * `Ok(Some(product))` - Product found
    /// * `Ok(None)` - No product with this id
    /// * `Err(_)` - Query failed
    pub async fn get_product(&self, id: i32) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, in_stock FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to read product")?;

        if product.is_none() {
            tracing::debug!("Product not found with id: {}", id);
        }
        Ok(product)
    }

    /// Overwrite every mutable field of a product
    ///
    /// Returns the updated row, or `None` when no product has this id.
    pub async fn update_product(&self, id: i32, input: &ProductInput) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $2, price = $3, in_stock = $4 WHERE id = $1 \
             RETURNING id, name, price, in_stock",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.price)
        .bind(input.in_stock)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update product")?;

        tracing::debug!("Update of product {} matched: {}", id, product.is_some());
        Ok(product)
    }

    /// Remove a product
    ///
    /// Returns the removed row, or `None` when no product has this id.
    /// Deleting the same id twice is not an error.
    pub async fn delete_product(&self, id: i32) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "DELETE FROM products WHERE id = $1 RETURNING id, name, price, in_stock",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to delete product")?;

        tracing::debug!("Delete of product {} matched: {}", id, product.is_some());
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_database, unique_name};
    use rust_decimal_macros::dec;

    fn input(name: &str, price: rust_decimal::Decimal, in_stock: bool) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            price,
            in_stock,
        }
    }

    #[test]
    fn test_database_is_clonable() {
        // Shared across axum handlers through AppState
        fn assert_clone<T: Clone>() {}
        assert_clone::<Database>();
    }

    #[test]
    fn test_database_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Database>();
    }

    #[tokio::test]
    async fn test_from_config_unreachable_store() {
        let config = Config {
            pg_host: "127.0.0.1".to_string(),
            pg_port: 1,
            pg_user: "nobody".to_string(),
            pg_password: "wrong".to_string(),
            pg_database: "missing".to_string(),
            service_port: 8080,
            service_host: "0.0.0.0".to_string(),
        };

        let error = Database::from_config(&config)
            .await
            .err()
            .expect("connecting to a closed port should fail");

        let message = error.to_string();
        assert!(
            message.contains("Failed to connect to PostgreSQL"),
            "Error should have context: {}",
            message
        );
        assert!(message.contains("127.0.0.1:1"));
    }

    #[tokio::test]
    #[ignore = "needs TEST_DATABASE_URL"]
    async fn test_create_and_get() {
        let db = test_database().await;

        let name = unique_name("widget");
        let created = db.create_product(&input(&name, dec!(9.99), true)).await.unwrap();

        assert_eq!(created.name, name);
        assert_eq!(created.price, dec!(9.99));
        assert!(created.in_stock);

        let fetched = db.get_product(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    #[ignore = "needs TEST_DATABASE_URL"]
    async fn test_ids_are_unique_and_not_reused() {
        let db = test_database().await;

        let first = db
            .create_product(&input(&unique_name("first"), dec!(1), true))
            .await
            .unwrap();
        db.delete_product(first.id).await.unwrap();

        let second = db
            .create_product(&input(&unique_name("second"), dec!(2), true))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    #[ignore = "needs TEST_DATABASE_URL"]
    async fn test_update_round_trip() {
        let db = test_database().await;

        let created = db
            .create_product(&input(&unique_name("before"), dec!(5.00), true))
            .await
            .unwrap();

        let renamed = unique_name("after");
        let updated = db
            .update_product(created.id, &input(&renamed, dec!(-12.50), false))
            .await
            .unwrap()
            .expect("product should exist");

        assert_eq!(updated.id, created.id);

        let fetched = db.get_product(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, renamed);
        assert_eq!(fetched.price, dec!(-12.50));
        assert!(!fetched.in_stock);
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    #[ignore = "needs TEST_DATABASE_URL"]
    async fn test_update_missing_returns_none() {
        let db = test_database().await;

        let result = db
            .update_product(i32::MAX, &input("ghost", dec!(1), true))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    #[ignore = "needs TEST_DATABASE_URL"]
    async fn test_delete_is_idempotent() {
        let db = test_database().await;

        let created = db
            .create_product(&input(&unique_name("doomed"), dec!(3.00), true))
            .await
            .unwrap();

        let removed = db.delete_product(created.id).await.unwrap();
        assert_eq!(removed.map(|p| p.id), Some(created.id));

        assert!(db.get_product(created.id).await.unwrap().is_none());
        assert!(db.delete_product(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore = "needs TEST_DATABASE_URL"]
    async fn test_list_tracks_creates_and_deletes() {
        let db = test_database().await;

        let prefix = unique_name("batch");
        let mut ids = Vec::new();
        for i in 0..4 {
            let product = db
                .create_product(&input(&format!("{}-{}", prefix, i), dec!(1.00), true))
                .await
                .unwrap();
            ids.push(product.id);
        }
        db.delete_product(ids[0]).await.unwrap();
        db.delete_product(ids[2]).await.unwrap();

        let listed: Vec<i32> = db
            .list_products()
            .await
            .unwrap()
            .into_iter()
            .filter(|p| p.name.starts_with(&prefix))
            .map(|p| p.id)
            .collect();

        assert_eq!(listed, vec![ids[1], ids[3]]);
    }

    #[tokio::test]
    #[ignore = "needs TEST_DATABASE_URL"]
    async fn test_price_rounds_to_two_places() {
        let db = test_database().await;

        let created = db
            .create_product(&input(&unique_name("rounding"), dec!(19.995), true))
            .await
            .unwrap();
        assert_eq!(created.price, dec!(20.00));

        let down = db
            .update_product(created.id, &input(&created.name, dec!(19.994), true))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(down.price, dec!(19.99));
    }
}
