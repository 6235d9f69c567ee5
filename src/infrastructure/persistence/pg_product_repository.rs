//! PostgreSQL implementation of the product repository.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: Decimal,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::with_id(row.id, row.name, row.price)
    }
}

/// PostgreSQL repository for products.
///
/// Identifiers come from the `BIGSERIAL` sequence of the `products` table.
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn save(&self, product: Product) -> Result<Product, AppError> {
        let row = match product.id {
            None => {
                sqlx::query_as::<_, ProductRow>(
                    r#"
                    INSERT INTO products (name, price)
                    VALUES ($1, $2)
                    RETURNING id, name, price
                    "#,
                )
                .bind(&product.name)
                .bind(product.price)
                .fetch_one(self.pool.as_ref())
                .await?
            }
            Some(id) => {
                // No row means it was deleted after the caller read it.
                sqlx::query_as::<_, ProductRow>(
                    r#"
                    UPDATE products
                    SET name = $2, price = $3
                    WHERE id = $1
                    RETURNING id, name, price
                    "#,
                )
                .bind(id)
                .bind(&product.name)
                .bind(product.price)
                .fetch_optional(self.pool.as_ref())
                .await?
                .ok_or_else(|| AppError::product_not_found(Some(id)))?
            }
        };

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
