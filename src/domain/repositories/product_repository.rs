//! Repository trait for product persistence.

use crate::domain::entities::Product;
use crate::error::AppError;
use async_trait::async_trait;

/// Durable storage for [`Product`] records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_product.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every stored product ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Product>, AppError>;

    /// Finds a product by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Inserts or overwrites a product.
    ///
    /// A product without an identifier is inserted and receives a new one.
    /// A product with an identifier overwrites the row with that identifier
    /// (last write wins) and never recreates a deleted row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier has no row.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, product: Product) -> Result<Product, AppError>;

    /// Deletes a product. Deleting a missing identifier is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// Checks if the store is reachable.
    async fn health_check(&self) -> bool;
}
