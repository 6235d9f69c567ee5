//! Product CRUD with cache-aside reads and write-through updates.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::application::dto::ProductDto;
use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;
use crate::infrastructure::cache::ProductCache;
use crate::metrics::names;

/// Service orchestrating the product store and the product cache.
///
/// Every call touches the store first and the cache second. When a mutating
/// call returns `Ok`, the cache entry for that product either holds the
/// values just written or is absent; it is never left holding older values.
///
/// Collection reads bypass the cache, only single products are cached.
pub struct CatalogService<R: ProductRepository> {
    repository: Arc<R>,
    cache: Arc<dyn ProductCache>,
}

impl<R: ProductRepository> CatalogService<R> {
    /// Creates a new catalog service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn ProductCache>) -> Self {
        Self { repository, cache }
    }

    /// Returns all products. Never reads or fills the cache.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_all(&self) -> Result<Vec<ProductDto>, AppError> {
        let products = self.repository.find_all().await?;
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    /// Creates a product from the name and price of `dto`.
    ///
    /// Any identifier in `dto` is ignored; the store assigns one. The stored
    /// product is written into the cache before returning.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, or when the cache
    /// can neither store nor evict the new entry.
    pub async fn create(&self, dto: ProductDto) -> Result<ProductDto, AppError> {
        let product = Product::new(dto.name, dto.price);

        let saved = self.repository.save(product).await?;
        let id = persisted_id(&saved)?;
        let created = ProductDto::from(saved);

        self.write_through(id, &created).await?;

        info!(id, "Product created");
        Ok(created)
    }

    /// Retrieves a product, serving it from the cache when possible.
    ///
    /// On a hit the store is not queried. On a miss the product is read from
    /// the store and cached. A cache that cannot be read is treated as a miss.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has this identifier.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, id: i64) -> Result<ProductDto, AppError> {
        match self.cache.get(id).await {
            Ok(Some(cached)) => {
                metrics::counter!(names::CACHE_HITS_TOTAL).increment(1);
                debug!(id, "Cache hit");
                return Ok(cached);
            }
            Ok(None) => {
                metrics::counter!(names::CACHE_MISSES_TOTAL).increment(1);
                debug!(id, "Cache miss");
            }
            Err(e) => {
                metrics::counter!(names::CACHE_MISSES_TOTAL).increment(1);
                warn!(id, "Cache read failed, falling back to store: {}", e);
            }
        }

        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::product_not_found(Some(id)))?;
        let dto = ProductDto::from(product);

        // A failed fill leaves the entry cold, which is still consistent.
        if let Err(e) = self.cache.put(id, &dto).await {
            metrics::counter!(names::CACHE_WRITE_FAILURES_TOTAL).increment(1);
            warn!(id, "Failed to populate cache: {}", e);
        }

        Ok(dto)
    }

    /// Replaces the name and price of an existing product.
    ///
    /// The updated product overwrites any cached copy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `dto.id` is absent or unknown.
    /// Returns [`AppError::Internal`] on database errors, or when the cache
    /// can neither store nor evict the entry.
    pub async fn update(&self, dto: ProductDto) -> Result<ProductDto, AppError> {
        let id = dto.id.ok_or_else(|| AppError::product_not_found(None))?;

        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::product_not_found(Some(id)))?;

        product.name = dto.name;
        product.price = dto.price;

        let saved = self.repository.save(product).await?;
        let updated = ProductDto::from(saved);

        self.write_through(id, &updated).await?;

        info!(id, "Product updated");
        Ok(updated)
    }

    /// Deletes a product and evicts its cache entry.
    ///
    /// Deleting an unknown identifier succeeds; the eviction still runs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or if the cache
    /// entry could not be evicted.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete_by_id(id).await?;
        self.cache.evict(id).await?;

        info!(id, "Product deleted");
        Ok(())
    }

    /// Removes a single cache entry without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the cache could not be reached.
    pub async fn evict_cached(&self, id: i64) -> Result<(), AppError> {
        self.cache.evict(id).await?;
        Ok(())
    }

    /// Checks if the product store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.repository.health_check().await
    }

    /// Checks if the cache backend is reachable.
    pub async fn cache_healthy(&self) -> bool {
        self.cache.health_check().await
    }

    /// Name of the configured cache backend.
    pub fn cache_backend(&self) -> &'static str {
        self.cache.backend()
    }

    /// Stores `dto` in the cache after a mutation.
    ///
    /// If the put fails the entry is evicted instead, so a previous value
    /// cannot survive. Only when both fail is the error returned.
    async fn write_through(&self, id: i64, dto: &ProductDto) -> Result<(), AppError> {
        let Err(put_err) = self.cache.put(id, dto).await else {
            return Ok(());
        };

        metrics::counter!(names::CACHE_WRITE_FAILURES_TOTAL).increment(1);
        warn!(id, "Cache write failed, evicting entry: {}", put_err);

        self.cache.evict(id).await.map_err(AppError::from)
    }
}

fn persisted_id(product: &Product) -> Result<i64, AppError> {
    product.id.ok_or_else(|| {
        AppError::internal(
            "Store returned a product without an identifier",
            json!({ "name": product.name }),
        )
    })
}
