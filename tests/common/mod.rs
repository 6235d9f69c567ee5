#![allow(dead_code)]

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use product_catalog::application::services::CatalogService;
use product_catalog::domain::entities::Product;
use product_catalog::domain::repositories::ProductRepository;
use product_catalog::error::AppError;
use product_catalog::infrastructure::cache::MemoryCache;
use product_catalog::infrastructure::persistence::PgProductRepository;
use product_catalog::state::AppState;

/// Inserts a product directly, bypassing the service and its cache.
pub async fn create_test_product(pool: &PgPool, name: &str, price: Decimal) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(price)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn product_exists(pool: &PgPool, id: i64) -> bool {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM products WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Repository decorator that counts store calls.
pub struct CountingProductRepository<R> {
    inner: R,
    find_all_calls: AtomicUsize,
    find_by_id_calls: AtomicUsize,
    save_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl<R: ProductRepository> CountingProductRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            find_all_calls: AtomicUsize::new(0),
            find_by_id_calls: AtomicUsize::new(0),
            save_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    pub fn find_all_calls(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
    }

    pub fn find_by_id_calls(&self) -> usize {
        self.find_by_id_calls.load(Ordering::SeqCst)
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.find_all_calls.store(0, Ordering::SeqCst);
        self.find_by_id_calls.store(0, Ordering::SeqCst);
        self.save_calls.store(0, Ordering::SeqCst);
        self.delete_calls.store(0, Ordering::SeqCst);
    }
}

#[async_trait]
impl<R: ProductRepository> ProductRepository for CountingProductRepository<R> {
    async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn save(&self, product: Product) -> Result<Product, AppError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.save(product).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_by_id(id).await
    }

    async fn health_check(&self) -> bool {
        self.inner.health_check().await
    }
}

pub type CountingPgRepository = CountingProductRepository<PgProductRepository>;

/// Catalog service over PostgreSQL with a call-counting store and an
/// inspectable in-process cache.
pub fn create_counting_service(
    pool: PgPool,
) -> (
    CatalogService<CountingPgRepository>,
    Arc<CountingPgRepository>,
    Arc<MemoryCache>,
) {
    let repository = Arc::new(CountingProductRepository::new(PgProductRepository::new(
        Arc::new(pool),
    )));
    let cache = Arc::new(MemoryCache::new());
    let service = CatalogService::new(repository.clone(), cache.clone());

    (service, repository, cache)
}

/// Application state over PostgreSQL with an inspectable in-process cache.
pub fn create_test_state(pool: PgPool) -> (AppState, Arc<MemoryCache>) {
    let repository = Arc::new(PgProductRepository::new(Arc::new(pool)));
    let cache = Arc::new(MemoryCache::new());
    let catalog_service = Arc::new(CatalogService::new(repository, cache.clone()));

    (AppState::new(catalog_service), cache)
}
