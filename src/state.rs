//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::CatalogService;
use crate::infrastructure::persistence::PgProductRepository;

/// Catalog service backed by PostgreSQL.
pub type PgCatalogService = CatalogService<PgProductRepository>;

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<PgCatalogService>,
}

impl AppState {
    pub fn new(catalog_service: Arc<PgCatalogService>) -> Self {
        Self { catalog_service }
    }
}
