//! Application layer: catalog orchestration over the store and the cache.
//!
//! - [`dto`] - [`dto::ProductDto`], the only product shape crossing the
//!   service boundary and the value held by the cache
//! - [`services::catalog_service::CatalogService`] - CRUD with cache-aside
//!   reads and write-through updates

pub mod dto;
pub mod services;
