//! PostgreSQL repository implementations.
//!
//! - [`PgProductRepository`] - Product storage and retrieval

pub mod pg_product_repository;

pub use pg_product_repository::PgProductRepository;
