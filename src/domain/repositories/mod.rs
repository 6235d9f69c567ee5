//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_product.rs` for usage examples.

pub mod product_repository;

pub use product_repository::ProductRepository;

#[cfg(test)]
pub use product_repository::MockProductRepository;
