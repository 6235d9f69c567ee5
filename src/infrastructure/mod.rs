//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and caching.
//!
//! # Modules
//!
//! - [`cache`] - The product cache region (Redis, in-memory and no-op implementations)
//! - [`persistence`] - PostgreSQL repository implementation

pub mod cache;
pub mod persistence;
