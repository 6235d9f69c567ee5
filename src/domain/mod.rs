//! Domain layer containing the catalog entity and its storage contract.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers.
//!
//! - [`entities`] - The [`entities::Product`] record owned by the store
//! - [`repositories`] - The [`repositories::ProductRepository`] trait
//!   implemented by `crate::infrastructure::persistence`

pub mod entities;
pub mod repositories;
