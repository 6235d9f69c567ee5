//! Core domain entities.
//!
//! - [`Product`] - A catalog record; its identifier is assigned by the store

pub mod product;

pub use product::Product;
