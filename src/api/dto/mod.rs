//! Data Transfer Objects specific to the HTTP API.
//!
//! Product bodies use [`crate::application::dto::ProductDto`] directly.

pub mod health;
