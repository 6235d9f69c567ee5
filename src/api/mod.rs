//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into catalog operations and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Response shapes specific to the HTTP surface
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing and CORS
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
