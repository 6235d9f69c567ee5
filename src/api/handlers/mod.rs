//! HTTP request handlers for API endpoints.

pub mod health;
pub mod metrics;
pub mod products;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use products::{
    create_product_handler, delete_product_handler, get_product_handler, list_products_handler,
    update_product_handler,
};
