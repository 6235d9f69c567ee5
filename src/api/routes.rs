//! API route configuration.

use crate::api::handlers::{
    create_product_handler, delete_product_handler, get_product_handler, list_products_handler,
    update_product_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Product API routes.
///
/// # Endpoints
///
/// - `GET    /product`        - List all products
/// - `POST   /product`        - Create a product
/// - `PUT    /product`        - Update a product identified by the body `id`
/// - `GET    /product/{id}`   - Fetch a product (cached)
/// - `DELETE /product/{id}`   - Delete a product
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/product",
            get(list_products_handler)
                .post(create_product_handler)
                .put(update_product_handler),
        )
        .route(
            "/product/{id}",
            get(get_product_handler).delete(delete_product_handler),
        )
}
