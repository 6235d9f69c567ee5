//! Handlers for product endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::application::dto::ProductDto;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all products.
///
/// # Endpoint
///
/// `GET /api/product`
///
/// Always served from the database.
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductDto>>, AppError> {
    let products = state.catalog_service.list_all().await?;
    Ok(Json(products))
}

/// Creates a product.
///
/// # Endpoint
///
/// `POST /api/product`
///
/// Any `id` in the body is ignored.
///
/// # Errors
///
/// Returns 400 if the name is empty or too long, or the price is negative.
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(payload): Json<ProductDto>,
) -> Result<(StatusCode, Json<ProductDto>), AppError> {
    payload.validate()?;

    let product = state.catalog_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Retrieves a product by id.
///
/// # Endpoint
///
/// `GET /api/product/{id}`
///
/// # Errors
///
/// Returns 404 if the product does not exist.
pub async fn get_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductDto>, AppError> {
    let product = state.catalog_service.get(id).await?;
    Ok(Json(product))
}

/// Replaces the name and price of a product.
///
/// # Endpoint
///
/// `PUT /api/product`
///
/// The product is identified by the `id` field of the body.
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if `id` is missing or unknown.
pub async fn update_product_handler(
    State(state): State<AppState>,
    Json(payload): Json<ProductDto>,
) -> Result<Json<ProductDto>, AppError> {
    payload.validate()?;

    let product = state.catalog_service.update(payload).await?;
    Ok(Json(product))
}

/// Deletes a product.
///
/// # Endpoint
///
/// `DELETE /api/product/{id}`
///
/// Idempotent: deleting an unknown id also returns 204.
pub async fn delete_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.catalog_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
