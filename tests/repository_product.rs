mod common;

use product_catalog::domain::entities::Product;
use product_catalog::domain::repositories::ProductRepository;
use product_catalog::error::AppError;
use product_catalog::infrastructure::persistence::PgProductRepository;
use rust_decimal_macros::dec;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_save_assigns_id(pool: PgPool) {
    let repo = PgProductRepository::new(Arc::new(pool));

    let saved = repo
        .save(Product::new("Laptop".to_string(), dec!(1200)))
        .await
        .unwrap();

    assert!(saved.id.is_some());
    assert_eq!(saved.name, "Laptop");
    assert_eq!(saved.price, dec!(1200));
}

#[sqlx::test]
async fn test_save_assigns_distinct_ids(pool: PgPool) {
    let repo = PgProductRepository::new(Arc::new(pool));

    let first = repo
        .save(Product::new("A".to_string(), dec!(1)))
        .await
        .unwrap();
    let second = repo
        .save(Product::new("B".to_string(), dec!(2)))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
}

#[sqlx::test]
async fn test_save_keeps_exact_decimal(pool: PgPool) {
    let repo = PgProductRepository::new(Arc::new(pool));

    let saved = repo
        .save(Product::new("Pen".to_string(), dec!(1.99)))
        .await
        .unwrap();
    let found = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();

    assert_eq!(found.price, dec!(1.99));
}

#[sqlx::test]
async fn test_save_with_id_overwrites(pool: PgPool) {
    let id = common::create_test_product(&pool, "Tablet", dec!(500)).await;
    let repo = PgProductRepository::new(Arc::new(pool));

    let saved = repo
        .save(Product::with_id(id, "Updated Tablet".to_string(), dec!(550)))
        .await
        .unwrap();

    assert_eq!(saved.id, Some(id));

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.name, "Updated Tablet");
    assert_eq!(found.price, dec!(550));
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[sqlx::test]
async fn test_save_with_deleted_id_is_not_found(pool: PgPool) {
    let id = common::create_test_product(&pool, "Tablet", dec!(500)).await;
    let repo = PgProductRepository::new(Arc::new(pool.clone()));
    repo.delete_by_id(id).await.unwrap();

    let result = repo
        .save(Product::with_id(id, "Updated Tablet".to_string(), dec!(550)))
        .await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
    assert!(!common::product_exists(&pool, id).await);
}

#[sqlx::test]
async fn test_find_by_id_missing(pool: PgPool) {
    let repo = PgProductRepository::new(Arc::new(pool));

    let result = repo.find_by_id(999_999).await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_find_all_ordered_by_id(pool: PgPool) {
    let first = common::create_test_product(&pool, "Laptop", dec!(1200)).await;
    let second = common::create_test_product(&pool, "Phone", dec!(800)).await;
    let repo = PgProductRepository::new(Arc::new(pool));

    let products = repo.find_all().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, Some(first));
    assert_eq!(products[1].id, Some(second));
}

#[sqlx::test]
async fn test_delete_by_id(pool: PgPool) {
    let id = common::create_test_product(&pool, "Smartwatch", dec!(250)).await;
    let repo = PgProductRepository::new(Arc::new(pool.clone()));

    repo.delete_by_id(id).await.unwrap();

    assert!(!common::product_exists(&pool, id).await);
}

#[sqlx::test]
async fn test_delete_missing_is_noop(pool: PgPool) {
    let repo = PgProductRepository::new(Arc::new(pool));

    assert!(repo.delete_by_id(424_242).await.is_ok());
}

#[sqlx::test]
async fn test_health_check(pool: PgPool) {
    let repo = PgProductRepository::new(Arc::new(pool));

    assert!(repo.health_check().await);
}
