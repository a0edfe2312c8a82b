//! # Product Operations
//!
//! Mutations: `create_product`. Queries: `list_products`.
//!
//! Price and stock are both checked before any write, and every violation
//! is reported together in one payload.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crm_core::validation::{validate_price_cents, validate_stock};
use crm_core::{Money, Product};
use crm_db::Database;

/// Input for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductInput {
    pub name: String,
    /// Price in cents. Must be strictly positive.
    pub price_cents: i64,
    /// Units in stock. Defaults to zero when omitted.
    pub stock: Option<i64>,
}

impl CreateProductInput {
    pub fn new(name: impl Into<String>, price_cents: i64, stock: Option<i64>) -> Self {
        CreateProductInput {
            name: name.into(),
            price_cents,
            stock,
        }
    }
}

/// Result of a product creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    /// The created product, or `None` when validation failed.
    pub product: Option<Product>,
    /// Every violated rule; empty on success.
    pub errors: Vec<String>,
}

/// Creates a product.
///
/// Collect-errors mode: price and stock are both checked so a caller
/// sees every violation at once.
pub async fn create_product(
    db: &Database,
    input: CreateProductInput,
) -> Result<ProductPayload, ApiError> {
    debug!(name = %input.name, price_cents = input.price_cents, "create_product");

    let stock = input.stock.unwrap_or(0);

    let mut errors = Vec::new();
    if let Err(e) = validate_price_cents(input.price_cents) {
        errors.push(e.to_string());
    }
    if let Err(e) = validate_stock(stock) {
        errors.push(e.to_string());
    }

    if !errors.is_empty() {
        return Ok(ProductPayload {
            product: None,
            errors,
        });
    }

    let product = db
        .products()
        .insert(&input.name, input.price_cents, stock)
        .await?;

    info!(
        id = %product.id,
        name = %product.name,
        price = %Money::from_cents(product.price_cents),
        "Product created"
    );

    Ok(ProductPayload {
        product: Some(product),
        errors: Vec::new(),
    })
}

/// Lists all products.
pub async fn list_products(db: &Database) -> Result<Vec<Product>, ApiError> {
    Ok(db.products().list().await?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crm_db::DbConfig;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_product_success() {
        let db = test_db().await;

        let payload = create_product(&db, CreateProductInput::new("Laptop", 99999, Some(10)))
            .await
            .unwrap();

        assert!(payload.errors.is_empty());
        let product = payload.product.unwrap();
        assert_eq!(product.price_cents, 99999);
        assert_eq!(product.stock, 10);
    }

    #[tokio::test]
    async fn test_stock_defaults_to_zero() {
        let db = test_db().await;

        let payload = create_product(&db, CreateProductInput::new("Cable", 999, None))
            .await
            .unwrap();

        assert_eq!(payload.product.unwrap().stock, 0);
    }

    #[tokio::test]
    async fn test_rejects_non_positive_price() {
        let db = test_db().await;

        for price in [0, -1] {
            let payload = create_product(&db, CreateProductInput::new("Bad", price, Some(1)))
                .await
                .unwrap();
            assert!(payload.product.is_none());
            assert_eq!(payload.errors, vec!["Price must be positive".to_string()]);
        }

        assert!(list_products(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_negative_stock() {
        let db = test_db().await;

        let payload = create_product(&db, CreateProductInput::new("Bad", 100, Some(-1)))
            .await
            .unwrap();

        assert!(payload.product.is_none());
        assert_eq!(payload.errors, vec!["Stock cannot be negative".to_string()]);
    }

    #[tokio::test]
    async fn test_reports_price_and_stock_violations_together() {
        let db = test_db().await;

        let payload = create_product(&db, CreateProductInput::new("Bad", -5, Some(-1)))
            .await
            .unwrap();

        assert!(payload.product.is_none());
        assert_eq!(
            payload.errors,
            vec![
                "Price must be positive".to_string(),
                "Stock cannot be negative".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_boundary_values_accepted() {
        let db = test_db().await;

        // One cent, zero stock: both are the smallest legal values
        let payload = create_product(&db, CreateProductInput::new("Penny", 1, Some(0)))
            .await
            .unwrap();

        let product = payload.product.unwrap();
        assert_eq!(product.price_cents, 1);
        assert_eq!(product.stock, 0);
    }
}
