//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Creation and listing
//! - Bulk id resolution for order validation (`find_by_ids`)
//!
//! Products have no update path: an order's cached total therefore only
//! ever reflects prices as they stood at order-save time.

use chrono::Utc;
use sqlx::{QueryBuilder, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use crm_core::Product;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let laptop = repo.insert("Laptop", 99999, 10).await?;
/// let resolved = repo.find_by_ids(&[laptop.id.clone()]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    ///
    /// Field validation (positive price, non-negative stock) happens in the
    /// facade before this is called; the schema CHECK constraints backstop it.
    pub async fn insert(&self, name: &str, price_cents: i64, stock: i64) -> DbResult<Product> {
        debug!(name = %name, price_cents = %price_cents, stock = %stock, "Inserting product");

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            price_cents,
            stock,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO products (id, name, price_cents, stock, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(product.stock)
        .bind(product.created_at)
        .execute(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists all products, oldest first.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_cents, stock, created_at
            FROM products
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Gets a product by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_cents, stock, created_at
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Resolves a set of product ids.
    ///
    /// Returns whatever subset exists; the caller compares the result count
    /// against the requested count to detect unknown ids. Duplicate input
    /// ids resolve to a single row (the join table has the same semantics).
    pub async fn find_by_ids(&self, ids: &[String]) -> DbResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        // Dynamic IN (...) list; sqlx has no vector binding for SQLite
        let mut builder: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new(
            "SELECT id, name, price_cents, stock, created_at FROM products WHERE id IN (",
        );

        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        separated.push_unseparated(") ORDER BY created_at");

        let products = builder
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;

        debug!(
            requested = ids.len(),
            resolved = products.len(),
            "Resolved product ids"
        );

        Ok(products)
    }

    /// Gets the product matching every field, or creates it.
    ///
    /// Seed path; see `CustomerRepository::get_or_create`.
    ///
    /// ## Returns
    /// `(product, created)` where `created` is false on a match.
    pub async fn get_or_create(
        &self,
        name: &str,
        price_cents: i64,
        stock: i64,
    ) -> DbResult<(Product, bool)> {
        let existing = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_cents, stock, created_at
            FROM products
            WHERE name = ?1 AND price_cents = ?2 AND stock = ?3
            "#,
        )
        .bind(name)
        .bind(price_cents)
        .bind(stock)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(product) = existing {
            return Ok((product, false));
        }

        let product = self.insert(name, price_cents, stock).await?;
        Ok((product, true))
    }

    /// Counts products (for diagnostics and seeding reports).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
