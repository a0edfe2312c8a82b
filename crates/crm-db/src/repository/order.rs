//! # Order Repository
//!
//! Database operations for orders and the order↔product association table.
//!
//! ## Order Save Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Order Save Lifecycle                            │
//! │                                                                     │
//! │  1. INSERT EMPTY                                                   │
//! │     └── insert(customer_id) → Order { total_cents: 0 }             │
//! │                                                                     │
//! │  2. ASSOCIATE PRODUCTS                                             │
//! │     └── associate_products() → join rows in order_products         │
//! │                                                                     │
//! │  3. RECOMPUTE AND PERSIST                                          │
//! │     └── update_total() → total_cents cached                        │
//! │                                                                     │
//! │  The total is written twice by design (zero, then the snapshot).   │
//! │  There is no locking across the steps and no recompute on read;    │
//! │  a later product price change leaves the stored total stale.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use crm_core::{Order, Product};

/// One row of the reminder report: an order id and its customer's email.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderReminder {
    pub order_id: String,
    pub customer_email: String,
}

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Step 1: inserts a new order with a zero total.
    ///
    /// `order_date` is assigned here and never changes.
    pub async fn insert(&self, customer_id: &str) -> DbResult<Order> {
        let order = Order {
            id: Uuid::new_v4().to_string(),
            customer_id: customer_id.to_string(),
            total_cents: 0,
            order_date: Utc::now(),
        };

        debug!(id = %order.id, customer_id = %customer_id, "Inserting order");

        sqlx::query(
            r#"
            INSERT INTO orders (id, customer_id, total_cents, order_date)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&order.id)
        .bind(&order.customer_id)
        .bind(order.total_cents)
        .bind(order.order_date)
        .execute(&self.pool)
        .await?;

        Ok(order)
    }

    /// Step 2: writes the order↔product association rows.
    ///
    /// The caller has already resolved every id; an unknown product id here
    /// would trip the foreign key constraint.
    pub async fn associate_products(&self, order_id: &str, product_ids: &[String]) -> DbResult<()> {
        debug!(order_id = %order_id, count = product_ids.len(), "Associating products");

        for product_id in product_ids {
            sqlx::query(
                r#"
                INSERT OR IGNORE INTO order_products (order_id, product_id)
                VALUES (?1, ?2)
                "#,
            )
            .bind(order_id)
            .bind(product_id)
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }

    /// Step 3: persists the recomputed total.
    pub async fn update_total(&self, order_id: &str, total_cents: i64) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE orders SET total_cents = ?2
            WHERE id = ?1
            "#,
        )
        .bind(order_id)
        .bind(total_cents)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", order_id));
        }

        Ok(())
    }

    /// Gets an order by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_id, total_cents, order_date
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Lists all orders, oldest first.
    pub async fn list(&self) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_id, total_cents, order_date
            FROM orders
            ORDER BY order_date
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Lists orders with `order_date >= since`, oldest first.
    ///
    /// This is the date-range read the reminder reporter consumes.
    pub async fn list_since(&self, since: DateTime<Utc>) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_id, total_cents, order_date
            FROM orders
            WHERE order_date >= ?1
            ORDER BY order_date
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Gets the product ids associated with an order.
    pub async fn product_ids_for(&self, order_id: &str) -> DbResult<Vec<String>> {
        let ids: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT product_id
            FROM order_products
            WHERE order_id = ?1
            ORDER BY product_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// Gets the full products associated with an order.
    pub async fn products_for(&self, order_id: &str) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT p.id, p.name, p.price_cents, p.stock, p.created_at
            FROM products p
            INNER JOIN order_products op ON op.product_id = p.id
            WHERE op.order_id = ?1
            ORDER BY p.created_at
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Order id + customer email for every order since the given date.
    ///
    /// Backing query for the reminder report.
    pub async fn reminders_since(&self, since: DateTime<Utc>) -> DbResult<Vec<OrderReminder>> {
        let rows = sqlx::query_as::<_, OrderReminder>(
            r#"
            SELECT o.id AS order_id, c.email AS customer_email
            FROM orders o
            INNER JOIN customers c ON c.id = o.customer_id
            WHERE o.order_date >= ?1
            ORDER BY o.order_date
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Counts orders (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use chrono::{Duration, Utc};
    use crm_core::{order_total, NewCustomer};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_two_step_create_caches_total() {
        let db = test_db().await;

        let alice = db
            .customers()
            .insert(&NewCustomer::new("Alice", "alice@example.com", None))
            .await
            .unwrap();
        let laptop = db.products().insert("Laptop", 99999, 10).await.unwrap();
        let phones = db.products().insert("Headphones", 7999, 50).await.unwrap();

        // Step 1: zero total
        let order = db.orders().insert(&alice.id).await.unwrap();
        assert_eq!(order.total_cents, 0);

        // Step 2: associate
        let ids = vec![laptop.id.clone(), phones.id.clone()];
        db.orders().associate_products(&order.id, &ids).await.unwrap();

        // Step 3: recompute and persist
        let products = db.products().find_by_ids(&ids).await.unwrap();
        let total = order_total(&products);
        db.orders().update_total(&order.id, total.cents()).await.unwrap();

        let stored = db.orders().get_by_id(&order.id).await.unwrap().unwrap();
        assert_eq!(stored.total_cents, 107998); // $1079.98

        let associated = db.orders().product_ids_for(&order.id).await.unwrap();
        assert_eq!(associated.len(), 2);
    }

    #[tokio::test]
    async fn test_total_is_a_stale_snapshot() {
        let db = test_db().await;

        let alice = db
            .customers()
            .insert(&NewCustomer::new("Alice", "alice@example.com", None))
            .await
            .unwrap();
        let laptop = db.products().insert("Laptop", 99999, 10).await.unwrap();

        let order = db.orders().insert(&alice.id).await.unwrap();
        let ids = vec![laptop.id.clone()];
        db.orders().associate_products(&order.id, &ids).await.unwrap();
        db.orders().update_total(&order.id, 99999).await.unwrap();

        // Change the price out from under the order (raw SQL: products
        // have no update path in the API)
        sqlx::query("UPDATE products SET price_cents = 1 WHERE id = ?1")
            .bind(&laptop.id)
            .execute(db.pool())
            .await
            .unwrap();

        // The cached total does not move
        let stored = db.orders().get_by_id(&order.id).await.unwrap().unwrap();
        assert_eq!(stored.total_cents, 99999);
    }

    #[tokio::test]
    async fn test_list_since_filters_by_date() {
        let db = test_db().await;

        let alice = db
            .customers()
            .insert(&NewCustomer::new("Alice", "alice@example.com", None))
            .await
            .unwrap();
        db.orders().insert(&alice.id).await.unwrap();

        let week_ago = Utc::now() - Duration::days(7);
        let recent = db.orders().list_since(week_ago).await.unwrap();
        assert_eq!(recent.len(), 1);

        let tomorrow = Utc::now() + Duration::days(1);
        let future = db.orders().list_since(tomorrow).await.unwrap();
        assert!(future.is_empty());
    }

    #[tokio::test]
    async fn test_reminders_join_customer_email() {
        let db = test_db().await;

        let alice = db
            .customers()
            .insert(&NewCustomer::new("Alice", "alice@example.com", None))
            .await
            .unwrap();
        let order = db.orders().insert(&alice.id).await.unwrap();

        let week_ago = Utc::now() - Duration::days(7);
        let reminders = db.orders().reminders_since(week_ago).await.unwrap();
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].order_id, order.id);
        assert_eq!(reminders[0].customer_email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_associate_unknown_product_trips_foreign_key() {
        let db = test_db().await;

        let alice = db
            .customers()
            .insert(&NewCustomer::new("Alice", "alice@example.com", None))
            .await
            .unwrap();
        let order = db.orders().insert(&alice.id).await.unwrap();

        let err = db
            .orders()
            .associate_products(&order.id, &["no-such-product".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::DbError::ForeignKeyViolation { .. }
        ));
    }
}
