//! # Order Operations
//!
//! Mutations: `create_order`. Queries: `list_orders`.
//!
//! ## Order Creation Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  create_order (fail-fast, in order)                                 │
//! │                                                                     │
//! │  1. Customer exists?          no → "Invalid customer ID"           │
//! │  2. Any products selected?    no → "At least one product ..."      │
//! │  3. Every id resolves?        no → "One or more product IDs ..."   │
//! │                                                                     │
//! │  Only the FIRST failing check is reported, then:                   │
//! │                                                                     │
//! │  4. insert order (total = 0)                                       │
//! │  5. associate products                                             │
//! │  6. recompute total from current prices, persist                   │
//! │                                                                     │
//! │  The persisted total is a snapshot; later price changes do not     │
//! │  rewrite it.                                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crm_core::validation::validate_product_selection;
use crm_core::{order_total, Order, ValidationError};
use crm_db::Database;

/// Input for creating an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    pub customer_id: String,
    pub product_ids: Vec<String>,
}

impl CreateOrderInput {
    pub fn new(customer_id: impl Into<String>, product_ids: Vec<String>) -> Self {
        CreateOrderInput {
            customer_id: customer_id.into(),
            product_ids,
        }
    }
}

/// An order as exposed by the API: the stored row plus its product ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: String,
    pub customer_id: String,
    pub product_ids: Vec<String>,
    /// Snapshot total in cents, taken at creation time.
    pub total_cents: i64,
    pub order_date: DateTime<Utc>,
}

impl OrderView {
    fn from_order(order: Order, product_ids: Vec<String>) -> Self {
        OrderView {
            id: order.id,
            customer_id: order.customer_id,
            product_ids,
            total_cents: order.total_cents,
            order_date: order.order_date,
        }
    }
}

/// Result of an order creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    /// The created order, or `None` when a check failed.
    pub order: Option<OrderView>,
    /// The first failing check; at most one entry.
    pub errors: Vec<String>,
}

impl OrderPayload {
    fn rejected(error: ValidationError) -> Self {
        OrderPayload {
            order: None,
            errors: vec![error.to_string()],
        }
    }
}

/// Filter for listing orders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    /// Keep only orders placed at or after this instant.
    pub order_date_gte: Option<DateTime<Utc>>,
}

/// Creates an order.
///
/// Fail-fast mode: checks run in a fixed sequence (customer, selection,
/// product resolution) and only the first failure is reported.
pub async fn create_order(db: &Database, input: CreateOrderInput) -> Result<OrderPayload, ApiError> {
    debug!(
        customer_id = %input.customer_id,
        products = input.product_ids.len(),
        "create_order"
    );

    // 1. Customer must exist
    if db.customers().get_by_id(&input.customer_id).await?.is_none() {
        return Ok(OrderPayload::rejected(ValidationError::CustomerNotFound));
    }

    // 2. Selection must be non-empty
    if let Err(e) = validate_product_selection(&input.product_ids) {
        return Ok(OrderPayload::rejected(e));
    }

    // 3. Every id must resolve (count comparison catches any unknown id)
    let products = db.products().find_by_ids(&input.product_ids).await?;
    if products.len() != input.product_ids.len() {
        return Ok(OrderPayload::rejected(ValidationError::ProductNotFound));
    }

    // 4-6. Write, associate, then cache the recomputed total
    let order = db.orders().insert(&input.customer_id).await?;
    db.orders()
        .associate_products(&order.id, &input.product_ids)
        .await?;

    let total = order_total(&products);
    db.orders().update_total(&order.id, total.cents()).await?;

    info!(
        id = %order.id,
        customer_id = %order.customer_id,
        total = %total,
        "Order created"
    );

    let product_ids = db.orders().product_ids_for(&order.id).await?;
    let view = OrderView::from_order(
        Order {
            total_cents: total.cents(),
            ..order
        },
        product_ids,
    );

    Ok(OrderPayload {
        order: Some(view),
        errors: Vec::new(),
    })
}

/// Lists orders, optionally restricted by `order_date_gte`, oldest first.
pub async fn list_orders(db: &Database, filter: OrderFilter) -> Result<Vec<OrderView>, ApiError> {
    let orders = match filter.order_date_gte {
        Some(since) => db.orders().list_since(since).await?,
        None => db.orders().list().await?,
    };

    let mut views = Vec::with_capacity(orders.len());
    for order in orders {
        let product_ids = db.orders().product_ids_for(&order.id).await?;
        views.push(OrderView::from_order(order, product_ids));
    }

    Ok(views)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crm_core::NewCustomer;
    use crm_db::DbConfig;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn seed_customer(db: &Database) -> String {
        db.customers()
            .insert(&NewCustomer::new("Alice", "alice@example.com", None))
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_order_computes_total() {
        let db = test_db().await;
        let customer_id = seed_customer(&db).await;

        let laptop = db.products().insert("Laptop", 99999, 10).await.unwrap();
        let phones = db.products().insert("Headphones", 7999, 50).await.unwrap();

        let payload = create_order(
            &db,
            CreateOrderInput::new(&customer_id, vec![laptop.id.clone(), phones.id.clone()]),
        )
        .await
        .unwrap();

        assert!(payload.errors.is_empty());
        let order = payload.order.unwrap();
        assert_eq!(order.total_cents, 107998); // $999.99 + $79.99
        assert_eq!(order.product_ids.len(), 2);
        assert_eq!(order.customer_id, customer_id);

        // The persisted row carries the same snapshot
        let stored = db.orders().get_by_id(&order.id).await.unwrap().unwrap();
        assert_eq!(stored.total_cents, 107998);
    }

    #[tokio::test]
    async fn test_rejects_unknown_customer() {
        let db = test_db().await;

        let payload = create_order(
            &db,
            CreateOrderInput::new("no-such-customer", vec!["whatever".to_string()]),
        )
        .await
        .unwrap();

        assert!(payload.order.is_none());
        assert_eq!(payload.errors, vec!["Invalid customer ID".to_string()]);
        assert_eq!(db.orders().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_rejects_empty_product_list() {
        let db = test_db().await;
        let customer_id = seed_customer(&db).await;

        let payload = create_order(&db, CreateOrderInput::new(&customer_id, vec![]))
            .await
            .unwrap();

        assert!(payload.order.is_none());
        assert_eq!(
            payload.errors,
            vec!["At least one product must be selected".to_string()]
        );
    }

    #[tokio::test]
    async fn test_rejects_unknown_product_among_valid() {
        let db = test_db().await;
        let customer_id = seed_customer(&db).await;
        let laptop = db.products().insert("Laptop", 99999, 10).await.unwrap();

        let payload = create_order(
            &db,
            CreateOrderInput::new(
                &customer_id,
                vec![laptop.id.clone(), "no-such-product".to_string()],
            ),
        )
        .await
        .unwrap();

        assert!(payload.order.is_none());
        assert_eq!(
            payload.errors,
            vec!["One or more product IDs are invalid".to_string()]
        );
        // Nothing was written
        assert_eq!(db.orders().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_checks_run_in_sequence() {
        let db = test_db().await;

        // Unknown customer AND empty list: only the customer check fires
        let payload = create_order(&db, CreateOrderInput::new("no-such-customer", vec![]))
            .await
            .unwrap();
        assert_eq!(payload.errors, vec!["Invalid customer ID".to_string()]);
    }

    #[tokio::test]
    async fn test_order_view_serializes_camel_case() {
        let db = test_db().await;
        let customer_id = seed_customer(&db).await;
        let laptop = db.products().insert("Laptop", 99999, 10).await.unwrap();

        let payload = create_order(&db, CreateOrderInput::new(&customer_id, vec![laptop.id]))
            .await
            .unwrap();

        let json = serde_json::to_value(&payload).unwrap();
        let order = &json["order"];
        assert_eq!(order["customerId"], customer_id);
        assert_eq!(order["totalCents"], 99999);
        assert!(order["productIds"].is_array());
        assert!(order["orderDate"].is_string());
        assert!(json["errors"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_orders_with_date_filter() {
        let db = test_db().await;
        let customer_id = seed_customer(&db).await;
        let laptop = db.products().insert("Laptop", 99999, 10).await.unwrap();

        create_order(&db, CreateOrderInput::new(&customer_id, vec![laptop.id.clone()]))
            .await
            .unwrap();

        let all = list_orders(&db, OrderFilter::default()).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].product_ids, vec![laptop.id.clone()]);

        let recent = list_orders(
            &db,
            OrderFilter {
                order_date_gte: Some(Utc::now() - Duration::days(7)),
            },
        )
        .await
        .unwrap();
        assert_eq!(recent.len(), 1);

        let future = list_orders(
            &db,
            OrderFilter {
                order_date_gte: Some(Utc::now() + Duration::days(1)),
            },
        )
        .await
        .unwrap();
        assert!(future.is_empty());
    }
}
