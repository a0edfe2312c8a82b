//! # Domain Types
//!
//! Core domain types used throughout the CRM.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Customer     │   │     Product     │   │      Order      │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │   │
//! │  │  name           │   │  name           │   │  customer_id    │   │
//! │  │  email (unique) │   │  price_cents    │   │  total_cents    │   │
//! │  │  phone?         │   │  stock          │   │  order_date     │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘   │
//! │                                                                     │
//! │  Order ↔ Product is many-to-many through an explicit join table    │
//! │  (order_products), owned by crm-db.                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity has an `id`: UUID v4 string, immutable, used for database
//! relations. Email doubles as the customer's business key (unique).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Customer
// =============================================================================

/// A customer record.
///
/// Customers are immutable once created: there is no update or delete
/// path, only creation and listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name (free text).
    pub name: String,

    /// Email address - unique across all customers.
    pub email: String,

    /// Optional phone number. When present it has already passed the
    /// `+<10-15 digits>` / `ddd-ddd-dddd` format check.
    pub phone: Option<String>,

    /// When the customer was created.
    pub created_at: DateTime<Utc>,
}

/// Input for creating a customer (single or bulk).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl NewCustomer {
    /// Convenience constructor, mostly for tests and seeding.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<&str>,
    ) -> Self {
        NewCustomer {
            name: name.into(),
            email: email.into(),
            phone: phone.map(str::to_string),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price in cents (smallest currency unit). Strictly positive.
    pub price_cents: i64,

    /// Units in stock. Never negative; defaults to 0.
    pub stock: i64,

    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order placed by one customer for one or more products.
///
/// The associated product set lives in the `order_products` join table and
/// is loaded separately by the repository layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Owning customer (many orders per customer).
    pub customer_id: String,

    /// Cached derived total in cents. See [`order_total`].
    pub total_cents: i64,

    /// Assigned at creation, immutable.
    pub order_date: DateTime<Utc>,
}

impl Order {
    /// Returns the cached total as a Money type.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// Derives an order's total from its associated products.
///
/// ## Snapshot Semantics
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │  Order save sequence:                                               │
/// │                                                                     │
/// │  1. insert order           → total_cents = 0                        │
/// │  2. associate products     → join rows written                      │
/// │  3. order_total(products)  → THIS FUNCTION                          │
/// │  4. persist total          → total_cents cached                     │
/// │                                                                     │
/// │  The total is a snapshot of prices at save time. It is NOT          │
/// │  recomputed on read, so a later product price change leaves the     │
/// │  stored total stale. Orders record what the customer agreed to      │
/// │  pay, not today's catalog price.                                    │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Example
/// ```rust
/// use chrono::Utc;
/// use crm_core::types::{order_total, Product};
///
/// let products = vec![
///     Product {
///         id: "a".into(),
///         name: "Laptop".into(),
///         price_cents: 99999,
///         stock: 10,
///         created_at: Utc::now(),
///     },
///     Product {
///         id: "b".into(),
///         name: "Headphones".into(),
///         price_cents: 7999,
///         stock: 50,
///         created_at: Utc::now(),
///     },
/// ];
///
/// assert_eq!(order_total(&products).cents(), 107998); // $1079.98
/// ```
pub fn order_total(products: &[Product]) -> Money {
    products.iter().map(Product::price).sum()
}

// =============================================================================
// Unit Tests
// =============================================================================
