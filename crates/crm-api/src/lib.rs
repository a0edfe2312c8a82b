//! # crm-api: Query/Mutation Facade
//!
//! The operation layer of the CRM backend. Each module maps one entity's
//! external operations onto crm-core validation and crm-db storage.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Mutation Control Flow                          │
//! │                                                                     │
//! │  Request                                                           │
//! │     │                                                               │
//! │     ▼                                                               │
//! │  Validation (crm-core rules + store-state checks)                  │
//! │     │                                                               │
//! │     ├── violations → payload { entity: None, errors: [...] }       │
//! │     │                                                               │
//! │     ▼                                                               │
//! │  Store write (crm-db repositories)                                 │
//! │     │                                                               │
//! │     ▼  (orders only)                                                │
//! │  Recompute total → persist                                         │
//! │     │                                                               │
//! │     ▼                                                               │
//! │  payload { entity: Some(..), errors: [] }                          │
//! │                                                                     │
//! │  Reads bypass validation entirely and go straight to the store.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Convention
//! One convention, applied uniformly: every mutation returns a payload
//! carrying the created entity (or `None`) and an `errors` list that is
//! empty on full success. `ApiError` is reserved for transport/storage
//! failures - a failed validation is a successful API call.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod customer;
pub mod error;
pub mod order;
pub mod product;

// =============================================================================
// Re-exports
// =============================================================================

pub use customer::{
    bulk_create_customers, create_customer, list_customers, BulkCustomersPayload,
    CustomerPayload,
};
pub use error::{ApiError, ErrorCode};
pub use order::{create_order, list_orders, CreateOrderInput, OrderFilter, OrderPayload, OrderView};
pub use product::{create_product, list_products, CreateProductInput, ProductPayload};
