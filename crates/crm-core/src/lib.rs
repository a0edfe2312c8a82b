//! # crm-core: Pure Business Logic for the CRM
//!
//! This crate is the heart of the CRM backend. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        CRM Architecture                             │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  crm-api (facade)                           │   │
//! │  │   create_customer, bulk_create_customers, create_product,   │   │
//! │  │   create_order, list_* queries                              │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │                                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │             ★ crm-core (THIS CRATE) ★                       │   │
//! │  │                                                             │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌───────────┐ │   │
//! │  │   │  types   │  │  money   │  │  error   │  │ validation│ │   │
//! │  │   │ Customer │  │  Money   │  │ rule     │  │  phone    │ │   │
//! │  │   │ Product  │  │  cents   │  │ failures │  │  price    │ │   │
//! │  │   │ Order    │  │          │  │          │  │  stock    │ │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └───────────┘ │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS       │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │                                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │                  crm-db (Database Layer)                    │   │
//! │  │          SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, Product, Order) and the order
//!   total calculator
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error taxonomy
//! - [`validation`] - Field-level rule checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use crm_core::Money` instead of
// `use crm_core::money::Money`

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use types::*;
