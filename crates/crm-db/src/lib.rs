//! # crm-db: Database Layer for the CRM
//!
//! This crate provides database access for the CRM backend. It uses SQLite
//! for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         CRM Data Flow                               │
//! │                                                                     │
//! │  Facade operation (create_order)                                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                   crm-db (THIS CRATE)                       │   │
//! │  │                                                             │   │
//! │  │   ┌─────────────┐   ┌───────────────┐   ┌──────────────┐   │   │
//! │  │   │  Database   │   │ Repositories  │   │  Migrations  │   │   │
//! │  │   │  (pool.rs)  │   │ customer.rs   │   │  (embedded)  │   │   │
//! │  │   │             │◄──│ product.rs    │   │ 001_init.sql │   │   │
//! │  │   │ SqlitePool  │   │ order.rs      │   │              │   │   │
//! │  │   └─────────────┘   └───────────────┘   └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (or :memory: in tests)                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (customer, product, order)
//! - [`seed`] - Idempotent sample-data seeding
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crm_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/crm.db")).await?;
//! let customers = db.customers().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::order::OrderRepository;
pub use repository::product::ProductRepository;
