//! # Repository Module
//!
//! Database repository implementations for the CRM.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                               │
//! │                                                                     │
//! │  Facade operation                                                  │
//! │       │                                                             │
//! │       │  db.customers().email_exists("a@x.com")                    │
//! │       ▼                                                             │
//! │  CustomerRepository                                                │
//! │  ├── insert(&self, new)                                            │
//! │  ├── list(&self)                                                   │
//! │  └── email_exists(&self, email)                                    │
//! │       │                                                             │
//! │       │  SQL Query                                                  │
//! │       ▼                                                             │
//! │  SQLite Database                                                   │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • Clean separation of concerns                                    │
//! │  • SQL is isolated in one place                                    │
//! │  • Repositories are testable against :memory: databases            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`customer::CustomerRepository`] - Customer creation and lookup
//! - [`product::ProductRepository`] - Product creation and id resolution
//! - [`order::OrderRepository`] - Order lifecycle and association table

pub mod customer;
pub mod order;
pub mod product;
