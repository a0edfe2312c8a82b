//! # Customer Repository
//!
//! Database operations for customers.
//!
//! Customers are create-and-list only: no update or delete path exists in
//! the API surface, so none exists here.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use crm_core::{Customer, NewCustomer};

/// Repository for customer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CustomerRepository::new(pool);
///
/// if !repo.email_exists("alice@example.com").await? {
///     repo.insert(&input).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Inserts a new customer.
    ///
    /// ## Returns
    /// * `Ok(Customer)` - The stored record with generated id and timestamp
    /// * `Err(DbError::UniqueViolation)` - Email already exists (the UNIQUE
    ///   index backstops the facade's pre-check under concurrent inserts)
    pub async fn insert(&self, new: &NewCustomer) -> DbResult<Customer> {
        debug!(email = %new.email, "Inserting customer");

        let customer = Customer {
            id: Uuid::new_v4().to_string(),
            name: new.name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, phone, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(customer.created_at)
        .execute(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Lists all customers, oldest first.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, created_at
            FROM customers
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    /// Gets a customer by ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Customer))` - Customer found
    /// * `Ok(None)` - Customer not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, created_at
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Gets a customer by email (the business key).
    pub async fn get_by_email(&self, email: &str) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, created_at
            FROM customers
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Checks whether any customer already owns this exact email.
    pub async fn email_exists(&self, email: &str) -> DbResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM customers WHERE email = ?1")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }

    /// Gets the customer matching every field of `new`, or creates it.
    ///
    /// Seed path: matching is on the full field set, so re-running the
    /// seeder never duplicates a sample customer.
    ///
    /// ## Returns
    /// `(customer, created)` where `created` is false on a match.
    pub async fn get_or_create(&self, new: &NewCustomer) -> DbResult<(Customer, bool)> {
        let existing = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, created_at
            FROM customers
            WHERE name = ?1 AND email = ?2 AND phone IS ?3
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(customer) = existing {
            return Ok((customer, false));
        }

        let customer = self.insert(new).await?;
        Ok((customer, true))
    }

    /// Counts customers (for diagnostics and seeding reports).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
