//! # Customer Operations
//!
//! Mutations: `create_customer`, `bulk_create_customers`.
//! Queries: `list_customers`.
//!
//! ## Validation Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  create_customer (collect-errors)                                   │
//! │      Check email uniqueness AND phone format, report every         │
//! │      violation in one payload.                                     │
//! │                                                                     │
//! │  bulk_create_customers (per-item fail-fast, never fatal)           │
//! │      Validate each item independently; the first violation skips   │
//! │      that item, records one error string, and the loop continues.  │
//! │      Successes and failures are both reported - callers must       │
//! │      inspect both lists.                                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crm_core::validation::validate_phone;
use crm_core::{Customer, NewCustomer, ValidationError};
use crm_db::Database;

/// Result of a single customer creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    /// The created customer, or `None` when validation failed.
    pub customer: Option<Customer>,
    /// Human-readable outcome summary.
    pub message: String,
    /// Every violated rule; empty on success.
    pub errors: Vec<String>,
}

/// Result of a bulk customer creation.
///
/// Never fatal per item: both lists must be inspected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCustomersPayload {
    /// Every customer that was created this call, in input order.
    pub customers: Vec<Customer>,
    /// One string per skipped item, in input order.
    pub errors: Vec<String>,
}

/// Creates a single customer.
///
/// Collect-errors mode: email uniqueness and phone format are both
/// checked, and every violation is reported together.
pub async fn create_customer(
    db: &Database,
    input: NewCustomer,
) -> Result<CustomerPayload, ApiError> {
    debug!(email = %input.email, "create_customer");

    let mut errors = Vec::new();

    // Email uniqueness (against current store state)
    if db.customers().email_exists(&input.email).await? {
        errors.push(ValidationError::DuplicateEmail.to_string());
    }

    // Phone format (only when present)
    if let Some(phone) = &input.phone {
        if let Err(e) = validate_phone(phone) {
            errors.push(e.to_string());
        }
    }

    if !errors.is_empty() {
        return Ok(CustomerPayload {
            customer: None,
            message: "Customer creation failed".to_string(),
            errors,
        });
    }

    let customer = match db.customers().insert(&input).await {
        Ok(customer) => customer,
        // The UNIQUE index caught a concurrent insert between our
        // pre-check and the write; report it as the same rule failure.
        Err(e) if e.is_unique_violation() => {
            return Ok(CustomerPayload {
                customer: None,
                message: "Customer creation failed".to_string(),
                errors: vec![ValidationError::DuplicateEmail.to_string()],
            });
        }
        Err(e) => return Err(e.into()),
    };

    info!(id = %customer.id, email = %customer.email, "Customer created");

    Ok(CustomerPayload {
        customer: Some(customer),
        message: "Customer created successfully!".to_string(),
        errors: Vec::new(),
    })
}

/// Creates customers in bulk.
///
/// Each item is validated independently (fail-fast per item); a failure
/// skips that item, records its message, and the loop continues. The call
/// itself only fails on a storage problem.
pub async fn bulk_create_customers(
    db: &Database,
    inputs: Vec<NewCustomer>,
) -> Result<BulkCustomersPayload, ApiError> {
    debug!(count = inputs.len(), "bulk_create_customers");

    let mut customers = Vec::new();
    let mut errors = Vec::new();

    for input in &inputs {
        // Uniqueness first: also catches duplicates earlier in this batch
        if db.customers().email_exists(&input.email).await? {
            errors.push(format!("Email already exists: {}", input.email));
            continue;
        }

        if let Some(phone) = &input.phone {
            if validate_phone(phone).is_err() {
                errors.push(format!("Invalid phone format: {}", phone));
                continue;
            }
        }

        match db.customers().insert(input).await {
            Ok(customer) => customers.push(customer),
            Err(e) if e.is_unique_violation() => {
                errors.push(format!("Email already exists: {}", input.email));
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!(
        created = customers.len(),
        skipped = errors.len(),
        "Bulk customer creation finished"
    );

    Ok(BulkCustomersPayload { customers, errors })
}

/// Lists all customers. Reads bypass validation entirely.
pub async fn list_customers(db: &Database) -> Result<Vec<Customer>, ApiError> {
    Ok(db.customers().list().await?)
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
    async fn test_create_customer_success() {
        let db = test_db().await;

        let payload = create_customer(
            &db,
            NewCustomer::new("Alice", "alice@example.com", Some("+12345678901")),
        )
        .await
        .unwrap();

        assert!(payload.errors.is_empty());
        assert_eq!(payload.message, "Customer created successfully!");
        let customer = payload.customer.unwrap();
        assert_eq!(customer.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_one_success_one_failure() {
        let db = test_db().await;

        let first = create_customer(&db, NewCustomer::new("Alice", "dup@x.com", None))
            .await
            .unwrap();
        assert!(first.customer.is_some());

        let second = create_customer(&db, NewCustomer::new("Bob", "dup@x.com", None))
            .await
            .unwrap();
        assert!(second.customer.is_none());
        assert_eq!(second.message, "Customer creation failed");
        assert_eq!(second.errors, vec!["Email already exists".to_string()]);

        // Exactly one record made it in
        assert_eq!(list_customers(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_phone_formats() {
        let db = test_db().await;

        // Accepted formats
        let ok = create_customer(
            &db,
            NewCustomer::new("A", "a@x.com", Some("+12345678901")),
        )
        .await
        .unwrap();
        assert!(ok.customer.is_some());

        let ok = create_customer(&db, NewCustomer::new("B", "b@x.com", Some("123-456-7890")))
            .await
            .unwrap();
        assert!(ok.customer.is_some());

        // Rejected formats
        let bad = create_customer(&db, NewCustomer::new("C", "c@x.com", Some("12345")))
            .await
            .unwrap();
        assert!(bad.customer.is_none());
        assert_eq!(
            bad.errors,
            vec!["Invalid phone format. Use +1234567890 or 123-456-7890".to_string()]
        );

        let bad = create_customer(
            &db,
            NewCustomer::new("D", "d@x.com", Some("abc-def-ghij")),
        )
        .await
        .unwrap();
        assert!(bad.customer.is_none());
    }

    #[tokio::test]
    async fn test_collect_errors_reports_both_violations() {
        let db = test_db().await;

        create_customer(&db, NewCustomer::new("Alice", "dup@x.com", None))
            .await
            .unwrap();

        // Duplicate email AND bad phone: both reported in one payload
        let payload = create_customer(&db, NewCustomer::new("Bob", "dup@x.com", Some("12345")))
            .await
            .unwrap();
        assert!(payload.customer.is_none());
        assert_eq!(payload.errors.len(), 2);
    }

    #[tokio::test]
    async fn test_bulk_create_skips_failures_and_continues() {
        let db = test_db().await;

        // Pre-existing duplicate target
        create_customer(&db, NewCustomer::new("Existing", "dup@x.com", None))
            .await
            .unwrap();

        let payload = bulk_create_customers(
            &db,
            vec![
                NewCustomer::new("Alice", "dup@x.com", None),
                NewCustomer::new("Bob", "dup@x.com", None),
                NewCustomer::new("Carol", "new@x.com", None),
            ],
        )
        .await
        .unwrap();

        // Exactly one created (Carol), two error strings
        assert_eq!(payload.customers.len(), 1);
        assert_eq!(payload.customers[0].name, "Carol");
        assert_eq!(
            payload.errors,
            vec![
                "Email already exists: dup@x.com".to_string(),
                "Email already exists: dup@x.com".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_bulk_create_reports_bad_phone_with_value() {
        let db = test_db().await;

        let payload = bulk_create_customers(
            &db,
            vec![
                NewCustomer::new("Alice", "a@x.com", Some("12345")),
                NewCustomer::new("Bob", "b@x.com", Some("123-456-7890")),
            ],
        )
        .await
        .unwrap();

        assert_eq!(payload.customers.len(), 1);
        assert_eq!(payload.errors, vec!["Invalid phone format: 12345".to_string()]);
    }

    #[tokio::test]
    async fn test_bulk_catches_duplicates_within_batch() {
        let db = test_db().await;

        let payload = bulk_create_customers(
            &db,
            vec![
                NewCustomer::new("Alice", "same@x.com", None),
                NewCustomer::new("Bob", "same@x.com", None),
            ],
        )
        .await
        .unwrap();

        assert_eq!(payload.customers.len(), 1);
        assert_eq!(payload.customers[0].name, "Alice");
        assert_eq!(
            payload.errors,
            vec!["Email already exists: same@x.com".to_string()]
        );
    }
}
