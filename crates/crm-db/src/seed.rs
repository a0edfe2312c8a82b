//! # Sample Data Seeding
//!
//! Idempotently inserts a fixed set of sample customers and products.
//!
//! Matching is get-or-create on the full field set, so running the seeder
//! any number of times yields the same final record counts as running it
//! once. Orders are never seeded.

use tracing::info;

use crate::error::DbResult;
use crate::pool::Database;
use crm_core::NewCustomer;

/// The fixed sample customers: (name, email, phone).
const SAMPLE_CUSTOMERS: &[(&str, &str, Option<&str>)] = &[
    ("Alice", "alice@example.com", Some("+1234567890")),
    ("Bob", "bob@example.com", Some("123-456-7890")),
    ("Carol", "carol@example.com", None),
];

/// The fixed sample products: (name, price in cents, stock).
const SAMPLE_PRODUCTS: &[(&str, i64, i64)] = &[
    ("Laptop", 99999, 10),    // $999.99
    ("Phone", 49999, 25),     // $499.99
    ("Headphones", 7999, 50), // $79.99
];

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Customers newly created this run (0 on a repeat run).
    pub customers_created: usize,
    /// Products newly created this run (0 on a repeat run).
    pub products_created: usize,
}

/// Seeds the sample customers and products.
///
/// ## Idempotence
/// Each record is matched by its full field set before insertion; repeat
/// runs create nothing and report zero counts.
pub async fn seed_sample_data(db: &Database) -> DbResult<SeedSummary> {
    let mut summary = SeedSummary {
        customers_created: 0,
        products_created: 0,
    };

    for (name, email, phone) in SAMPLE_CUSTOMERS {
        let input = NewCustomer::new(*name, *email, *phone);
        let (_, created) = db.customers().get_or_create(&input).await?;
        if created {
            summary.customers_created += 1;
        }
    }

    for (name, price_cents, stock) in SAMPLE_PRODUCTS {
        let (_, created) = db
            .products()
            .get_or_create(name, *price_cents, *stock)
            .await?;
        if created {
            summary.products_created += 1;
        }
    }

    info!(
        customers_created = summary.customers_created,
        products_created = summary.products_created,
        "Seeding complete"
    );

    Ok(summary)
}

// =============================================================================
// Unit Tests
// =============================================================================
