//! # Seed Binary
//!
//! Populates the database with the fixed sample customers and products.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p crm-db --bin seed
//!
//! # Specify database path
//! cargo run -p crm-db --bin seed -- --db ./data/crm.db
//! ```
//!
//! Safe to run repeatedly: records are matched by field before insertion.

use std::env;

use crm_db::seed::seed_sample_data;
use crm_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./crm_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("CRM Seed Data Loader");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./crm_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("CRM Seed Data Loader");
    println!("====================");
    println!("Database: {}", db_path);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let summary = seed_sample_data(&db).await?;

    println!();
    println!(
        "✓ Seeded {} customers, {} products",
        summary.customers_created, summary.products_created
    );
    if summary.customers_created == 0 && summary.products_created == 0 {
        println!("  (sample data was already present)");
    }

    println!();
    println!(
        "Totals: {} customers, {} products",
        db.customers().count().await?,
        db.products().count().await?
    );

    println!();
    println!("✓ Database seeded successfully!");

    Ok(())
}
