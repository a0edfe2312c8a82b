//! # Order Reminders
//!
//! One-shot reporter: finds every order placed in the lookback window
//! (default 7 days) and appends one reminder line per order to a log file.
//!
//! ## Usage
//! ```bash
//! cargo run -p crm-api --bin order_reminders
//!
//! # Override the defaults
//! CRM_DB=./data/crm.db \
//! REMINDER_LOG=/var/log/order_reminders.log \
//! REMINDER_LOOKBACK_DAYS=14 \
//!   cargo run -p crm-api --bin order_reminders
//! ```
//!
//! Each run appends; earlier reminder lines are kept. Output lines look
//! like:
//! ```text
//! 2026-08-29T12:00:00+00:00 - Reminder: Order 3f2a... for customer alice@example.com
//! ```

use std::env;
use std::fs::OpenOptions;
use std::io::Write;

use chrono::{Duration, Utc};
use tracing::{error, info};

use crm_db::{Database, DbConfig};

struct ReminderConfig {
    db_path: String,
    log_path: String,
    lookback_days: i64,
}

impl ReminderConfig {
    /// Reads configuration from the environment, falling back to defaults.
    fn from_env() -> Self {
        let db_path = env::var("CRM_DB").unwrap_or_else(|_| "./crm_dev.db".to_string());
        let log_path = env::var("REMINDER_LOG")
            .unwrap_or_else(|_| "/tmp/order_reminders_log.txt".to_string());
        let lookback_days = env::var("REMINDER_LOOKBACK_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(7);

        ReminderConfig {
            db_path,
            log_path,
            lookback_days,
        }
    }
}

async fn run(config: &ReminderConfig) -> Result<usize, Box<dyn std::error::Error>> {
    let db = Database::new(DbConfig::new(&config.db_path)).await?;

    let since = Utc::now() - Duration::days(config.lookback_days);
    let reminders = db.orders().reminders_since(since).await?;

    let mut log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;

    let now = Utc::now();
    for reminder in &reminders {
        writeln!(
            log,
            "{} - Reminder: Order {} for customer {}",
            now.to_rfc3339(),
            reminder.order_id,
            reminder.customer_email
        )?;
    }

    db.close().await;

    Ok(reminders.len())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ReminderConfig::from_env();
    info!(
        db = %config.db_path,
        log = %config.log_path,
        lookback_days = config.lookback_days,
        "Running order reminders"
    );

    match run(&config).await {
        Ok(count) => {
            info!(count, "Reminders written");
            println!("Order reminders processed!");
        }
        Err(e) => {
            error!("Order reminders failed: {}", e);
            eprintln!("Order reminders failed: {}", e);
            std::process::exit(1);
        }
    }
}
