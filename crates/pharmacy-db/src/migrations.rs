//! # Database Migrations
//!
//! Embedded SQL migrations that create the pharmacy schema.
//!
//! ## How Migrations Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Migration Process                                  │
//! │                                                                         │
//! │  PharmacyStore::initialize()                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Check _sqlx_migrations table                                          │
//! │       │                                                                 │
//! │       ├── Table doesn't exist? Create it                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Compare embedded migrations vs applied                                │
//! │       │                                                                 │
//! │       └── 001_initial_schema.sql  (CREATE TABLE IF NOT EXISTS × 5)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Run pending migrations in order, record in _sqlx_migrations           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `pharmacy.db` written before migrations were tracked has the tables but
//! no `_sqlx_migrations` row. Migration 001 runs against it and every
//! `IF NOT EXISTS` is a no-op, so its rows survive.
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/sqlite/` with the next sequence number
//! 2. Name format: `NNN_description.sql`
//! 3. Write idempotent SQL (use `IF NOT EXISTS` where possible)
//! 4. **NEVER** modify existing migrations - always add new ones

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrations from the workspace `migrations/sqlite` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Names of the record tables created by the schema.
pub const TABLES: [&str; 5] = ["Customers", "Medicines", "Stock", "Sales", "Pharmacists"];

/// Runs all pending database migrations.
///
/// ## Safety
/// - Idempotent: safe to run multiple times
/// - Transactional: each migration runs in a transaction
/// - Ordered: migrations run in filename order (001, 002, ...)
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied successfully");
    Ok(())
}

/// Returns information about migrations.
///
/// ## Returns
/// Tuple of (total_migrations, applied_migrations)
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let tracked: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_one(pool)
    .await?;

    // Zero when the bookkeeping table hasn't been created yet
    let applied: i64 = if tracked == 0 {
        0
    } else {
        sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
            .fetch_one(pool)
            .await?
    };

    Ok((total, applied as usize))
}

/// Lists which of the record tables currently exist, in [`TABLES`] order.
pub async fn existing_tables(pool: &SqlitePool) -> DbResult<Vec<String>> {
    let names: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table'")
            .fetch_all(pool)
            .await?;

    Ok(TABLES
        .iter()
        .filter(|table| names.iter().any(|n| n == *table))
        .map(|table| table.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DbConfig, PharmacyStore};

    #[tokio::test]
    async fn test_initialize_creates_all_tables() {
        let store = PharmacyStore::new(DbConfig::in_memory()).await.unwrap();

        let tables = existing_tables(store.pool()).await.unwrap();
        assert_eq!(tables, TABLES.iter().map(|t| t.to_string()).collect::<Vec<_>>());

        let (total, applied) = migration_status(store.pool()).await.unwrap();
        assert_eq!(total, applied);
    }

    #[tokio::test]
    async fn test_store_without_migrations_has_no_tables() {
        let store = PharmacyStore::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap();

        assert!(existing_tables(store.pool()).await.unwrap().is_empty());
        let (total, applied) = migration_status(store.pool()).await.unwrap();
        assert_eq!((total, applied), (1, 0));
    }

    #[tokio::test]
    async fn test_migration_status_reports_closed_pool() {
        let store = PharmacyStore::new(DbConfig::in_memory()).await.unwrap();
        store.close().await;

        let err = migration_status(store.pool()).await.unwrap_err();
        assert!(matches!(err, crate::DbError::ConnectionFailed(_)));
    }

    #[tokio::test]
    async fn test_adopts_file_created_without_migrations() {
        let store = PharmacyStore::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap();

        // A table as an earlier release would have left it, with a row in it
        sqlx::query(
            "CREATE TABLE Customers (customer_id INTEGER PRIMARY KEY, name TEXT NOT NULL, phone TEXT, address TEXT)",
        )
        .execute(store.pool())
        .await
        .unwrap();
        sqlx::query("INSERT INTO Customers (name, phone, address) VALUES ('Ann', '1', 'A')")
            .execute(store.pool())
            .await
            .unwrap();

        store.initialize().await.unwrap();

        assert_eq!(existing_tables(store.pool()).await.unwrap().len(), TABLES.len());
        let customers = store.customers().list().await.unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].name, "Ann");
    }
}
