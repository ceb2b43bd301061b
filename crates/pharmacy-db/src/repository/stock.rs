//! # Stock Repository
//!
//! Database operations for the `Stock` table.
//!
//! ## Stock Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Stock is a log of additions, not a balance per medicine               │
//! │                                                                         │
//! │  add(medicine 1, 100)  → row 1: (1, 100)                               │
//! │  add(medicine 1,  20)  → row 2: (1,  20)    ← never merged into row 1  │
//! │  sale(medicine 1,  30) → row 2: (1, -10)    ← latest row takes the hit │
//! │                                                                         │
//! │  total_for_medicine(1) = 100 + (-10) = 90                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals have no floor. Overselling leaves a negative total on record.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use pharmacy_core::{NewStock, StockEntry};

/// Repository for stock database operations.
#[derive(Debug, Clone)]
pub struct StockRepository {
    pool: SqlitePool,
}

impl StockRepository {
    /// Creates a new StockRepository.
    pub fn new(pool: SqlitePool) -> Self {
        StockRepository { pool }
    }

    /// Inserts one stock addition row.
    ///
    /// Unconditional: the medicine is not looked up (unless the store was
    /// opened with foreign key enforcement) and existing rows for the same
    /// medicine are left alone.
    pub async fn add(&self, stock: &NewStock) -> DbResult<StockEntry> {
        debug!(
            medicine_id = stock.medicine_id,
            quantity = stock.quantity,
            "Inserting stock row"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO Stock (medicine_id, quantity)
            VALUES (?1, ?2)
            "#,
        )
        .bind(stock.medicine_id)
        .bind(stock.quantity)
        .execute(&self.pool)
        .await?;

        Ok(StockEntry {
            id: result.last_insert_rowid(),
            medicine_id: stock.medicine_id,
            quantity: stock.quantity,
        })
    }

    /// Lists every stock row in id order.
    pub async fn list(&self) -> DbResult<Vec<StockEntry>> {
        let entries = sqlx::query_as::<_, StockEntry>(
            r#"
            SELECT
                stock_id AS id,
                medicine_id,
                quantity
            FROM Stock
            ORDER BY stock_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = entries.len(), "Listed stock rows");
        Ok(entries)
    }

    /// Sum of all stock rows for one medicine. Zero when it has none.
    pub async fn total_for_medicine(&self, medicine_id: i64) -> DbResult<i64> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(quantity), 0)
            FROM Stock
            WHERE medicine_id = ?1
            "#,
        )
        .bind(medicine_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}
