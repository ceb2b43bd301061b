//! # Sale Repository
//!
//! Database operations for the `Sales` table.
//!
//! ## Recording a Sale
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   SINGLE TRANSACTION                                    │
//! │                                                                         │
//! │  1. INSERT INTO Sales (customer_id, medicine_id, quantity, sale_date)  │
//! │                                                                         │
//! │  2. UPDATE Stock SET quantity = quantity - ?                           │
//! │     WHERE stock_id = latest row for the medicine                       │
//! │                                                                         │
//! │     0 rows updated? → INSERT INTO Stock (medicine_id, -quantity)        │
//! │                                                                         │
//! │  COMMIT ← Both succeed or both fail                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A medicine that was never stocked still sells: the missing stock shows up
//! as a negative row instead of an error, so the stock total always drops by
//! exactly the quantity sold.
//!
//! The decrement is a single SQL expression, so two sales against the same
//! medicine serialize on SQLite's write lock instead of racing a
//! read-modify-write.

use chrono::{Local, NaiveDate};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use pharmacy_core::{NewSale, Sale};

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Records a sale dated today (local time) and decrements stock.
    ///
    /// See [`SaleRepository::record_on`].
    pub async fn record(&self, sale: &NewSale) -> DbResult<Sale> {
        self.record_on(sale, Local::now().date_naive()).await
    }

    /// Records a sale with an explicit date and decrements stock.
    ///
    /// ## What This Does
    /// 1. Inserts the sale row
    /// 2. Subtracts `quantity` from the medicine's most recent stock row, or
    ///    inserts a `-quantity` row when the medicine has none
    /// 3. Commits both, or neither
    ///
    /// ## Not Checked
    /// - Whether the customer or medicine exists (unless foreign keys are
    ///   enforced)
    /// - Whether enough stock is available: the total may go negative
    pub async fn record_on(&self, sale: &NewSale, sale_date: NaiveDate) -> DbResult<Sale> {
        debug!(
            customer_id = sale.customer_id,
            medicine_id = sale.medicine_id,
            quantity = sale.quantity,
            %sale_date,
            "Recording sale"
        );

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO Sales (customer_id, medicine_id, quantity, sale_date)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(sale.customer_id)
        .bind(sale.medicine_id)
        .bind(sale.quantity)
        .bind(sale_date)
        .execute(&mut *tx)
        .await?;

        let decremented = sqlx::query(
            r#"
            UPDATE Stock
            SET quantity = quantity - ?1
            WHERE stock_id = (
                SELECT MAX(stock_id) FROM Stock WHERE medicine_id = ?2
            )
            "#,
        )
        .bind(sale.quantity)
        .bind(sale.medicine_id)
        .execute(&mut *tx)
        .await?;

        if decremented.rows_affected() == 0 {
            debug!(
                medicine_id = sale.medicine_id,
                "No stock row to decrement, recording shortfall"
            );
            sqlx::query(
                r#"
                INSERT INTO Stock (medicine_id, quantity)
                VALUES (?1, ?2)
                "#,
            )
            .bind(sale.medicine_id)
            .bind(-sale.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let recorded = Sale {
            id: inserted.last_insert_rowid(),
            customer_id: sale.customer_id,
            medicine_id: sale.medicine_id,
            quantity: sale.quantity,
            sale_date,
        };

        info!(sale_id = recorded.id, medicine_id = recorded.medicine_id, "Sale recorded");
        Ok(recorded)
    }

    /// Lists every sale in id order.
    pub async fn list(&self) -> DbResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT
                sale_id AS id,
                customer_id,
                medicine_id,
                quantity,
                sale_date
            FROM Sales
            ORDER BY sale_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = sales.len(), "Listed sales");
        Ok(sales)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DbConfig, PharmacyStore};
    use pharmacy_core::{NewCustomer, NewMedicine, NewStock};

    async fn store_with_stock(quantity: i64) -> PharmacyStore {
        let store = PharmacyStore::new(DbConfig::in_memory()).await.unwrap();
        store
            .customers()
            .add(&NewCustomer::new("Jane", "555-0100", "1 Elm St"))
            .await
            .unwrap();
        store
            .medicines()
            .add(&NewMedicine::new("Aspirin", "Bayer", 5.0))
            .await
            .unwrap();
        store.stock().add(&NewStock::new(1, quantity)).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_record_inserts_sale_with_date() {
        let store = store_with_stock(100).await;
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        let sale = store
            .sales()
            .record_on(&NewSale::new(1, 1, 10), date)
            .await
            .unwrap();

        assert_eq!(sale.id, 1);
        assert_eq!(store.sales().list().await.unwrap(), vec![sale]);
        assert_eq!(store.stock().total_for_medicine(1).await.unwrap(), 90);
    }

    #[tokio::test]
    async fn test_record_uses_today() {
        let store = store_with_stock(100).await;

        let sale = store.sales().record(&NewSale::new(1, 1, 1)).await.unwrap();

        assert_eq!(sale.sale_date, Local::now().date_naive());
    }

    #[tokio::test]
    async fn test_only_latest_stock_row_is_decremented() {
        let store = store_with_stock(100).await;
        store.stock().add(&NewStock::new(1, 20)).await.unwrap();

        store.sales().record(&NewSale::new(1, 1, 30)).await.unwrap();

        let quantities: Vec<i64> = store
            .stock()
            .list()
            .await
            .unwrap()
            .iter()
            .map(|row| row.quantity)
            .collect();
        assert_eq!(quantities, vec![100, -10]);
        assert_eq!(store.stock().total_for_medicine(1).await.unwrap(), 90);
    }

    #[tokio::test]
    async fn test_overselling_goes_negative() {
        let store = store_with_stock(5).await;

        store.sales().record(&NewSale::new(1, 1, 8)).await.unwrap();

        assert_eq!(store.stock().total_for_medicine(1).await.unwrap(), -3);
    }

    #[tokio::test]
    async fn test_sale_without_stock_row_records_shortfall() {
        let store = store_with_stock(100).await;
        store
            .medicines()
            .add(&NewMedicine::new("Ibuprofen", "Advil", 6.5))
            .await
            .unwrap();

        let sale = store.sales().record(&NewSale::new(1, 2, 3)).await.unwrap();

        assert_eq!(store.sales().list().await.unwrap(), vec![sale]);
        let rows = store.stock().list().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[1].medicine_id, rows[1].quantity), (2, -3));
        assert_eq!(store.stock().total_for_medicine(2).await.unwrap(), -3);
        assert_eq!(store.stock().total_for_medicine(1).await.unwrap(), 100);
    }

    #[tokio::test]
    async fn test_later_sales_decrement_the_shortfall_row() {
        let store = store_with_stock(100).await;

        store.sales().record(&NewSale::new(1, 9, 2)).await.unwrap();
        store.sales().record(&NewSale::new(1, 9, 5)).await.unwrap();

        assert_eq!(store.stock().total_for_medicine(9).await.unwrap(), -7);
        assert_eq!(store.stock().list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_customer_is_accepted_by_default() {
        let store = store_with_stock(10).await;

        let sale = store.sales().record(&NewSale::new(42, 1, 1)).await.unwrap();

        assert_eq!(sale.customer_id, 42);
    }

    #[tokio::test]
    async fn test_foreign_keys_enforced_when_configured() {
        let store = PharmacyStore::new(DbConfig::in_memory().enforce_foreign_keys(true))
            .await
            .unwrap();

        let err = store
            .stock()
            .add(&NewStock::new(7, 10))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));

        store
            .medicines()
            .add(&NewMedicine::new("Aspirin", "Bayer", 5.0))
            .await
            .unwrap();
        store.stock().add(&NewStock::new(1, 10)).await.unwrap();

        let err = store
            .sales()
            .record(&NewSale::new(3, 1, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
        assert!(store.sales().list().await.unwrap().is_empty());
        assert_eq!(store.stock().total_for_medicine(1).await.unwrap(), 10);
    }
}
