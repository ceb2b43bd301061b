//! # View Commands
//!
//! Lists every row of one record table, in id order.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use pharmacy_core::{Customer, Medicine, RecordKind, Sale, StockEntry};

/// Selection made on the "View Data" page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewDataInput {
    pub kind: RecordKind,
}

/// Rows of the chosen table.
///
/// ## Serialization
/// ```json
/// { "kind": "stock", "rows": [{ "id": 1, "medicine_id": 1, "quantity": 90 }] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum DataView {
    Customers(Vec<Customer>),
    Medicines(Vec<Medicine>),
    Stock(Vec<StockEntry>),
    Sales(Vec<Sale>),
}

impl DataView {
    pub fn kind(&self) -> RecordKind {
        match self {
            DataView::Customers(_) => RecordKind::Customers,
            DataView::Medicines(_) => RecordKind::Medicines,
            DataView::Stock(_) => RecordKind::Stock,
            DataView::Sales(_) => RecordKind::Sales,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DataView::Customers(rows) => rows.len(),
            DataView::Medicines(rows) => rows.len(),
            DataView::Stock(rows) => rows.len(),
            DataView::Sales(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serializes each row as one JSON object.
    pub fn json_rows(&self) -> serde_json::Result<Vec<String>> {
        fn encode<T: Serialize>(rows: &[T]) -> serde_json::Result<Vec<String>> {
            rows.iter().map(serde_json::to_string).collect()
        }

        match self {
            DataView::Customers(rows) => encode(rows),
            DataView::Medicines(rows) => encode(rows),
            DataView::Stock(rows) => encode(rows),
            DataView::Sales(rows) => encode(rows),
        }
    }
}

/// Lists all rows of the requested table. An empty table is not an error.
pub async fn view_data(db: &DbState, input: ViewDataInput) -> Result<DataView, ApiError> {
    debug!(kind = %input.kind, "view_data command");
    let start = Instant::now();
    let store = db.inner();

    let view = match input.kind {
        RecordKind::Customers => DataView::Customers(store.customers().list().await?),
        RecordKind::Medicines => DataView::Medicines(store.medicines().list().await?),
        RecordKind::Stock => DataView::Stock(store.stock().list().await?),
        RecordKind::Sales => DataView::Sales(store.sales().list().await?),
    };

    info!(
        kind = %input.kind,
        rows = view.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Data viewed"
    );
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::memory_db;
    use pharmacy_core::{NewCustomer, NewStock};

    #[tokio::test]
    async fn test_empty_tables_view_as_empty() {
        let db = memory_db().await;

        for kind in RecordKind::ALL {
            let view = view_data(&db, ViewDataInput { kind }).await.unwrap();
            assert_eq!(view.kind(), kind);
            assert!(view.is_empty());
        }
    }

    #[tokio::test]
    async fn test_view_returns_rows_in_id_order() {
        let db = memory_db().await;
        db.inner().stock().add(&NewStock::new(2, 5)).await.unwrap();
        db.inner().stock().add(&NewStock::new(1, 7)).await.unwrap();

        let view = view_data(&db, ViewDataInput { kind: RecordKind::Stock })
            .await
            .unwrap();

        match view {
            DataView::Stock(rows) => {
                let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
                assert_eq!(ids, vec![1, 2]);
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_json_rows() {
        let db = memory_db().await;
        db.inner()
            .customers()
            .add(&NewCustomer::new("Jane Doe", "555-0100", "1 Elm St"))
            .await
            .unwrap();

        let view = view_data(&db, ViewDataInput { kind: RecordKind::Customers })
            .await
            .unwrap();

        assert_eq!(
            view.json_rows().unwrap(),
            vec![r#"{"id":1,"name":"Jane Doe","phone":"555-0100","address":"1 Elm St"}"#]
        );
        let whole = serde_json::to_value(&view).unwrap();
        assert_eq!(whole["kind"], "customers");
        assert_eq!(whole["rows"][0]["id"], 1);
    }
}
