//! # Stock Commands

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use pharmacy_core::validation::validate_new_stock;
use pharmacy_core::{NewStock, StockEntry};

/// Fields submitted from the "Add Stock" page.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStockInput {
    pub medicine_id: i64,
    pub quantity: i64,
}

impl From<AddStockInput> for NewStock {
    fn from(input: AddStockInput) -> Self {
        NewStock::new(input.medicine_id, input.quantity)
    }
}

/// Records a stock delivery as a new row.
///
/// The medicine is not looked up unless foreign keys are enforced.
pub async fn add_stock(db: &DbState, input: AddStockInput) -> Result<StockEntry, ApiError> {
    debug!(
        medicine_id = input.medicine_id,
        quantity = input.quantity,
        "add_stock command"
    );
    let start = Instant::now();

    let stock = NewStock::from(input);
    validate_new_stock(&stock)?;

    let stored = db.inner().stock().add(&stock).await?;

    info!(
        stock_id = stored.id,
        medicine_id = stored.medicine_id,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Stock added"
    );
    Ok(stored)
}
