//! # Sale Commands
//!
//! A sale inserts the sale row and takes the quantity off the medicine's
//! latest stock row in one transaction (see `pharmacy_db::SaleRepository`).

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use pharmacy_core::validation::validate_new_sale;
use pharmacy_core::{NewSale, Sale};

/// Fields submitted from the "Make Sale" page. The date is assigned by the
/// store.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeSaleInput {
    pub customer_id: i64,
    pub medicine_id: i64,
    pub quantity: i64,
}

impl From<MakeSaleInput> for NewSale {
    fn from(input: MakeSaleInput) -> Self {
        NewSale::new(input.customer_id, input.medicine_id, input.quantity)
    }
}

/// Records a sale dated today and decrements stock.
///
/// Stock may go negative, including for a medicine that was never stocked.
pub async fn make_sale(db: &DbState, input: MakeSaleInput) -> Result<Sale, ApiError> {
    debug!(
        customer_id = input.customer_id,
        medicine_id = input.medicine_id,
        quantity = input.quantity,
        "make_sale command"
    );
    let start = Instant::now();

    let sale = NewSale::from(input);
    validate_new_sale(&sale)?;

    let stored = db.inner().sales().record(&sale).await?;

    info!(
        sale_id = stored.id,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Sale made"
    );
    Ok(stored)
}
