//! # Medicine Commands

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use pharmacy_core::validation::validate_new_medicine;
use pharmacy_core::{Medicine, NewMedicine};

/// Fields submitted from the "Add Medicine" page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMedicineInput {
    pub name: String,
    pub manufacturer: String,
    pub price: f64,
}

impl From<AddMedicineInput> for NewMedicine {
    fn from(input: AddMedicineInput) -> Self {
        NewMedicine::new(input.name.trim(), input.manufacturer.trim(), input.price)
    }
}

/// Stores a new medicine. The price is kept exactly as entered.
pub async fn add_medicine(db: &DbState, input: AddMedicineInput) -> Result<Medicine, ApiError> {
    debug!(name = %input.name, price = input.price, "add_medicine command");
    let start = Instant::now();

    let medicine = NewMedicine::from(input);
    validate_new_medicine(&medicine)?;

    let stored = db.inner().medicines().add(&medicine).await?;

    info!(
        medicine_id = stored.id,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Medicine added"
    );
    Ok(stored)
}
