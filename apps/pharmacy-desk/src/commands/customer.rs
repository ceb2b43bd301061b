//! # Customer Commands

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use pharmacy_core::validation::validate_new_customer;
use pharmacy_core::{Customer, NewCustomer};

/// Fields submitted from the "Add Customer" page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCustomerInput {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl From<AddCustomerInput> for NewCustomer {
    fn from(input: AddCustomerInput) -> Self {
        NewCustomer::new(
            input.name.trim(),
            input.phone.trim(),
            input.address.trim(),
        )
    }
}

/// Stores a new customer. Every field is required.
pub async fn add_customer(db: &DbState, input: AddCustomerInput) -> Result<Customer, ApiError> {
    debug!(name = %input.name, "add_customer command");
    let start = Instant::now();

    let customer = NewCustomer::from(input);
    validate_new_customer(&customer)?;

    let stored = db.inner().customers().add(&customer).await?;

    info!(
        customer_id = stored.id,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Customer added"
    );
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::memory_db;
    use crate::error::ErrorCode;

    fn input(name: &str, phone: &str, address: &str) -> AddCustomerInput {
        AddCustomerInput {
            name: name.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_customer_trims_fields() {
        let db = memory_db().await;

        let customer = add_customer(&db, input("  Jane Doe ", "555-0100", " 1 Elm St"))
            .await
            .unwrap();

        assert_eq!(customer.id, 1);
        assert_eq!(customer.name, "Jane Doe");
        assert_eq!(customer.address.as_deref(), Some("1 Elm St"));
        assert_eq!(db.inner().customers().list().await.unwrap(), vec![customer]);
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected_before_insert() {
        let db = memory_db().await;

        let err = add_customer(&db, input("Jane Doe", "", "1 Elm St"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "phone is required");
        assert!(db.inner().customers().list().await.unwrap().is_empty());
    }
}
