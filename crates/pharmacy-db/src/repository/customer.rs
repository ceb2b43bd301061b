//! # Customer Repository
//!
//! Database operations for the `Customers` table.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use pharmacy_core::{Customer, NewCustomer};

/// Repository for customer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.customers();
/// let jane = repo.add(&NewCustomer::new("Jane", "555-0100", "1 Elm St")).await?;
/// let everyone = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Inserts a customer and returns it with its assigned id.
    ///
    /// No uniqueness check: the same name and phone may be added twice.
    pub async fn add(&self, customer: &NewCustomer) -> DbResult<Customer> {
        debug!(name = %customer.name, "Inserting customer");

        let result = sqlx::query(
            r#"
            INSERT INTO Customers (name, phone, address)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(&customer.address)
        .execute(&self.pool)
        .await?;

        Ok(Customer {
            id: result.last_insert_rowid(),
            name: customer.name.clone(),
            phone: Some(customer.phone.clone()),
            address: Some(customer.address.clone()),
        })
    }

    /// Lists every customer in id order.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT
                customer_id AS id,
                name,
                phone,
                address
            FROM Customers
            ORDER BY customer_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = customers.len(), "Listed customers");
        Ok(customers)
    }
}
