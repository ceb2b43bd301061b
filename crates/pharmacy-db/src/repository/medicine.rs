//! # Medicine Repository
//!
//! Database operations for the `Medicines` table.
//!
//! Prices are stored as REAL exactly as given. Display rounding is the
//! caller's business.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use pharmacy_core::{Medicine, NewMedicine};

/// Repository for medicine database operations.
#[derive(Debug, Clone)]
pub struct MedicineRepository {
    pool: SqlitePool,
}

impl MedicineRepository {
    /// Creates a new MedicineRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MedicineRepository { pool }
    }

    /// Inserts a medicine and returns it with its assigned id.
    pub async fn add(&self, medicine: &NewMedicine) -> DbResult<Medicine> {
        debug!(
            name = %medicine.name,
            manufacturer = %medicine.manufacturer,
            price = medicine.price,
            "Inserting medicine"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO Medicines (name, manufacturer, price)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&medicine.name)
        .bind(&medicine.manufacturer)
        .bind(medicine.price)
        .execute(&self.pool)
        .await?;

        Ok(Medicine {
            id: result.last_insert_rowid(),
            name: medicine.name.clone(),
            manufacturer: Some(medicine.manufacturer.clone()),
            price: medicine.price,
        })
    }

    /// Lists every medicine in id order.
    pub async fn list(&self) -> DbResult<Vec<Medicine>> {
        let medicines = sqlx::query_as::<_, Medicine>(
            r#"
            SELECT
                medicine_id AS id,
                name,
                manufacturer,
                price
            FROM Medicines
            ORDER BY medicine_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = medicines.len(), "Listed medicines");
        Ok(medicines)
    }
}

#[cfg(test)]
mod tests {
    use crate::{DbConfig, PharmacyStore};
    use pharmacy_core::NewMedicine;

    #[tokio::test]
    async fn test_add_then_list() {
        let store = PharmacyStore::new(DbConfig::in_memory()).await.unwrap();
        let repo = store.medicines();

        let aspirin = repo.add(&NewMedicine::new("Aspirin", "Bayer", 5.00)).await.unwrap();
        let sample = repo.add(&NewMedicine::new("Sample", "Acme", 0.0)).await.unwrap();

        assert_eq!(aspirin.id, 1);
        assert_eq!(sample.id, 2);
        assert_eq!(repo.list().await.unwrap(), vec![aspirin, sample]);
    }

    #[tokio::test]
    async fn test_price_is_not_rounded() {
        let store = PharmacyStore::new(DbConfig::in_memory()).await.unwrap();
        let repo = store.medicines();

        repo.add(&NewMedicine::new("Syrup", "Acme", 12.3456)).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed[0].price, 12.3456);
    }

    #[tokio::test]
    async fn test_same_name_twice_is_allowed() {
        let store = PharmacyStore::new(DbConfig::in_memory()).await.unwrap();
        let repo = store.medicines();

        repo.add(&NewMedicine::new("Ibuprofen", "Advil", 7.5)).await.unwrap();
        repo.add(&NewMedicine::new("Ibuprofen", "Motrin", 6.0)).await.unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 2);
    }
}
