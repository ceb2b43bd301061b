//! # Database State
//!
//! Wraps the `PharmacyStore` for use in commands.
//!
//! The store holds a `SqlitePool`, which is already safe to share between
//! tasks, so commands take `&DbState` and never lock.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub async fn add_stock(db: &DbState, input: AddStockInput) -> Result<StockEntry, ApiError> {
//!     let stock = NewStock::from(input);
//!     validate_new_stock(&stock)?;
//!     Ok(db.inner().stock().add(&stock).await?)
//! }
//! ```

use pharmacy_db::PharmacyStore;

/// Wrapper around `PharmacyStore` handed to every command.
#[derive(Debug, Clone)]
pub struct DbState {
    store: PharmacyStore,
}

impl DbState {
    /// Creates a new DbState wrapping an open store.
    pub fn new(store: PharmacyStore) -> Self {
        DbState { store }
    }

    /// Returns a reference to the inner store.
    pub fn inner(&self) -> &PharmacyStore {
        &self.store
    }
}
