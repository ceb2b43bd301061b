//! # Commands Module
//!
//! The five user actions, callable from the form loop or any other front end.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── customer.rs  ◄─── Add Customer
//! ├── medicine.rs  ◄─── Add Medicine
//! ├── stock.rs     ◄─── Add Stock
//! ├── sale.rs      ◄─── Make Sale
//! └── view.rs      ◄─── View Data
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input struct (built fresh per submission)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  pharmacy_core::validation ── fails? ──► ApiError(VALIDATION_ERROR)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PharmacyStore repository ─── fails? ──► ApiError(from DbError)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Stored record returned                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod customer;
pub mod medicine;
pub mod sale;
pub mod stock;
pub mod view;

pub use customer::{add_customer, AddCustomerInput};
pub use medicine::{add_medicine, AddMedicineInput};
pub use sale::{make_sale, MakeSaleInput};
pub use stock::{add_stock, AddStockInput};
pub use view::{view_data, DataView, ViewDataInput};

#[cfg(test)]
pub(crate) async fn memory_db() -> crate::state::DbState {
    let store = pharmacy_db::PharmacyStore::new(pharmacy_db::DbConfig::in_memory())
        .await
        .unwrap();
    crate::state::DbState::new(store)
}
