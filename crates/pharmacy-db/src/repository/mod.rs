//! # Repository Module
//!
//! Database repository implementations for the Pharmacy Store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Command                                                               │
//! │       │                                                                 │
//! │       │  store.sales().record(&new_sale)                               │
//! │       ▼                                                                 │
//! │  SaleRepository                                                        │
//! │  ├── record(&self, sale)         (transaction: insert + decrement)     │
//! │  └── list(&self)                                                       │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Every repository holds a pool handle, never a connection: the         │
//! │  connection lives only as long as one statement or transaction.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`customer::CustomerRepository`] - add / list customers
//! - [`medicine::MedicineRepository`] - add / list medicines
//! - [`stock::StockRepository`] - add / list stock rows, per-medicine totals
//! - [`sale::SaleRepository`] - record / list sales

pub mod customer;
pub mod medicine;
pub mod sale;
pub mod stock;
