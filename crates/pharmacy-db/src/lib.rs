//! # pharmacy-db: The Pharmacy Store
//!
//! This crate provides database access for the pharmacy records system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Pharmacy Records Data Flow                          │
//! │                                                                         │
//! │  Command (make_sale)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   pharmacy-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ PharmacyStore │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ CustomerRepo  │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ MedicineRepo  │    │ 001_initial_ │  │   │
//! │  │   │               │    │ StockRepo     │    │   schema.sql │  │   │
//! │  │   │               │    │ SaleRepo      │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   <data dir>/pharmacy.db                                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Store handle, connection pool creation and configuration
//! - [`migrations`] - Embedded schema migrations
//! - [`error`] - Database error types
//! - [`repository`] - Customer, medicine, stock and sale repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pharmacy_core::{NewMedicine, NewSale, NewStock};
//! use pharmacy_db::{DbConfig, PharmacyStore};
//!
//! let store = PharmacyStore::new(DbConfig::new("pharmacy.db")).await?;
//!
//! let aspirin = store.medicines().add(&NewMedicine::new("Aspirin", "Bayer", 5.0)).await?;
//! store.stock().add(&NewStock::new(aspirin.id, 100)).await?;
//! store.sales().record(&NewSale::new(1, aspirin.id, 10)).await?;
//!
//! assert_eq!(store.stock().total_for_medicine(aspirin.id).await?, 90);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{DbConfig, PharmacyStore};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::medicine::MedicineRepository;
pub use repository::sale::SaleRepository;
pub use repository::stock::StockRepository;
