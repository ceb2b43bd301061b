//! # pharmacy-core: Pure Domain Types for Pharmacy Records
//!
//! This crate holds the record types, input rules and domain errors shared by
//! the store and the command layer. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pharmacy Records Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal Forms (pharmacy-desk)               │   │
//! │  │  Add Customer ─ Add Medicine ─ Add Stock ─ Make Sale ─ View     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Commands (pharmacy-desk)                     │   │
//! │  │    add_customer, add_medicine, add_stock, make_sale, view_data  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ pharmacy-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────┐   ┌──────────────┐   ┌──────────────────┐    │   │
//! │  │   │    types    │   │  validation  │   │      error       │    │   │
//! │  │   │  Customer   │   │  form rules  │   │ ValidationError  │    │   │
//! │  │   │  Medicine   │   │  id / qty /  │   │ CoreError        │    │   │
//! │  │   │  Sale ...   │   │  price       │   │                  │    │   │
//! │  │   └─────────────┘   └──────────────┘   └──────────────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK READS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 pharmacy-db (Pharmacy Store)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Record types (Customer, Medicine, StockEntry, Sale) and their inputs
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules applied before anything reaches the store
//!
//! ## Example Usage
//!
//! ```rust
//! use pharmacy_core::{validation, NewMedicine};
//!
//! let aspirin = NewMedicine::new("Aspirin", "Bayer", 5.00);
//! assert!(validation::validate_new_medicine(&aspirin).is_ok());
//!
//! let free_sample = NewMedicine::new("Sample", "Bayer", -1.0);
//! assert!(validation::validate_new_medicine(&free_sample).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of any free-text field (name, phone, address, manufacturer).
pub const MAX_TEXT_LEN: usize = 200;

/// Largest quantity accepted for one stock delivery or one sale.
///
/// Keeps running stock totals far from the 64-bit limit, past which SQLite
/// turns the column value into REAL.
pub const MAX_QUANTITY: i64 = i32::MAX as i64;
