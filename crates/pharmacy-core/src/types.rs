//! # Domain Types
//!
//! Record types persisted by the Pharmacy Store, and the inputs used to
//! create them.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │    Medicine     │   │   StockEntry    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (auto)      │   │  id (auto)      │   │  id (auto)      │       │
//! │  │  name           │   │  name           │   │  medicine_id ───┼──┐    │
//! │  │  phone          │   │  manufacturer   │   │  quantity       │  │    │
//! │  │  address        │   │  price (f64)    │   └─────────────────┘  │    │
//! │  └────────┬────────┘   └────────┬────────┘                        │    │
//! │           │                     │◄────────────────────────────────┘    │
//! │           │            ┌────────┴────────┐                              │
//! │           └───────────►│      Sale       │                              │
//! │                        │  ─────────────  │                              │
//! │                        │  customer_id    │                              │
//! │                        │  medicine_id    │                              │
//! │                        │  quantity       │                              │
//! │                        │  sale_date      │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Ids are SQLite integer primary keys assigned on insert. The `New*` input
//! types carry no id; the store returns the full record after inserting it.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// =============================================================================
// Customer
// =============================================================================

/// A customer of the pharmacy.
///
/// Name and phone are not unique: two customers may share both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Fields for a customer that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl NewCustomer {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        NewCustomer {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }
}

// =============================================================================
// Medicine
// =============================================================================

/// A medicine that can be stocked and sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Medicine {
    pub id: i64,
    pub name: String,
    pub manufacturer: Option<String>,
    /// Unit price as stored (REAL). No currency rounding is applied.
    pub price: f64,
}

/// Fields for a medicine that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMedicine {
    pub name: String,
    pub manufacturer: String,
    pub price: f64,
}

impl NewMedicine {
    pub fn new(name: impl Into<String>, manufacturer: impl Into<String>, price: f64) -> Self {
        NewMedicine {
            name: name.into(),
            manufacturer: manufacturer.into(),
            price,
        }
    }
}

// =============================================================================
// Stock
// =============================================================================

/// One stock addition event.
///
/// Rows are never consolidated per medicine. The stock on hand for a
/// medicine is the sum of its entries, and a sale subtracts from the most
/// recent entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct StockEntry {
    pub id: i64,
    pub medicine_id: i64,
    pub quantity: i64,
}

/// A stock addition that has not been stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStock {
    pub medicine_id: i64,
    pub quantity: i64,
}

impl NewStock {
    pub fn new(medicine_id: i64, quantity: i64) -> Self {
        NewStock {
            medicine_id,
            quantity,
        }
    }
}

/// Sums a set of stock entries.
pub fn stock_total<'a>(entries: impl IntoIterator<Item = &'a StockEntry>) -> i64 {
    entries.into_iter().map(|e| e.quantity).sum()
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale: one customer, one medicine, a quantity and the day it
/// happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    pub id: i64,
    pub customer_id: i64,
    pub medicine_id: i64,
    pub quantity: i64,
    /// Assigned by the store, never supplied by the caller.
    pub sale_date: NaiveDate,
}

/// A sale request. The date is not part of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSale {
    pub customer_id: i64,
    pub medicine_id: i64,
    pub quantity: i64,
}

impl NewSale {
    pub fn new(customer_id: i64, medicine_id: i64, quantity: i64) -> Self {
        NewSale {
            customer_id,
            medicine_id,
            quantity,
        }
    }
}

// =============================================================================
// Record Kind
// =============================================================================

/// The record tables that can be listed from the "View Data" page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Customers,
    Medicines,
    Stock,
    Sales,
}

impl RecordKind {
    /// All listable kinds, in menu order.
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Customers,
        RecordKind::Medicines,
        RecordKind::Stock,
        RecordKind::Sales,
    ];

    /// Display label, as shown in the menu.
    pub const fn label(&self) -> &'static str {
        match self {
            RecordKind::Customers => "Customers",
            RecordKind::Medicines => "Medicines",
            RecordKind::Stock => "Stock",
            RecordKind::Sales => "Sales",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RecordKind {
    type Err = CoreError;

    /// Accepts the label in any case, or its 1-based menu position.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(index) = s.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| RecordKind::ALL.get(i).copied())
                .ok_or_else(|| CoreError::UnknownRecordKind(s.to_string()));
        }

        RecordKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownRecordKind(s.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_kind_from_label() {
        assert_eq!("customers".parse::<RecordKind>().unwrap(), RecordKind::Customers);
        assert_eq!(" Stock ".parse::<RecordKind>().unwrap(), RecordKind::Stock);
        assert_eq!("SALES".parse::<RecordKind>().unwrap(), RecordKind::Sales);
    }

    #[test]
    fn test_record_kind_from_menu_position() {
        assert_eq!("2".parse::<RecordKind>().unwrap(), RecordKind::Medicines);
        assert!("0".parse::<RecordKind>().is_err());
        assert!("5".parse::<RecordKind>().is_err());
    }

    #[test]
    fn test_record_kind_rejects_pharmacists() {
        let err = "Pharmacists".parse::<RecordKind>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownRecordKind(k) if k == "Pharmacists"));
    }

    #[test]
    fn test_stock_total_sums_entries() {
        let entries = vec![
            StockEntry { id: 1, medicine_id: 1, quantity: 100 },
            StockEntry { id: 2, medicine_id: 1, quantity: 20 },
            StockEntry { id: 3, medicine_id: 1, quantity: -30 },
        ];
        assert_eq!(stock_total(&entries), 90);
        assert_eq!(stock_total(&Vec::<StockEntry>::new()), 0);
    }

    #[test]
    fn test_sale_date_serializes_as_iso_date() {
        let sale = Sale {
            id: 1,
            customer_id: 1,
            medicine_id: 1,
            quantity: 10,
            sale_date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        };
        let json = serde_json::to_value(&sale).unwrap();
        assert_eq!(json["sale_date"], "2024-03-09");
    }
}
