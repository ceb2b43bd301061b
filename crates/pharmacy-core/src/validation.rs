//! # Validation Module
//!
//! Input rules for the four write actions.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal form (pharmacy-desk)                                │
//! │  ├── Parse numbers from text                                           │
//! │  └── Unparseable number: report it, abandon the page                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command (pharmacy-desk)                                      │
//! │  └── THIS MODULE: required fields, ranges                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pharmacy Store (SQLite)                                      │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Foreign keys (only when enforcement is switched on)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store performs no validation of its own: anything that reaches it has
//! already passed through here.
//!
//! ## Usage
//! ```rust
//! use pharmacy_core::validation::{validate_new_sale, validate_new_stock};
//! use pharmacy_core::{NewSale, NewStock};
//!
//! assert!(validate_new_stock(&NewStock::new(1, 0)).is_ok());
//! assert!(validate_new_sale(&NewSale::new(1, 1, 0)).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{NewCustomer, NewMedicine, NewSale, NewStock};
use crate::{MAX_QUANTITY, MAX_TEXT_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a required free-text field.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_TEXT_LEN`] characters
///
/// ## Example
/// ```rust
/// use pharmacy_core::validation::validate_required_text;
///
/// assert!(validate_required_text("name", "Aspirin").is_ok());
/// assert!(validate_required_text("name", "   ").is_err());
/// ```
pub fn validate_required_text(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(())
}

/// Validates a record id typed into a form.
///
/// ## Rules
/// - Must be >= 1 (SQLite rowids start at 1)
pub fn validate_id(field: &str, id: i64) -> ValidationResult<()> {
    if id < 1 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 1,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a medicine price.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (zero is allowed)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::invalid_format("price", "must be a finite number"));
    }

    if price < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a customer: every field is required.
pub fn validate_new_customer(customer: &NewCustomer) -> ValidationResult<()> {
    validate_required_text("name", &customer.name)?;
    validate_required_text("phone", &customer.phone)?;
    validate_required_text("address", &customer.address)?;
    Ok(())
}

/// Validates a medicine: name and manufacturer required, price >= 0.
pub fn validate_new_medicine(medicine: &NewMedicine) -> ValidationResult<()> {
    validate_required_text("name", &medicine.name)?;
    validate_required_text("manufacturer", &medicine.manufacturer)?;
    validate_price(medicine.price)?;
    Ok(())
}

/// Validates a stock addition.
///
/// ## Rules
/// - medicine_id >= 1
/// - quantity >= 0 (recording an empty delivery is allowed)
/// - quantity <= [`MAX_QUANTITY`]
pub fn validate_new_stock(stock: &NewStock) -> ValidationResult<()> {
    validate_id("medicine_id", stock.medicine_id)?;

    if stock.quantity < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity".to_string(),
        });
    }

    if stock.quantity > MAX_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a sale request.
///
/// ## Rules
/// - customer_id >= 1, medicine_id >= 1
/// - 1 <= quantity <= [`MAX_QUANTITY`]
///
/// Available stock is deliberately not checked here; the store lets stock
/// totals go negative.
pub fn validate_new_sale(sale: &NewSale) -> ValidationResult<()> {
    validate_id("customer_id", sale.customer_id)?;
    validate_id("medicine_id", sale.medicine_id)?;

    if sale.quantity < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if sale.quantity > MAX_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_text() {
        assert!(validate_required_text("name", "Jane Doe").is_ok());
        assert_eq!(
            validate_required_text("name", ""),
            Err(ValidationError::required("name"))
        );
        assert!(validate_required_text("name", "  \t ").is_err());
        assert!(validate_required_text("name", &"A".repeat(MAX_TEXT_LEN)).is_ok());
        assert!(matches!(
            validate_required_text("name", &"A".repeat(MAX_TEXT_LEN + 1)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("medicine_id", 1).is_ok());
        assert!(validate_id("medicine_id", 0).is_err());
        assert!(validate_id("medicine_id", -7).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(5.0).is_ok());
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_new_customer_requires_all_fields() {
        assert!(validate_new_customer(&NewCustomer::new("Jane", "555-0100", "1 Elm St")).is_ok());

        let err = validate_new_customer(&NewCustomer::new("Jane", "", "1 Elm St")).unwrap_err();
        assert_eq!(err, ValidationError::required("phone"));

        let err = validate_new_customer(&NewCustomer::new("Jane", "555-0100", " ")).unwrap_err();
        assert_eq!(err, ValidationError::required("address"));
    }

    #[test]
    fn test_validate_new_medicine() {
        assert!(validate_new_medicine(&NewMedicine::new("Aspirin", "Bayer", 5.0)).is_ok());
        assert!(validate_new_medicine(&NewMedicine::new("Aspirin", "Bayer", 0.0)).is_ok());
        assert!(validate_new_medicine(&NewMedicine::new("Aspirin", "", 5.0)).is_err());
        assert!(validate_new_medicine(&NewMedicine::new("Aspirin", "Bayer", -1.0)).is_err());
    }

    #[test]
    fn test_validate_new_stock() {
        assert!(validate_new_stock(&NewStock::new(1, 100)).is_ok());
        assert!(validate_new_stock(&NewStock::new(1, 0)).is_ok());
        assert!(validate_new_stock(&NewStock::new(0, 10)).is_err());
        assert!(validate_new_stock(&NewStock::new(1, -1)).is_err());
    }

    #[test]
    fn test_quantities_are_bounded() {
        assert!(validate_new_stock(&NewStock::new(1, MAX_QUANTITY)).is_ok());
        assert!(validate_new_sale(&NewSale::new(1, 1, MAX_QUANTITY)).is_ok());

        assert_eq!(
            validate_new_stock(&NewStock::new(1, i64::MAX)),
            Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 0,
                max: MAX_QUANTITY,
            })
        );
        assert_eq!(
            validate_new_sale(&NewSale::new(1, 1, MAX_QUANTITY + 1)),
            Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: MAX_QUANTITY,
            })
        );
    }

    #[test]
    fn test_validate_new_sale() {
        assert!(validate_new_sale(&NewSale::new(1, 1, 10)).is_ok());
        assert!(validate_new_sale(&NewSale::new(0, 1, 10)).is_err());
        assert!(validate_new_sale(&NewSale::new(1, 0, 10)).is_err());
        assert_eq!(
            validate_new_sale(&NewSale::new(1, 1, 0)),
            Err(ValidationError::MustBePositive {
                field: "quantity".to_string()
            })
        );
    }
}
