//! # Validation Module
//!
//! Field-level rule checks for the CRM mutation surface.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Facade (crm-api)                                         │
//! │  ├── Store-dependent checks (email uniqueness, FK existence)       │
//! │  └── THIS MODULE: pure field checks                                │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Database (SQLite)                                        │
//! │  ├── NOT NULL constraints                                          │
//! │  ├── UNIQUE constraint on customers.email                          │
//! │  └── Foreign key constraints                                       │
//! │                                                                     │
//! │  Defense in depth: the UNIQUE index backstops the facade's         │
//! │  existence pre-check under concurrent inserts.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two operating modes
//! Single-entity mutations collect every failed check into the payload's
//! error list; bulk customer creation takes the first failure per item and
//! moves on to the next item. The facade owns that sequencing - functions
//! here check exactly one rule each.
//!
//! ## Usage
//! ```rust
//! use crm_core::validation::{validate_phone, validate_price_cents};
//!
//! assert!(validate_phone("+12345678901").is_ok());
//! assert!(validate_phone("123-456-7890").is_ok());
//! assert!(validate_price_cents(1).is_ok());
//! assert!(validate_price_cents(0).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Phone Validation
// =============================================================================

/// Validates a phone number.
///
/// ## Accepted Formats
/// - International: `+` followed by 10 to 15 digits (e.g. `+12345678901`)
/// - Dashed: `ddd-ddd-dddd` (e.g. `123-456-7890`)
///
/// Anything else fails with [`ValidationError::InvalidPhoneFormat`].
/// An *absent* phone is valid; callers only invoke this when one is given.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    if matches_international(phone) || matches_dashed(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhoneFormat)
    }
}

/// `+` followed by 10-15 ASCII digits, nothing else.
fn matches_international(phone: &str) -> bool {
    let Some(digits) = phone.strip_prefix('+') else {
        return false;
    };

    (10..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Exactly `ddd-ddd-dddd`.
fn matches_dashed(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    if bytes.len() != 12 {
        return false;
    }

    bytes.iter().enumerate().all(|(i, b)| match i {
        3 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product price in cents.
///
/// ## Rules
/// - Must be strictly positive (> 0)
/// - One cent is the smallest valid price
///
/// ## Example
/// ```rust
/// use crm_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(99999).is_ok()); // $999.99
/// assert!(validate_price_cents(1).is_ok());     // $0.01 (boundary)
/// assert!(validate_price_cents(0).is_err());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::InvalidPrice);
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (out of stock)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::InvalidStock);
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates an order's product selection.
///
/// ## Rules
/// - At least one product id must be present
///
/// Resolution of the ids against the store (any unknown id fails the whole
/// order) happens in the facade, which compares the matched count against
/// the requested count.
pub fn validate_product_selection(product_ids: &[String]) -> ValidationResult<()> {
    if product_ids.is_empty() {
        return Err(ValidationError::EmptyProductList);
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
    fn test_phone_accepted_formats() {
        assert!(validate_phone("+12345678901").is_ok());
        assert!(validate_phone("123-456-7890").is_ok());

        // Length boundaries for the international form
        assert!(validate_phone("+1234567890").is_ok()); // 10 digits
        assert!(validate_phone("+123456789012345").is_ok()); // 15 digits
    }

    #[test]
    fn test_phone_rejects_bad_formats() {
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("abc-def-ghij").is_err());
        assert!(validate_phone("+123456789").is_err()); // 9 digits
        assert!(validate_phone("+1234567890123456").is_err()); // 16 digits
        assert!(validate_phone("123-4567-890").is_err()); // dashes misplaced
        assert!(validate_phone("1234567890").is_err()); // no + and no dashes
        assert!(validate_phone("+12345 78901").is_err()); // embedded space
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(1).is_ok()); // $0.01 boundary
        assert!(validate_price_cents(99999).is_ok());

        assert_eq!(
            validate_price_cents(0).unwrap_err(),
            ValidationError::InvalidPrice
        );
        assert_eq!(
            validate_price_cents(-1).unwrap_err(),
            ValidationError::InvalidPrice
        );
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok()); // boundary
        assert!(validate_stock(50).is_ok());

        assert_eq!(validate_stock(-1).unwrap_err(), ValidationError::InvalidStock);
    }

    #[test]
    fn test_validate_product_selection() {
        let ids = vec!["a".to_string()];
        assert!(validate_product_selection(&ids).is_ok());

        assert_eq!(
            validate_product_selection(&[]).unwrap_err(),
            ValidationError::EmptyProductList
        );
    }
}
