//! # Error Types
//!
//! Domain-specific error types for crm-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  crm-core errors (this file)                                       │
//! │  └── ValidationError  - Business rule violations                   │
//! │                                                                     │
//! │  crm-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                │
//! │                                                                     │
//! │  crm-api errors (facade)                                           │
//! │  └── ApiError         - Transport-level failures                   │
//! │                                                                     │
//! │  Validation outcomes travel inside mutation payloads as strings;   │
//! │  only storage failures propagate as ApiError.                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant's Display string IS the user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Business rule validation failures.
///
/// Each variant corresponds to one rule in the mutation surface. The
/// Display strings are the exact messages callers see in a payload's
/// `errors` list, so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Another customer already owns this email address.
    #[error("Email already exists")]
    DuplicateEmail,

    /// Phone did not match `+<10-15 digits>` or `ddd-ddd-dddd`.
    #[error("Invalid phone format. Use +1234567890 or 123-456-7890")]
    InvalidPhoneFormat,

    /// Product price must be strictly positive.
    #[error("Price must be positive")]
    InvalidPrice,

    /// Product stock must be zero or more.
    #[error("Stock cannot be negative")]
    InvalidStock,

    /// Order references a customer id that does not exist.
    #[error("Invalid customer ID")]
    CustomerNotFound,

    /// Order must reference at least one product.
    #[error("At least one product must be selected")]
    EmptyProductList,

    /// One or more referenced product ids did not resolve.
    #[error("One or more product IDs are invalid")]
    ProductNotFound,
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::DuplicateEmail.to_string(),
            "Email already exists"
        );
        assert_eq!(
            ValidationError::InvalidPhoneFormat.to_string(),
            "Invalid phone format. Use +1234567890 or 123-456-7890"
        );
        assert_eq!(
            ValidationError::InvalidPrice.to_string(),
            "Price must be positive"
        );
        assert_eq!(
            ValidationError::InvalidStock.to_string(),
            "Stock cannot be negative"
        );
    }

    #[test]
    fn test_order_error_messages() {
        assert_eq!(
            ValidationError::CustomerNotFound.to_string(),
            "Invalid customer ID"
        );
        assert_eq!(
            ValidationError::EmptyProductList.to_string(),
            "At least one product must be selected"
        );
        assert_eq!(
            ValidationError::ProductNotFound.to_string(),
            "One or more product IDs are invalid"
        );
    }
}
