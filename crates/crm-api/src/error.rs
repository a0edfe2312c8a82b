//! # API Error Type
//!
//! Unified transport-level error for facade operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Two Kinds of Failure                              │
//! │                                                                     │
//! │  Business rule violated (duplicate email, bad phone, price ≤ 0)    │
//! │      → NOT an ApiError. The mutation returns Ok(payload) with the  │
//! │        violation strings in payload.errors.                        │
//! │                                                                     │
//! │  Storage/transport failure (pool exhausted, query failed)          │
//! │      → ApiError { code, message }, converted from DbError.         │
//! │                                                                     │
//! │  Callers inspect payload.errors for rule failures and match on     │
//! │  ApiError only for operational problems.                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use crm_db::DbError;

/// API error returned from facade operations.
///
/// ## Serialization
/// ```json
/// {
///   "code": "DATABASE_ERROR",
///   "message": "Database operation failed"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Database operation failed (500)
    DatabaseError,

    /// Internal server error (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::UniqueViolation { field, value } => ApiError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            DbError::ConnectionFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::ForeignKeyViolation { message } => {
                tracing::error!("Foreign key violation: {}", message);
                ApiError::new(ErrorCode::ValidationError, "Invalid reference")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::internal("Database operation failed")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mapping() {
        let api: ApiError = DbError::not_found("Order", "abc").into();
        assert_eq!(api.code, ErrorCode::NotFound);
        assert_eq!(api.message, "Order not found: abc");
    }

    #[test]
    fn test_unique_violation_maps_to_validation_error() {
        let api: ApiError = DbError::UniqueViolation {
            field: "customers.email".to_string(),
            value: "a@x.com".to_string(),
        }
        .into();
        assert_eq!(api.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_internal_maps_to_internal_code() {
        let api: ApiError = DbError::Internal("boom".to_string()).into();
        assert_eq!(api.code, ErrorCode::Internal);
        // The underlying detail is logged, not leaked to callers
        assert_eq!(api.message, "Database operation failed");
    }
}
