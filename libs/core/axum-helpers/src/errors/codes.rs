//! Type-safe error codes for API responses.
//!
//! A single source of truth for the codes used across the workspace. Each
//! code has a string identifier for clients, an integer code for logs and
//! monitoring, and a default human-readable message.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Invalid integer id in a path parameter
    InvalidId,

    /// JSON extraction from the request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // Database errors (2000-2999)
    /// Database query returned no results
    DatabaseNotFound,

    /// Database connection or query error
    DatabaseError,

    /// Database could not be reached
    DatabaseUnavailable,

    // I/O errors (4000s)
    /// File system I/O error
    IoError,
}

impl ErrorCode {
    /// String representation for client consumption.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseNotFound => "DATABASE_NOT_FOUND",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
            Self::IoError => "IO_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    ///
    /// Ranges: 1000-1999 client errors, 2000-2999 database errors,
    /// 4000-4999 I/O errors.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::ServiceUnavailable => 1011,
            Self::DatabaseNotFound => 2001,
            Self::DatabaseError => 2003,
            Self::DatabaseUnavailable => 2004,
            Self::IoError => 4001,
        }
    }

    /// Default human-readable message.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidId => "Invalid id in path parameter",
            Self::JsonExtraction => "Failed to parse JSON request body",
            Self::NotFound => "Resource not found",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service temporarily unavailable",
            Self::DatabaseNotFound => "Record not found",
            Self::DatabaseError => "A database error occurred",
            Self::DatabaseUnavailable => "Database is unreachable",
            Self::IoError => "An I/O error occurred",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::InvalidId.as_str(), "INVALID_ID");
    }

    #[test]
    fn test_error_code_ranges() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::DatabaseError.code(), 2003);
        assert!(ErrorCode::IoError.code() >= 4000);
    }
}
