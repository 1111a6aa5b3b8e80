//! Custom error types for the contact book
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions. Missing contacts are not errors: lookups
//! return `Option` and the shell decides what to tell the user.

use thiserror::Error;

/// The main error type for contact book operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A field value failed its format rule
    #[error("Invalid {field} '{value}': {rule}")]
    Validation {
        field: &'static str,
        value: String,
        rule: &'static str,
    },

    /// A record already holds the maximum number of phones
    #[error("A contact can have at most {max} phones")]
    Capacity { max: usize },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// An argument outside the accepted domain (e.g. a zero page size)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl ContactError {
    /// Create a "not found" error for a phone number on a record
    pub fn phone_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Phone",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for a contact name
    pub fn contact_exists(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a capacity error
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::Capacity { .. })
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

impl From<std::io::Error> for ContactError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for contact book operations
pub type ContactResult<T> = Result<T, ContactError>;
