//! Error types for the allowance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculators never fail; these errors come from configuration
//! loading, the record store, and request validation.

use thiserror::Error;

/// The main error type for the allowance engine.
///
/// # Example
///
/// ```
/// use allowance_engine::error::EngineError;
///
/// let error = EngineError::RecordNotFound {
///     entity: "employee".to_string(),
///     id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "employee not found: emp_404");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A record with the given identifier does not exist.
    #[error("{entity} not found: {id}")]
    RecordNotFound {
        /// The kind of record (e.g. "employee", "master rate").
        entity: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// A record with the given identifier already exists.
    #[error("{entity} already exists: {id}")]
    DuplicateRecord {
        /// The kind of record.
        entity: String,
        /// The conflicting identifier.
        id: String,
    },

    /// A record failed validation.
    #[error("Invalid {entity} field '{field}': {message}")]
    InvalidRecord {
        /// The kind of record.
        entity: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for [`EngineError::RecordNotFound`].
    pub fn not_found(entity: &str, id: impl Into<String>) -> Self {
        Self::RecordNotFound {
            entity: entity.to_string(),
            id: id.into(),
        }
    }

    /// Shorthand for [`EngineError::InvalidRecord`].
    pub fn invalid(entity: &str, field: &str, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            entity: entity.to_string(),
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
