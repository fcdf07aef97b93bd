//! Error types for the timesheet engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during document processing and
//! pay calculation.

use thiserror::Error;

/// The main error type for the timesheet engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
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
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value failed validation.
    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigInvalid {
        /// The configuration field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A document could not be opened or its structure could not be parsed.
    ///
    /// Fatal to that document only; batch callers record the failure and
    /// continue with the remaining documents.
    #[error("Failed to read document '{document}': {message}")]
    DocumentRead {
        /// The source name of the document (file name or upload label).
        document: String,
        /// A description of the read failure.
        message: String,
    },

    /// A shift record failed validation after all skip-rules were applied.
    #[error("Validation failed: {message}")]
    Validation {
        /// A description of the validation failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
