//! Error types for the AI Exposure Scoring Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during scoring and aggregation.

use thiserror::Error;

/// The main error type for the AI Exposure Scoring Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use exposure_engine::error::EngineError;
///
/// let error = EngineError::InvalidDimension {
///     value: "REGION".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid dimension: REGION");
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

    /// A caller requested an aggregation dimension that does not exist.
    ///
    /// This is a usage error, distinct from the data-quality conditions
    /// (missing metadata, missing taxonomy links) that the engine recovers
    /// from locally.
    #[error("Invalid dimension: {value}")]
    InvalidDimension {
        /// The dimension tag that was requested.
        value: String,
    },

    /// A collaborator storage operation failed.
    ///
    /// Persistence failures are surfaced to the caller unmodified; the
    /// engine performs no retry of its own.
    #[error("Storage error during {operation}: {message}")]
    Storage {
        /// The storage operation that failed.
        operation: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
