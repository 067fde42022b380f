//! Error types for the hotel booking engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating, searching for
//! and storing reservations.

use thiserror::Error;

/// The main error type for the hotel booking engine.
///
/// Running out of free rooms is deliberately absent: the engine reports it
/// as `None` / `false`, not as an error.
///
/// # Example
///
/// ```
/// use hotel_booking::error::BookingError;
///
/// let error = BookingError::NotFound {
///     entity: "booking",
///     id: 42,
/// };
/// assert_eq!(error.to_string(), "booking 42 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// A date range failed reservation or query validation.
    #[error("Invalid date range: {message}")]
    InvalidDateRange {
        /// Mode-specific explanation of why the range was rejected.
        message: String,
    },

    /// An operation targeted an id that the store does not hold.
    #[error("{entity} {id} not found")]
    NotFound {
        /// The kind of record that was looked up.
        entity: &'static str,
        /// The id that was not found.
        id: i64,
    },

    /// A record contained a field the store refuses to accept.
    #[error("Invalid field '{field}': {message}")]
    InvalidEntity {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The store could not be accessed (e.g. a poisoned lock).
    #[error("Store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the failure.
        message: String,
    },

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
}

/// A type alias for Results that return BookingError.
pub type BookingResult<T> = Result<T, BookingError>;
