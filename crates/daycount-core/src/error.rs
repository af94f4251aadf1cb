//! Error types for day count calculations.
//!
//! Date arithmetic itself never fails. Errors come from resolving a
//! convention name, building dates, and initialising configuration.

use thiserror::Error;

/// A specialized Result type for day count operations.
pub type DayCountResult<T> = Result<T, DayCountError>;

/// The main error type for day count operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DayCountError {
    /// No convention is registered under the requested name.
    #[error("Day count convention not found: {name}")]
    ConventionNotFound {
        /// The (possibly defaulted) name that was looked up.
        name: String,
    },

    /// Error in date construction or an invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    ConfigError {
        /// Description of the configuration error.
        reason: String,
    },
}

impl DayCountError {
    /// Creates a convention not found error.
    #[must_use]
    pub fn convention_not_found(name: impl Into<String>) -> Self {
        Self::ConventionNotFound { name: name.into() }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config_error(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }

    /// Returns true if this error reports an unknown convention.
    #[must_use]
    pub fn is_convention_not_found(&self) -> bool {
        matches!(self, Self::ConventionNotFound { .. })
    }
}
