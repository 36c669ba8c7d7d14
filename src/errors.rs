/*!
 * Error types for the linguascore library.
 *
 * This module contains custom error types for different parts of the library,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors raised when resolving quality settings
///
/// The scoring functions themselves are total and never fail; the only
/// rejection point is settings resolution, which refuses configurations
/// that would produce undefined scores.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The LQA weight would zero or invert the blend denominator
    #[error("Invalid LQA weight {0}: must be greater than -1")]
    InvalidLqaWeight(f64),

    /// The QS multiplier must map the 1-5 scale onto a positive range
    #[error("Invalid QS multiplier {0}: must be positive")]
    InvalidQsMultiplier(f64),

    /// The probation threshold must be a real number
    #[error("Invalid probation threshold {0}: must be finite")]
    InvalidProbationThreshold(f64),

    /// A severity weight override must not be negative
    #[error("Invalid weight {weight} for severity {severity}: must be non-negative")]
    InvalidSeverityWeight {
        /// Severity the override applies to
        severity: String,
        /// Offending weight value
        weight: f64,
    },

    /// A weight override keyed by a severity the taxonomy does not know,
    /// usually a typo in the stored settings
    #[error("Cannot override weight {0} for an unrecognized severity")]
    UnrecognizedSeverityOverride(f64),
}

/// Main library error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from settings resolution
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Error parsing a settings or record document
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
