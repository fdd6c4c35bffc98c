//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the marketplace crates. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Normalization errors are local and deterministic. Retrying a pure
//!   computation with the same input cannot succeed, so they are surfaced
//!   to the caller immediately.
//! - Zero denominators are reported as configuration errors instead of
//!   leaking `NaN` or `Infinity` into a rendered chart.

use thiserror::Error;

/// Top-level error type for the marketplace crates.
#[derive(Error, Debug)]
pub enum GpumartError {
    /// Metric normalization failed.
    #[error("normalization error: {0}")]
    Normalize(#[from] NormalizeError),

    /// A listing or listing filter is malformed.
    #[error("listing error: {0}")]
    Listing(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error raised by the metric normalizer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    /// A raw measurement or score sequence is unusable: non-finite,
    /// negative, empty, or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A zero reference or baseline was supplied where a division is
    /// required, or the normalizer configuration is inconsistent.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl NormalizeError {
    /// Reject a measurement that is NaN, infinite, or negative.
    pub fn check_measurement(what: &str, value: f64) -> Result<f64, Self> {
        if !value.is_finite() {
            return Err(Self::InvalidArgument(format!(
                "{what} must be finite, got {value}"
            )));
        }
        if value < 0.0 {
            return Err(Self::InvalidArgument(format!(
                "{what} must not be negative, got {value}"
            )));
        }
        Ok(value)
    }

    /// Reject a value that is NaN or infinite.
    pub fn check_finite(what: &str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::InvalidArgument(format!(
                "{what} must be finite, got {value}"
            )))
        }
    }
}
