//! Error types for structured error handling.
//!
//! Every failure the core can report is an invalid-input failure detected
//! before any result is produced. Numerical overflow inside the exponential
//! update is not an error: the floating-point value is propagated unchanged.

use thiserror::Error;

/// Result alias used throughout the simulation crates.
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Categorised simulation errors.
///
/// # Variants
/// - `InvalidParameter`: A model or grid parameter is out of range
/// - `InvalidPercentile`: Percentile bounds outside `[0, 100]` or unordered
/// - `EmptyPaths`: Statistics requested over a matrix without paths
/// - `ShapeMismatch`: Raw data does not match the declared matrix shape
///
/// # Examples
/// ```
/// use pathsim_core::types::SimulationError;
///
/// let err = SimulationError::invalid_parameter("n_paths", "must be at least 1, got 0");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'n_paths': must be at least 1, got 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A parameter failed validation.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the public API.
        name: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// Percentile bounds are not `0 <= p_low <= p_high <= 100`.
    #[error("Invalid percentile bounds ({p_low}, {p_high}): require 0 <= p_low <= p_high <= 100")]
    InvalidPercentile {
        /// Requested lower percentile rank.
        p_low: f64,
        /// Requested upper percentile rank.
        p_high: f64,
    },

    /// The path matrix has no rows.
    #[error("Path matrix is empty: at least one path is required")]
    EmptyPaths,

    /// Buffer length does not match the declared shape.
    #[error("Shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch {
        /// Number of values implied by the shape.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
}

impl SimulationError {
    /// Shorthand for [`SimulationError::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns the offending parameter name, if the error concerns one.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { name, .. } => Some(name),
            Self::InvalidPercentile { .. } => Some("percentile"),
            Self::EmptyPaths | Self::ShapeMismatch { .. } => None,
        }
    }
}
