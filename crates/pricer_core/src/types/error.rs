//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//! - `InterpolationError`: Errors from interpolation operations

use crate::market_data::error::MarketDataError;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `MarketData`: A curve or surface lookup failed during pricing
/// - `NumericalInstability`: Computation produced an unusable value
/// - `UnsupportedOperation`: The pricer was handed a variant it was not built for
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative strike".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative strike");
///
/// let err = PricingError::UnsupportedOperation {
///     pricer: "BlackForwardPricer",
///     instrument: "VarianceSwap",
/// };
/// assert_eq!(format!("{}", err), "BlackForwardPricer cannot price VarianceSwap");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Market data lookup failed
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Pricer asked to value an instrument variant it does not support
    #[error("{pricer} cannot price {instrument}")]
    UnsupportedOperation {
        /// Name of the concrete pricer
        pricer: &'static str,
        /// Name of the rejected instrument variant
        instrument: &'static str,
    },
}

/// Interpolation-related errors.
///
/// Provides structured error handling for interpolation operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `OutOfBounds`: Query point outside valid interpolation domain
/// - `InsufficientData`: Not enough data points for interpolation
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use pricer_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::NumericalInstability("d1 is NaN".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: d1 is NaN");
    }

    #[test]
    fn test_unsupported_operation_names_pricer_and_instrument() {
        let err = PricingError::UnsupportedOperation {
            pricer: "VarianceSwapPricer",
            instrument: "EquityIndexOption",
        };
        let msg = format!("{}", err);
        assert!(msg.contains("VarianceSwapPricer"));
        assert!(msg.contains("EquityIndexOption"));
    }

    #[test]
    fn test_from_market_data_error() {
        let mkt_err = MarketDataError::InvalidMaturity { t: -1.0 };
        let err: PricingError = mkt_err.clone().into();
        assert_eq!(err, PricingError::MarketData(mkt_err));
    }

    #[test]
    fn test_interpolation_error_display() {
        let err = InterpolationError::InsufficientData { got: 1, need: 2 };
        assert_eq!(
            format!("{}", err),
            "Insufficient data points: got 1, need at least 2"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidInput("x".to_string());
        let _: &dyn std::error::Error = &err;
        let err = InterpolationError::InvalidInput("y".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
