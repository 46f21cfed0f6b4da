//! Market data error types.
//!
//! This module provides structured error handling for market data operations
//! including yield curve, forward curve and volatility surface lookups.

use crate::types::InterpolationError;
use thiserror::Error;

/// Market data operation errors.
///
/// # Variants
///
/// - `InvalidMaturity`: Negative or unordered time to maturity
/// - `InvalidStrike`: Non-positive strike price
/// - `InvalidExpiry`: Non-positive time to expiry
/// - `InvalidVolatility`: Non-positive or non-finite volatility node
/// - `OutOfBounds`: Query outside valid domain
/// - `Interpolation`: Wrapped interpolation error
/// - `InsufficientData`: Not enough data points for construction
/// - `LengthMismatch`: Parallel node arrays of different length
/// - `DuplicateNode`: Two surface nodes at the same coordinate
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Invalid maturity (negative time).
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility node.
    #[error("Invalid volatility: sigma = {sigma}")]
    InvalidVolatility {
        /// The invalid volatility value
        sigma: f64,
    },

    /// Query point outside valid domain.
    #[error("Out of bounds: {x} not in [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Insufficient data for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Parallel node arrays differ in length.
    #[error("Length mismatch: {first} vs {second}")]
    LengthMismatch {
        /// Length of the first array
        first: usize,
        /// Length of the second array
        second: usize,
    },

    /// The same (maturity, strike) coordinate appears twice.
    #[error("Duplicate node at maturity {maturity}, strike {strike}")]
    DuplicateNode {
        /// Node maturity
        maturity: f64,
        /// Node strike
        strike: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_maturity_display() {
        let err = MarketDataError::InvalidMaturity { t: -1.5 };
        assert_eq!(format!("{}", err), "Invalid maturity: t = -1.5");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = MarketDataError::OutOfBounds {
            x: 5.0,
            min: 0.0,
            max: 3.0,
        };
        assert_eq!(format!("{}", err), "Out of bounds: 5 not in [0, 3]");
    }

    #[test]
    fn test_duplicate_node_display() {
        let err = MarketDataError::DuplicateNode {
            maturity: 1.0,
            strike: 100.0,
        };
        assert_eq!(
            format!("{}", err),
            "Duplicate node at maturity 1, strike 100"
        );
    }

    #[test]
    fn test_from_interpolation_error() {
        let interp_err = InterpolationError::OutOfBounds {
            x: 5.0,
            min: 0.0,
            max: 3.0,
        };
        let mkt_err: MarketDataError = interp_err.into();
        assert!(matches!(mkt_err, MarketDataError::Interpolation(_)));
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = MarketDataError::LengthMismatch {
            first: 3,
            second: 2,
        };
        assert_eq!(err1.clone(), err1);
    }
}
