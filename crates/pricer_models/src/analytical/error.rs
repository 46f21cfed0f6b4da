//! Error types for analytical pricing operations.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidVolatility`: Negative or non-finite volatility
/// - `InvalidForward`: Non-positive forward level
/// - `NumericalInstability`: Computation encountered numerical issues
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid forward level (non-positive for Black-76).
    #[error("Invalid forward: F = {forward}")]
    InvalidForward {
        /// The invalid forward value
        forward: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidVolatility { .. } | AnalyticalError::InvalidForward { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            AnalyticalError::NumericalInstability { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_forward_display() {
        let err = AnalyticalError::InvalidForward { forward: -100.0 };
        assert_eq!(format!("{}", err), "Invalid forward: F = -100");
    }

    #[test]
    fn test_invalid_volatility_to_pricing_error() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.1 };
        match PricingError::from(err) {
            PricingError::InvalidInput(msg) => assert!(msg.contains("volatility")),
            other => panic!("Expected InvalidInput variant, got {:?}", other),
        }
    }

    #[test]
    fn test_numerical_instability_to_pricing_error() {
        let err = AnalyticalError::NumericalInstability {
            message: "Overflow".to_string(),
        };
        match PricingError::from(err) {
            PricingError::NumericalInstability(msg) => assert!(msg.contains("Overflow")),
            other => panic!("Expected NumericalInstability variant, got {:?}", other),
        }
    }
}
