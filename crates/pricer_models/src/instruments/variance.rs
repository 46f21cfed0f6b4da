//! Variance swap definitions.

use num_traits::Float;

use super::error::InstrumentError;
use super::params::InstrumentParams;

/// Variance swap on an equity index.
///
/// Pays `variance_notional * (realised variance - variance_strike)` at
/// settlement. The params notional is the variance notional.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{InstrumentParams, VarianceSwap};
///
/// let params = InstrumentParams::at_expiry(1.0_f64, 10_000.0).unwrap();
/// let swap = VarianceSwap::new(0.04, params).unwrap();
///
/// assert_eq!(swap.variance_strike(), 0.04);
/// assert!((swap.payoff(0.05) - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarianceSwap<T: Float> {
    variance_strike: T,
    params: InstrumentParams<T>,
}

impl<T: Float> VarianceSwap<T> {
    /// Creates a new variance swap.
    ///
    /// # Errors
    /// `InstrumentError::InvalidParameter` when the variance strike is
    /// negative or not finite.
    pub fn new(variance_strike: T, params: InstrumentParams<T>) -> Result<Self, InstrumentError> {
        if !(variance_strike >= T::zero()) || !variance_strike.is_finite() {
            return Err(InstrumentError::InvalidParameter {
                message: format!(
                    "variance strike must be non-negative, got {}",
                    variance_strike.to_f64().unwrap_or(f64::NAN)
                ),
            });
        }
        Ok(Self {
            variance_strike,
            params,
        })
    }

    /// Struck variance (volatility squared).
    #[inline]
    pub fn variance_strike(&self) -> T {
        self.variance_strike
    }

    /// Timing and variance notional.
    #[inline]
    pub fn params(&self) -> &InstrumentParams<T> {
        &self.params
    }

    /// Payoff for a realised variance.
    #[inline]
    pub fn payoff(&self, realised_variance: T) -> T {
        self.params.notional() * (realised_variance - self.variance_strike)
    }
}
