//! European option on an equity index.

use num_traits::Float;

use super::error::InstrumentError;
use super::params::{check_strike, InstrumentParams};
use super::payoff::PayoffType;

/// European call or put on an equity index.
///
/// The payoff is fixed at expiry against the index forward and paid at
/// settlement.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{EquityIndexOption, InstrumentParams, PayoffType};
///
/// let params = InstrumentParams::new(1.0_f64, 1.01, 100.0).unwrap();
/// let call = EquityIndexOption::new(4500.0, params, PayoffType::Call).unwrap();
///
/// assert_eq!(call.strike(), 4500.0);
/// assert_eq!(call.payoff(4600.0), 100.0 * 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquityIndexOption<T: Float> {
    strike: T,
    params: InstrumentParams<T>,
    payoff_type: PayoffType,
}

impl<T: Float> EquityIndexOption<T> {
    /// Creates a new option.
    ///
    /// # Errors
    /// `InstrumentError::InvalidStrike` when the strike is not positive.
    pub fn new(
        strike: T,
        params: InstrumentParams<T>,
        payoff_type: PayoffType,
    ) -> Result<Self, InstrumentError> {
        Ok(Self {
            strike: check_strike(strike)?,
            params,
            payoff_type,
        })
    }

    /// Strike level.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Timing and notional.
    #[inline]
    pub fn params(&self) -> &InstrumentParams<T> {
        &self.params
    }

    /// Call or put.
    #[inline]
    pub fn payoff_type(&self) -> PayoffType {
        self.payoff_type
    }

    /// Notional-scaled payoff at an index level.
    #[inline]
    pub fn payoff(&self, spot: T) -> T {
        self.params.notional() * self.payoff_type.intrinsic(spot, self.strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_payoff() {
        let params = InstrumentParams::at_expiry(0.5_f64, 2.0).unwrap();
        let put = EquityIndexOption::new(100.0, params, PayoffType::Put).unwrap();
        assert_eq!(put.payoff(90.0), 20.0);
        assert_eq!(put.payoff(110.0), 0.0);
    }

    #[test]
    fn test_rejects_zero_strike() {
        let params = InstrumentParams::at_expiry(0.5_f64, 1.0).unwrap();
        let result = EquityIndexOption::new(0.0, params, PayoffType::Call);
        assert!(matches!(result, Err(InstrumentError::InvalidStrike { .. })));
    }
}
