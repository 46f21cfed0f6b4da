//! Common instrument parameters.

use num_traits::Float;

use super::error::InstrumentError;

/// Timing and size shared by every derivative.
///
/// Expiry is when the payoff is fixed; settlement is when it is paid and
/// therefore the maturity it is discounted from.
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentParams;
///
/// let params = InstrumentParams::new(1.0_f64, 1.01, 1_000_000.0).unwrap();
/// assert_eq!(params.expiry(), 1.0);
/// assert_eq!(params.settlement(), 1.01);
///
/// // Settlement before expiry is rejected
/// assert!(InstrumentParams::new(1.0_f64, 0.5, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentParams<T: Float> {
    expiry: T,
    settlement: T,
    notional: T,
}

impl<T: Float> InstrumentParams<T> {
    /// Creates new instrument parameters with validation.
    ///
    /// # Arguments
    /// * `expiry` - Time to expiry in years (must be positive)
    /// * `settlement` - Time to settlement in years (must not precede expiry)
    /// * `notional` - Notional amount (must be positive)
    pub fn new(expiry: T, settlement: T, notional: T) -> Result<Self, InstrumentError> {
        let zero = T::zero();

        if !(expiry > zero) {
            return Err(InstrumentError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !(settlement >= expiry) {
            return Err(InstrumentError::InvalidSettlement {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
                settlement: settlement.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !(notional > zero) {
            return Err(InstrumentError::InvalidNotional {
                notional: notional.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            expiry,
            settlement,
            notional,
        })
    }

    /// Parameters settling at expiry.
    pub fn at_expiry(expiry: T, notional: T) -> Result<Self, InstrumentError> {
        Self::new(expiry, expiry, notional)
    }

    /// Returns the time to expiry.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the time to settlement.
    #[inline]
    pub fn settlement(&self) -> T {
        self.settlement
    }

    /// Returns the notional amount.
    #[inline]
    pub fn notional(&self) -> T {
        self.notional
    }
}

/// Reject a non-positive strike.
pub(crate) fn check_strike<T: Float>(strike: T) -> Result<T, InstrumentError> {
    if strike > T::zero() {
        Ok(strike)
    } else {
        Err(InstrumentError::InvalidStrike {
            strike: strike.to_f64().unwrap_or(f64::NAN),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_params() {
        let params = InstrumentParams::new(0.5_f64, 0.51, 10.0).unwrap();
        assert_eq!(params.expiry(), 0.5);
        assert_eq!(params.settlement(), 0.51);
        assert_eq!(params.notional(), 10.0);
    }

    #[test]
    fn test_at_expiry() {
        let params = InstrumentParams::at_expiry(2.0_f64, 1.0).unwrap();
        assert_eq!(params.settlement(), 2.0);
    }

    #[test]
    fn test_new_invalid_expiry() {
        match InstrumentParams::new(-1.0_f64, 1.0, 1.0) {
            Err(InstrumentError::InvalidExpiry { expiry }) => assert_eq!(expiry, -1.0),
            other => panic!("Expected InvalidExpiry error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_invalid_notional() {
        let result = InstrumentParams::new(1.0_f64, 1.0, 0.0);
        assert!(matches!(result, Err(InstrumentError::InvalidNotional { .. })));
    }

    #[test]
    fn test_new_rejects_nan() {
        assert!(InstrumentParams::new(f64::NAN, 1.0, 1.0).is_err());
        assert!(InstrumentParams::new(1.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_check_strike() {
        assert_eq!(check_strike(100.0_f64).unwrap(), 100.0);
        assert!(matches!(
            check_strike(0.0_f64),
            Err(InstrumentError::InvalidStrike { .. })
        ));
    }
}
