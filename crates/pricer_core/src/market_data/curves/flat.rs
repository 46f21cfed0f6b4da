//! Flat yield curve implementation.

use super::{NodalCurve, YieldCurve};
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Flat yield curve with constant interest rate.
///
/// The curve has a single node, its rate, so every zero-rate sensitivity
/// lands entirely on that node.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.05_f64);
///
/// // Discount factor at t=1: exp(-0.05 * 1) ≈ 0.9512
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
///
/// // Zero rate is constant
/// assert_eq!(curve.zero_rate(1.0).unwrap(), 0.05);
/// assert_eq!(curve.zero_rate(5.0).unwrap(), 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCurve<T: Float> {
    /// The constant interest rate
    rate: T,
}

impl<T: Float> FlatCurve<T> {
    /// Construct a flat curve with the given continuously compounded rate.
    #[inline]
    pub fn new(rate: T) -> Self {
        Self { rate }
    }

    /// Return the constant rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Return a new curve with `amount` added to the rate.
    ///
    /// ```
    /// use pricer_core::market_data::curves::FlatCurve;
    ///
    /// let bumped = FlatCurve::new(0.03_f64).with_parallel_shift(0.0001);
    /// assert!((bumped.rate() - 0.0301).abs() < 1e-15);
    /// ```
    #[inline]
    pub fn with_parallel_shift(&self, amount: T) -> Self {
        Self::new(self.rate + amount)
    }
}

impl<T: Float> YieldCurve<T> for FlatCurve<T> {
    /// `D(t) = exp(-r * t)`
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok((-self.rate * t).exp())
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.rate)
    }

    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        if t2 <= t1 {
            return Err(MarketDataError::InvalidMaturity {
                t: (t2 - t1).to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.rate)
    }
}

impl<T: Float> NodalCurve<T> for FlatCurve<T> {
    #[inline]
    fn node_count(&self) -> usize {
        1
    }

    #[inline]
    fn node_tenor(&self, _index: usize) -> Option<T> {
        None
    }

    fn zero_rate_node_sensitivities(&self, t: T) -> Result<Vec<T>, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok(vec![T::one()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Discount Factor Tests
    // ========================================

    #[test]
    fn test_discount_factor_at_zero() {
        let curve = FlatCurve::new(0.05_f64);
        assert!((curve.discount_factor(0.0).unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_discount_factor_at_multiple_years() {
        let curve = FlatCurve::new(0.05_f64);
        for t in [0.5, 1.0, 2.0, 5.0, 10.0] {
            let df = curve.discount_factor(t).unwrap();
            let expected = (-0.05 * t).exp();
            assert!((df - expected).abs() < 1e-10, "Failed at t={}", t);
        }
    }

    #[test]
    fn test_discount_factor_negative_maturity() {
        let curve = FlatCurve::new(0.05_f64);
        match curve.discount_factor(-1.0).unwrap_err() {
            MarketDataError::InvalidMaturity { t } => assert_eq!(t, -1.0),
            _ => panic!("Expected InvalidMaturity error"),
        }
    }

    #[test]
    fn test_discount_factor_with_negative_rate() {
        let curve = FlatCurve::new(-0.01_f64);
        let df = curve.discount_factor(1.0).unwrap();
        assert!((df - 0.01_f64.exp()).abs() < 1e-10);
    }

    // ========================================
    // Rate Tests
    // ========================================

    #[test]
    fn test_zero_and_forward_rates_are_constant() {
        let curve = FlatCurve::new(0.03_f64);
        assert_eq!(curve.zero_rate(0.25).unwrap(), 0.03);
        assert_eq!(curve.zero_rate(10.0).unwrap(), 0.03);
        assert_eq!(curve.forward_rate(2.0, 5.0).unwrap(), 0.03);
        assert!(curve.zero_rate(0.0).is_err());
        assert!(curve.forward_rate(1.0, 1.0).is_err());
    }

    // ========================================
    // Node Tests
    // ========================================

    #[test]
    fn test_single_node_takes_all_sensitivity() {
        let curve = FlatCurve::new(0.02_f64);
        assert_eq!(curve.node_count(), 1);
        assert_eq!(curve.node_tenor(0), None);
        assert_eq!(curve.zero_rate_node_sensitivities(7.5).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_with_f32() {
        let curve = FlatCurve::new(0.05_f32);
        let df = curve.discount_factor(1.0_f32).unwrap();
        assert!((df - (-0.05_f32).exp()).abs() < 1e-6);
    }
}
