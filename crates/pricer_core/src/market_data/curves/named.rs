//! Yield curve tagged with its name.

use super::{CurveEnum, CurveName, NodalCurve, YieldCurve};
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// A yield curve together with the name it is quoted under.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{CurveEnum, NamedCurve, YieldCurve};
///
/// let curve = NamedCurve::new("USD-OIS", CurveEnum::flat(0.04_f64));
/// assert_eq!(curve.name().as_str(), "USD-OIS");
/// assert_eq!(curve.zero_rate(1.0).unwrap(), 0.04);
/// ```
#[derive(Debug, Clone)]
pub struct NamedCurve<T: Float> {
    name: CurveName,
    curve: CurveEnum<T>,
}

impl<T: Float> NamedCurve<T> {
    /// Attach a name to a curve.
    pub fn new(name: impl Into<CurveName>, curve: impl Into<CurveEnum<T>>) -> Self {
        Self {
            name: name.into(),
            curve: curve.into(),
        }
    }

    /// Curve name.
    #[inline]
    pub fn name(&self) -> &CurveName {
        &self.name
    }

    /// Underlying curve.
    #[inline]
    pub fn curve(&self) -> &CurveEnum<T> {
        &self.curve
    }

    /// Same name, every node rate moved by `amount`.
    pub fn with_parallel_shift(&self, amount: T) -> Self {
        Self {
            name: self.name.clone(),
            curve: self.curve.with_parallel_shift(amount),
        }
    }
}

impl<T: Float> YieldCurve<T> for NamedCurve<T> {
    #[inline]
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        self.curve.discount_factor(t)
    }

    #[inline]
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        self.curve.zero_rate(t)
    }

    #[inline]
    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        self.curve.forward_rate(t1, t2)
    }
}

impl<T: Float> NodalCurve<T> for NamedCurve<T> {
    #[inline]
    fn node_count(&self) -> usize {
        self.curve.node_count()
    }

    #[inline]
    fn node_tenor(&self, index: usize) -> Option<T> {
        self.curve.node_tenor(index)
    }

    #[inline]
    fn zero_rate_node_sensitivities(&self, t: T) -> Result<Vec<T>, MarketDataError> {
        self.curve.zero_rate_node_sensitivities(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::curves::FlatCurve;

    #[test]
    fn test_delegates_to_curve() {
        let curve = NamedCurve::new("EUR-ESTR", FlatCurve::new(0.03_f64));
        assert!((curve.discount_factor(2.0).unwrap() - (-0.06_f64).exp()).abs() < 1e-12);
        assert_eq!(curve.node_count(), 1);
        assert_eq!(curve.zero_rate_node_sensitivities(2.0).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_parallel_shift_keeps_name() {
        let curve = NamedCurve::new("EUR-ESTR", CurveEnum::flat(0.03_f64));
        let shifted = curve.with_parallel_shift(0.01);
        assert_eq!(shifted.name(), curve.name());
        assert!((shifted.zero_rate(1.0).unwrap() - 0.04).abs() < 1e-12);
    }
}
