//! Static dispatch enum wrapping FlatCurve and InterpolatedCurve.

use super::{FlatCurve, InterpolatedCurve, NodalCurve, YieldCurve};
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Static dispatch enum wrapping concrete yield curve implementations.
///
/// Avoids trait objects while keeping the curve generic over `T: Float`.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{CurveEnum, FlatCurve, YieldCurve};
///
/// let curve = CurveEnum::Flat(FlatCurve::new(0.05_f64));
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub enum CurveEnum<T: Float> {
    /// Flat (constant rate) yield curve
    Flat(FlatCurve<T>),
    /// Interpolated yield curve with pillar points
    Interpolated(InterpolatedCurve<T>),
}

impl<T: Float> CurveEnum<T> {
    /// Create a flat curve variant.
    ///
    /// ```
    /// use pricer_core::market_data::curves::{CurveEnum, YieldCurve};
    ///
    /// let curve = CurveEnum::flat(0.05_f64);
    /// assert_eq!(curve.zero_rate(2.0).unwrap(), 0.05);
    /// ```
    #[inline]
    pub fn flat(rate: T) -> Self {
        CurveEnum::Flat(FlatCurve::new(rate))
    }

    /// Return a new curve with `amount` added to every node rate.
    pub fn with_parallel_shift(&self, amount: T) -> Self {
        match self {
            CurveEnum::Flat(curve) => CurveEnum::Flat(curve.with_parallel_shift(amount)),
            CurveEnum::Interpolated(curve) => {
                CurveEnum::Interpolated(curve.with_parallel_shift(amount))
            }
        }
    }
}

impl<T: Float> YieldCurve<T> for CurveEnum<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        match self {
            CurveEnum::Flat(curve) => curve.discount_factor(t),
            CurveEnum::Interpolated(curve) => curve.discount_factor(t),
        }
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        match self {
            CurveEnum::Flat(curve) => curve.zero_rate(t),
            CurveEnum::Interpolated(curve) => curve.zero_rate(t),
        }
    }

    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        match self {
            CurveEnum::Flat(curve) => curve.forward_rate(t1, t2),
            CurveEnum::Interpolated(curve) => curve.forward_rate(t1, t2),
        }
    }
}

impl<T: Float> NodalCurve<T> for CurveEnum<T> {
    fn node_count(&self) -> usize {
        match self {
            CurveEnum::Flat(curve) => curve.node_count(),
            CurveEnum::Interpolated(curve) => curve.node_count(),
        }
    }

    fn node_tenor(&self, index: usize) -> Option<T> {
        match self {
            CurveEnum::Flat(curve) => curve.node_tenor(index),
            CurveEnum::Interpolated(curve) => curve.node_tenor(index),
        }
    }

    fn zero_rate_node_sensitivities(&self, t: T) -> Result<Vec<T>, MarketDataError> {
        match self {
            CurveEnum::Flat(curve) => curve.zero_rate_node_sensitivities(t),
            CurveEnum::Interpolated(curve) => curve.zero_rate_node_sensitivities(t),
        }
    }
}

impl<T: Float> From<FlatCurve<T>> for CurveEnum<T> {
    fn from(curve: FlatCurve<T>) -> Self {
        CurveEnum::Flat(curve)
    }
}

impl<T: Float> From<InterpolatedCurve<T>> for CurveEnum<T> {
    fn from(curve: InterpolatedCurve<T>) -> Self {
        CurveEnum::Interpolated(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::curves::CurveInterpolation;

    fn interpolated() -> CurveEnum<f64> {
        InterpolatedCurve::new(
            &[0.5_f64, 1.0, 2.0],
            &[0.02, 0.03, 0.04],
            CurveInterpolation::Linear,
            false,
        )
        .unwrap()
        .into()
    }

    // ========================================
    // Dispatch Tests
    // ========================================

    #[test]
    fn test_flat_dispatch() {
        let curve = CurveEnum::flat(0.05_f64);
        assert!((curve.discount_factor(1.0).unwrap() - (-0.05_f64).exp()).abs() < 1e-12);
        assert!((curve.forward_rate(1.0, 2.0).unwrap() - 0.05).abs() < 1e-12);
        assert_eq!(curve.node_count(), 1);
    }

    #[test]
    fn test_interpolated_dispatch() {
        let curve = interpolated();
        assert!((curve.zero_rate(1.0).unwrap() - 0.03).abs() < 1e-12);
        assert_eq!(curve.node_count(), 3);
        assert_eq!(curve.node_tenor(1), Some(1.0));
        assert_eq!(
            curve.zero_rate_node_sensitivities(0.75).unwrap(),
            vec![0.5, 0.5, 0.0]
        );
        assert!(curve.discount_factor(0.25).is_err());
    }

    #[test]
    fn test_parallel_shift_keeps_variant() {
        let shifted = interpolated().with_parallel_shift(0.01);
        assert!(matches!(shifted, CurveEnum::Interpolated(_)));
        assert!((shifted.zero_rate(2.0).unwrap() - 0.05).abs() < 1e-12);

        let shifted = CurveEnum::flat(0.01_f64).with_parallel_shift(-0.02);
        assert!((shifted.zero_rate(1.0).unwrap() + 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_with_f32() {
        let curve = CurveEnum::flat(0.05_f32);
        let df = curve.discount_factor(1.0_f32).unwrap();
        assert!((df - (-0.05_f32).exp()).abs() < 1e-6);
    }
}
