//! Forward level curve.

use super::{CurveEnum, CurveName, YieldCurve};
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Curve of forward levels of an underlying (index, share, commodity).
///
/// The forward is carried from spot by a drift curve:
///
/// ```text
/// F(t) = scale · spot / D_drift(t)
/// ```
///
/// `scale` starts at one and absorbs fractional shifts, so a shifted curve
/// moves every forward it returns by the same proportion.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{CurveEnum, ForwardCurve};
///
/// let curve = ForwardCurve::new("SPX", 100.0_f64, CurveEnum::flat(0.02));
/// let f = curve.forward(1.0).unwrap();
/// assert!((f - 100.0 * 0.02_f64.exp()).abs() < 1e-10);
///
/// let up = curve.with_fractional_shift(0.01);
/// assert!((up.forward(1.0).unwrap() - 1.01 * f).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct ForwardCurve<T: Float> {
    name: CurveName,
    spot: T,
    drift: CurveEnum<T>,
    scale: T,
}

impl<T: Float> ForwardCurve<T> {
    /// Forward curve from spot and a carry (drift) curve.
    pub fn new(name: impl Into<CurveName>, spot: T, drift: impl Into<CurveEnum<T>>) -> Self {
        Self {
            name: name.into(),
            spot,
            drift: drift.into(),
            scale: T::one(),
        }
    }

    /// Forward curve returning `level` at every maturity.
    pub fn flat(name: impl Into<CurveName>, level: T) -> Self {
        Self::new(name, level, CurveEnum::flat(T::zero()))
    }

    /// Curve name.
    #[inline]
    pub fn name(&self) -> &CurveName {
        &self.name
    }

    /// Spot level.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Multiplicative scale accumulated from fractional shifts.
    #[inline]
    pub fn scale(&self) -> T {
        self.scale
    }

    /// Drift curve.
    #[inline]
    pub fn drift(&self) -> &CurveEnum<T> {
        &self.drift
    }

    /// Forward level for maturity `t`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if `t < 0`, or any error of the
    /// drift curve lookup.
    pub fn forward(&self, t: T) -> Result<T, MarketDataError> {
        let df = self.drift.discount_factor(t)?;
        Ok(self.scale * self.spot / df)
    }

    /// Return a new curve whose every forward is multiplied by `1 + shift`.
    pub fn with_fractional_shift(&self, shift: T) -> Self {
        Self {
            name: self.name.clone(),
            spot: self.spot,
            drift: self.drift.clone(),
            scale: self.scale * (T::one() + shift),
        }
    }
}
