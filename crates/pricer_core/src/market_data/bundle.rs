//! Market data used together to price one instrument.

use super::curves::{ForwardCurve, NamedCurve};
use super::surfaces::SurfaceEnum;
use crate::traits::risk::ShiftType;
use num_traits::Float;

/// Volatility surface, discount curve and forward curve of one pricing.
///
/// A bundle is an immutable value. Every `with_*` method returns a new
/// bundle and leaves the receiver untouched, so bumped scenarios never
/// disturb the base market.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::{CurveEnum, ForwardCurve, MarketDataBundle, NamedCurve, SurfaceEnum};
///
/// let market = MarketDataBundle::new(
///     SurfaceEnum::flat(0.2_f64),
///     NamedCurve::new("USD-OIS", CurveEnum::flat(0.03)),
///     ForwardCurve::flat("SPX", 5000.0),
/// );
///
/// let up = market.with_forward_fractional_shift(0.01);
/// assert!((up.forward_curve().forward(1.0).unwrap() - 5050.0).abs() < 1e-9);
/// assert_eq!(market.forward_curve().forward(1.0).unwrap(), 5000.0);
/// ```
#[derive(Debug, Clone)]
pub struct MarketDataBundle<T: Float> {
    volatility_surface: SurfaceEnum<T>,
    discount_curve: NamedCurve<T>,
    forward_curve: ForwardCurve<T>,
}

impl<T: Float> MarketDataBundle<T> {
    /// Group the three market inputs.
    pub fn new(
        volatility_surface: impl Into<SurfaceEnum<T>>,
        discount_curve: NamedCurve<T>,
        forward_curve: ForwardCurve<T>,
    ) -> Self {
        Self {
            volatility_surface: volatility_surface.into(),
            discount_curve,
            forward_curve,
        }
    }

    /// Implied volatility surface.
    #[inline]
    pub fn volatility_surface(&self) -> &SurfaceEnum<T> {
        &self.volatility_surface
    }

    /// Discounting curve.
    #[inline]
    pub fn discount_curve(&self) -> &NamedCurve<T> {
        &self.discount_curve
    }

    /// Forward curve of the underlying.
    #[inline]
    pub fn forward_curve(&self) -> &ForwardCurve<T> {
        &self.forward_curve
    }

    /// Same market with another volatility surface.
    pub fn with_volatility_surface(&self, surface: impl Into<SurfaceEnum<T>>) -> Self {
        Self {
            volatility_surface: surface.into(),
            ..self.clone()
        }
    }

    /// Same market with another discount curve.
    pub fn with_discount_curve(&self, curve: NamedCurve<T>) -> Self {
        Self {
            discount_curve: curve,
            ..self.clone()
        }
    }

    /// Same market with another forward curve.
    pub fn with_forward_curve(&self, curve: ForwardCurve<T>) -> Self {
        Self {
            forward_curve: curve,
            ..self.clone()
        }
    }

    /// Every forward scaled by `1 + shift`.
    pub fn with_forward_fractional_shift(&self, shift: T) -> Self {
        self.with_forward_curve(self.forward_curve.with_fractional_shift(shift))
    }

    /// The whole volatility surface moved by `shift`.
    pub fn with_volatility_parallel_shift(&self, shift: ShiftType<T>) -> Self {
        self.with_volatility_surface(self.volatility_surface.with_parallel_shift(shift))
    }
}
