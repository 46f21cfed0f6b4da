//! Static dispatch enum over the volatility surface implementations.

use super::{FlatVol, InterpolatedVolSurface, VolatilitySurface};
use crate::market_data::error::MarketDataError;
use crate::traits::risk::ShiftType;
use num_traits::Float;

/// Volatility surface held by a market data bundle.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{SurfaceEnum, VolatilitySurface};
/// use pricer_core::traits::risk::ShiftType;
///
/// let surface = SurfaceEnum::flat(0.2_f64);
/// assert!(surface.as_nodal().is_none());
///
/// let bumped = surface.with_parallel_shift(ShiftType::parallel(0.01));
/// assert!((bumped.volatility(100.0, 1.0).unwrap() - 0.21).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub enum SurfaceEnum<T: Float> {
    /// Constant volatility
    Flat(FlatVol<T>),
    /// Node-discrete interpolated surface
    Interpolated(InterpolatedVolSurface<T>),
}

impl<T: Float> SurfaceEnum<T> {
    /// Create a flat surface variant.
    #[inline]
    pub fn flat(sigma: T) -> Self {
        SurfaceEnum::Flat(FlatVol::new(sigma))
    }

    /// Return a new surface with the shift applied at every point.
    pub fn with_parallel_shift(&self, shift: ShiftType<T>) -> Self {
        match self {
            SurfaceEnum::Flat(surface) => SurfaceEnum::Flat(surface.with_shift(shift)),
            SurfaceEnum::Interpolated(surface) => {
                SurfaceEnum::Interpolated(surface.with_shift(shift))
            }
        }
    }

    /// Node view of the surface, `None` when it has no discrete nodes.
    #[inline]
    pub fn as_nodal(&self) -> Option<&InterpolatedVolSurface<T>> {
        match self {
            SurfaceEnum::Interpolated(surface) => Some(surface),
            SurfaceEnum::Flat(_) => None,
        }
    }

    /// Name of the concrete representation.
    pub fn kind(&self) -> &'static str {
        match self {
            SurfaceEnum::Flat(_) => "FlatVol",
            SurfaceEnum::Interpolated(_) => "InterpolatedVolSurface",
        }
    }
}

impl<T: Float> VolatilitySurface<T> for SurfaceEnum<T> {
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        match self {
            SurfaceEnum::Flat(surface) => surface.volatility(strike, expiry),
            SurfaceEnum::Interpolated(surface) => surface.volatility(strike, expiry),
        }
    }

    fn strike_domain(&self) -> (T, T) {
        match self {
            SurfaceEnum::Flat(surface) => surface.strike_domain(),
            SurfaceEnum::Interpolated(surface) => surface.strike_domain(),
        }
    }

    fn expiry_domain(&self) -> (T, T) {
        match self {
            SurfaceEnum::Flat(surface) => surface.expiry_domain(),
            SurfaceEnum::Interpolated(surface) => surface.expiry_domain(),
        }
    }
}

impl<T: Float> From<FlatVol<T>> for SurfaceEnum<T> {
    fn from(surface: FlatVol<T>) -> Self {
        SurfaceEnum::Flat(surface)
    }
}

impl<T: Float> From<InterpolatedVolSurface<T>> for SurfaceEnum<T> {
    fn from(surface: InterpolatedVolSurface<T>) -> Self {
        SurfaceEnum::Interpolated(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodal() -> SurfaceEnum<f64> {
        InterpolatedVolSurface::new(&[1.0, 2.0], &[100.0, 100.0], &[0.2, 0.3], true)
            .unwrap()
            .into()
    }

    #[test]
    fn test_as_nodal() {
        assert!(SurfaceEnum::flat(0.2_f64).as_nodal().is_none());
        let surface = nodal();
        let view = surface.as_nodal().unwrap();
        assert_eq!(view.maturities(), &[1.0, 2.0]);
        assert_eq!(surface.kind(), "InterpolatedVolSurface");
    }

    #[test]
    fn test_parallel_shift_on_nodal_surface() {
        let down = nodal().with_parallel_shift(ShiftType::parallel(-0.05));
        assert!((down.volatility(100.0, 1.5).unwrap() - 0.2).abs() < 1e-14);
        assert!(matches!(down, SurfaceEnum::Interpolated(_)));
    }

    #[test]
    fn test_relative_shift_on_flat_surface() {
        let up = SurfaceEnum::flat(0.2_f64).with_parallel_shift(ShiftType::relative(0.1));
        assert!((up.volatility(100.0, 1.0).unwrap() - 0.22).abs() < 1e-15);
        assert_eq!(up.kind(), "FlatVol");
    }
}
