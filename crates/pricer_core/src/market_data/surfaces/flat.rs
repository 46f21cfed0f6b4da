//! Flat volatility surface implementation.

use super::traits::check_query;
use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use crate::traits::risk::ShiftType;
use num_traits::Float;

/// Flat volatility surface with constant implied volatility.
///
/// The same volatility applies to all strike and expiry combinations. The
/// surface has no discrete nodes, so only parallel shifts apply to it.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{VolatilitySurface, FlatVol};
///
/// let surface = FlatVol::new(0.20_f64);
///
/// assert_eq!(surface.volatility(80.0, 0.5).unwrap(), 0.20);
/// assert_eq!(surface.volatility(120.0, 2.0).unwrap(), 0.20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatVol<T: Float> {
    /// The constant implied volatility
    sigma: T,
}

impl<T: Float> FlatVol<T> {
    /// Construct a flat volatility surface.
    #[inline]
    pub fn new(sigma: T) -> Self {
        Self { sigma }
    }

    /// Return the constant volatility.
    #[inline]
    pub fn sigma(&self) -> T {
        self.sigma
    }

    /// Return a new surface with the shift applied to the constant volatility.
    ///
    /// ```
    /// use pricer_core::market_data::surfaces::FlatVol;
    /// use pricer_core::traits::risk::ShiftType;
    ///
    /// let bumped = FlatVol::new(0.20_f64).with_shift(ShiftType::relative(0.5));
    /// assert!((bumped.sigma() - 0.30).abs() < 1e-15);
    /// ```
    #[inline]
    pub fn with_shift(&self, shift: ShiftType<T>) -> Self {
        Self::new(shift.apply(self.sigma))
    }
}

impl<T: Float> VolatilitySurface<T> for FlatVol<T> {
    /// Returns the constant volatility for any positive strike and expiry.
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        check_query(strike, expiry)?;
        Ok(self.sigma)
    }

    #[inline]
    fn strike_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    #[inline]
    fn expiry_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Volatility Lookup Tests
    // ========================================

    #[test]
    fn test_volatility_constant() {
        let surface = FlatVol::new(0.25_f64);
        for (strike, expiry) in [(80.0, 0.25), (100.0, 1.0), (120.0, 5.0)] {
            assert_eq!(surface.volatility(strike, expiry).unwrap(), 0.25);
        }
    }

    #[test]
    fn test_volatility_invalid_inputs() {
        let surface = FlatVol::new(0.20_f64);
        match surface.volatility(-100.0, 1.0).unwrap_err() {
            MarketDataError::InvalidStrike { strike } => assert_eq!(strike, -100.0),
            _ => panic!("Expected InvalidStrike error"),
        }
        match surface.volatility(100.0, 0.0).unwrap_err() {
            MarketDataError::InvalidExpiry { expiry } => assert_eq!(expiry, 0.0),
            _ => panic!("Expected InvalidExpiry error"),
        }
    }

    #[test]
    fn test_domains_are_unbounded() {
        let surface = FlatVol::new(0.20_f64);
        assert!(surface.strike_domain().1.is_infinite());
        assert!(surface.expiry_domain().1.is_infinite());
    }

    // ========================================
    // Shift Tests
    // ========================================

    #[test]
    fn test_additive_shift_up_and_down() {
        let surface = FlatVol::new(0.20_f64);
        let shift = ShiftType::parallel(0.001);
        assert!((surface.with_shift(shift).sigma() - 0.201).abs() < 1e-15);
        assert!((surface.with_shift(shift.negated()).sigma() - 0.199).abs() < 1e-15);
        assert_eq!(surface.sigma(), 0.20);
    }

    #[test]
    fn test_with_f32() {
        let surface = FlatVol::new(0.25_f32);
        assert_eq!(surface.volatility(100.0_f32, 1.0_f32).unwrap(), 0.25_f32);
    }
}
