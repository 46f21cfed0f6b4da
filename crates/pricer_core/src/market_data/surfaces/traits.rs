//! Volatility surface trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic volatility surface trait for implied volatility lookup.
///
/// # Contract
///
/// - `volatility(strike, expiry)` returns the implied volatility σ(K, T)
/// - `strike_domain()` and `expiry_domain()` bound the queries the surface
///   answers without extrapolating
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{VolatilitySurface, FlatVol};
///
/// let surface = FlatVol::new(0.20_f64);
/// assert_eq!(surface.volatility(100.0, 1.0).unwrap(), 0.20);
/// ```
pub trait VolatilitySurface<T: Float> {
    /// Return the implied volatility for given strike and expiry.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InvalidStrike` - If strike <= 0
    /// * `MarketDataError::InvalidExpiry` - If expiry <= 0
    /// * `MarketDataError::OutOfBounds` - If outside valid domain
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError>;

    /// Return the valid strike domain `(K_min, K_max)`.
    fn strike_domain(&self) -> (T, T);

    /// Return the valid expiry domain `(T_min, T_max)`.
    fn expiry_domain(&self) -> (T, T);
}

/// Validate a `(strike, expiry)` query before any lookup.
pub(crate) fn check_query<T: Float>(strike: T, expiry: T) -> Result<(), MarketDataError> {
    if !(strike > T::zero()) {
        return Err(MarketDataError::InvalidStrike {
            strike: strike.to_f64().unwrap_or(0.0),
        });
    }
    if !(expiry > T::zero()) {
        return Err(MarketDataError::InvalidExpiry {
            expiry: expiry.to_f64().unwrap_or(0.0),
        });
    }
    Ok(())
}
