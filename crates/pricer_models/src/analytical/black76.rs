//! Black-76 pricing formulas for European options on a forward.
//!
//! ## Mathematical Formulas
//!
//! Undiscounted, per unit notional:
//!
//! **Call**: C = F·N(d₁) - K·N(d₂)
//! **Put**: P = K·N(-d₂) - F·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(F/K) + σ²T/2) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Discounting is left to the caller so the same formula serves any
//! settlement convention.

use num_traits::Float;

use super::distributions::{constant, norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::PayoffType;

/// Total volatility below which the option is treated as intrinsic.
const MIN_TOTAL_VOL: f64 = 1e-12;

/// Black-76 model on a fixed forward level.
///
/// # Examples
/// ```
/// use pricer_models::analytical::Black76;
///
/// let black = Black76::new(100.0_f64, 0.2).unwrap();
/// let call = black.price_call(100.0, 1.0);
/// let put = black.price_put(100.0, 1.0);
///
/// // Put-call parity on the forward: C - P = F - K
/// assert!((call - put).abs() < 1e-12);
/// // ATM approximation: C ≈ 0.4·F·σ√T
/// assert!((call - 7.9656).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Black76<T: Float> {
    forward: T,
    volatility: T,
}

impl<T: Float> Black76<T> {
    /// Creates a new Black-76 model.
    ///
    /// Zero volatility is accepted and prices at intrinsic value.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidForward` if forward <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility < 0 or not finite
    pub fn new(forward: T, volatility: T) -> Result<Self, AnalyticalError> {
        if !(forward > T::zero()) {
            return Err(AnalyticalError::InvalidForward {
                forward: forward.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !(volatility >= T::zero()) || !volatility.is_finite() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            forward,
            volatility,
        })
    }

    /// Returns the forward level.
    #[inline]
    pub fn forward(&self) -> T {
        self.forward
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    #[inline]
    fn total_vol(&self, expiry: T) -> T {
        self.volatility * expiry.max(T::zero()).sqrt()
    }

    #[inline]
    fn is_degenerate(&self, expiry: T) -> bool {
        self.total_vol(expiry) <= constant::<T>(MIN_TOTAL_VOL)
    }

    /// d₁ = (ln(F/K) + σ²T/2) / (σ√T)
    ///
    /// Infinite when the total volatility vanishes.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let total_vol = self.total_vol(expiry);
        let log_moneyness = (self.forward / strike).ln();
        (log_moneyness + constant::<T>(0.5) * total_vol * total_vol) / total_vol
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.total_vol(expiry)
    }

    /// Undiscounted call value.
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return PayoffType::Call.intrinsic(self.forward, strike);
        }
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        self.forward * norm_cdf(d1) - strike * norm_cdf(d2)
    }

    /// Undiscounted put value.
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return PayoffType::Put.intrinsic(self.forward, strike);
        }
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        strike * norm_cdf(-d2) - self.forward * norm_cdf(-d1)
    }

    /// Undiscounted value for either payoff.
    #[inline]
    pub fn price(&self, payoff: PayoffType, strike: T, expiry: T) -> T {
        match payoff {
            PayoffType::Call => self.price_call(strike, expiry),
            PayoffType::Put => self.price_put(strike, expiry),
        }
    }

    /// Forward delta, ∂V/∂F.
    pub fn delta(&self, payoff: PayoffType, strike: T, expiry: T) -> T {
        let one = T::one();
        let zero = T::zero();
        if self.is_degenerate(expiry) {
            let itm_call = if self.forward > strike { one } else { zero };
            return match payoff {
                PayoffType::Call => itm_call,
                PayoffType::Put => itm_call - one,
            };
        }
        let n_d1 = norm_cdf(self.d1(strike, expiry));
        match payoff {
            PayoffType::Call => n_d1,
            PayoffType::Put => n_d1 - one,
        }
    }

    /// Vega, ∂V/∂σ = F·φ(d₁)·√T, identical for calls and puts.
    pub fn vega(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return T::zero();
        }
        self.forward * norm_pdf(self.d1(strike, expiry)) * expiry.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    // ==========================================================
    // Construction
    // ==========================================================

    #[test]
    fn test_rejects_non_positive_forward() {
        assert!(matches!(
            Black76::new(0.0_f64, 0.2),
            Err(AnalyticalError::InvalidForward { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_volatility() {
        assert!(matches!(
            Black76::new(100.0_f64, -0.01),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
    }

    // ==========================================================
    // Prices
    // ==========================================================

    #[test]
    fn test_reference_price() {
        // F = 100, K = 95, σ = 0.25, T = 0.5
        let black = Black76::new(100.0_f64, 0.25).unwrap();
        let d1 = ((100.0_f64 / 95.0).ln() + 0.5 * 0.0625 * 0.5) / (0.25 * 0.5_f64.sqrt());
        assert_relative_eq!(black.d1(95.0, 0.5), d1, epsilon = 1e-14);
        let call = black.price_call(95.0, 0.5);
        assert!(call > 5.0 && call < 10.0);
    }

    #[test]
    fn test_zero_vol_is_intrinsic() {
        let black = Black76::new(110.0_f64, 0.0).unwrap();
        assert_eq!(black.price_call(100.0, 1.0), 10.0);
        assert_eq!(black.price_put(100.0, 1.0), 0.0);
        assert_eq!(black.vega(100.0, 1.0), 0.0);
        assert_eq!(black.delta(PayoffType::Put, 100.0, 1.0), 0.0);
    }

    #[test]
    fn test_vega_matches_finite_difference() {
        let k = 105.0;
        let t = 0.75;
        // Prices go through the erfc approximation (error ~1.5e-7), so steps
        // must be wide enough that its wiggle does not dominate.
        let h = 1e-3;
        let up = Black76::new(100.0_f64, 0.2 + h).unwrap().price_call(k, t);
        let down = Black76::new(100.0_f64, 0.2 - h).unwrap().price_call(k, t);
        let vega = Black76::new(100.0_f64, 0.2).unwrap().vega(k, t);
        assert_relative_eq!((up - down) / (2.0 * h), vega, max_relative = 1e-4);
    }

    #[test]
    fn test_delta_matches_finite_difference() {
        let k = 95.0;
        let t = 1.0;
        let h = 1e-2;
        let up = Black76::new(100.0_f64 + h, 0.3).unwrap();
        let down = Black76::new(100.0_f64 - h, 0.3).unwrap();
        let fd = (up.price_put(k, t) - down.price_put(k, t)) / (2.0 * h);
        let delta = Black76::new(100.0_f64, 0.3)
            .unwrap()
            .delta(PayoffType::Put, k, t);
        assert_abs_diff_eq!(fd, delta, epsilon = 1e-4);
    }

    proptest! {
        #[test]
        fn prop_put_call_parity(
            forward in 10.0..500.0_f64,
            strike in 10.0..500.0_f64,
            vol in 0.01..1.0_f64,
            expiry in 0.01..10.0_f64,
        ) {
            let black = Black76::new(forward, vol).unwrap();
            let parity = black.price_call(strike, expiry) - black.price_put(strike, expiry);
            prop_assert!((parity - (forward - strike)).abs() < 1e-6 * forward.max(strike));
        }

        #[test]
        fn prop_price_above_intrinsic(
            forward in 10.0..500.0_f64,
            strike in 10.0..500.0_f64,
            vol in 0.01..1.0_f64,
            expiry in 0.01..10.0_f64,
        ) {
            let black = Black76::new(forward, vol).unwrap();
            let intrinsic = (forward - strike).max(0.0);
            prop_assert!(black.price_call(strike, expiry) >= intrinsic - 1e-6 * forward);
        }
    }
}
