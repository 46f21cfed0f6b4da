//! Interpolated yield curve implementation.

use super::{NodalCurve, YieldCurve};
use crate::market_data::error::MarketDataError;
use crate::math::interpolators::LinearInterpolator;
use num_traits::Float;

/// Interpolation method for yield curves.
///
/// Determines how rates or discount factors are interpolated between
/// pillar points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveInterpolation {
    /// Linear interpolation on zero rates.
    ///
    /// Interpolates the zero rate linearly between pillar points,
    /// then computes the discount factor as exp(-r*t).
    Linear,

    /// Log-linear interpolation on discount factors.
    ///
    /// Interpolates ln(D(t)) linearly, which is equivalent to
    /// assuming a constant forward rate between pillars.
    LogLinear,
}

/// Interpolated yield curve using pillar points.
///
/// Stores a set of (tenor, zero rate) pillars and interpolates between them.
/// Every pillar is a node for bucketed risk. A curve with a single pillar
/// behaves like a flat curve at that pillar's rate.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{YieldCurve, InterpolatedCurve, CurveInterpolation};
///
/// let tenors = [0.25_f64, 0.5, 1.0, 2.0, 5.0];
/// let rates = [0.02_f64, 0.025, 0.03, 0.035, 0.04];
///
/// let curve = InterpolatedCurve::new(
///     &tenors,
///     &rates,
///     CurveInterpolation::Linear,
///     false,
/// ).unwrap();
///
/// let r = curve.zero_rate(0.75).unwrap();
/// assert!((r - 0.0275).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct InterpolatedCurve<T: Float> {
    /// Sorted tenor points (years)
    tenors: Vec<T>,
    /// Corresponding zero rates
    rates: Vec<T>,
    method: CurveInterpolation,
    /// Whether to allow flat extrapolation
    allow_extrapolation: bool,
}

impl<T: Float> InterpolatedCurve<T> {
    /// Construct an interpolated curve from pillar points.
    ///
    /// # Arguments
    ///
    /// * `tenors` - Strictly increasing positive tenors in years, at least one
    /// * `rates` - Corresponding continuously compounded zero rates
    /// * `method` - Interpolation method to use
    /// * `allow_extrapolation` - Whether to extrapolate flat beyond the pillars
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InsufficientData` - No pillars
    /// * `MarketDataError::LengthMismatch` - `tenors` and `rates` differ in length
    /// * `MarketDataError::InvalidMaturity` - Non-positive or unsorted tenor
    pub fn new(
        tenors: &[T],
        rates: &[T],
        method: CurveInterpolation,
        allow_extrapolation: bool,
    ) -> Result<Self, MarketDataError> {
        if tenors.is_empty() {
            return Err(MarketDataError::InsufficientData { got: 0, need: 1 });
        }

        if tenors.len() != rates.len() {
            return Err(MarketDataError::LengthMismatch {
                first: tenors.len(),
                second: rates.len(),
            });
        }

        for i in 0..tenors.len() {
            if tenors[i] <= T::zero() || (i > 0 && tenors[i] <= tenors[i - 1]) {
                return Err(MarketDataError::InvalidMaturity {
                    t: tenors[i].to_f64().unwrap_or(0.0),
                });
            }
        }

        Ok(Self {
            tenors: tenors.to_vec(),
            rates: rates.to_vec(),
            method,
            allow_extrapolation,
        })
    }

    /// Return the tenor domain `(t_min, t_max)`.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.tenors[0], self.tenors[self.tenors.len() - 1])
    }

    /// Pillar tenors.
    #[inline]
    pub fn tenors(&self) -> &[T] {
        &self.tenors
    }

    /// Pillar zero rates.
    #[inline]
    pub fn rates(&self) -> &[T] {
        &self.rates
    }

    /// Interpolation method.
    #[inline]
    pub fn method(&self) -> CurveInterpolation {
        self.method
    }

    /// Whether queries beyond the pillars extrapolate flat.
    #[inline]
    pub fn allow_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    /// Return a new curve with `amount` added to every pillar rate.
    pub fn with_parallel_shift(&self, amount: T) -> Self {
        Self {
            tenors: self.tenors.clone(),
            rates: self.rates.iter().map(|&r| r + amount).collect(),
            method: self.method,
            allow_extrapolation: self.allow_extrapolation,
        }
    }

    fn check_domain(&self, t: T) -> Result<(), MarketDataError> {
        if self.allow_extrapolation || self.tenors.len() == 1 {
            return Ok(());
        }
        let (t_min, t_max) = self.domain();
        if t < t_min || t > t_max {
            return Err(MarketDataError::OutOfBounds {
                x: t.to_f64().unwrap_or(0.0),
                min: t_min.to_f64().unwrap_or(0.0),
                max: t_max.to_f64().unwrap_or(0.0),
            });
        }
        Ok(())
    }

    /// Linear weights of every pillar at `t`, flat beyond the pillars.
    fn pillar_weights(&self, t: T) -> Result<Vec<T>, MarketDataError> {
        if self.tenors.len() == 1 {
            return Ok(vec![T::one()]);
        }
        let interp = LinearInterpolator::new(&self.tenors, &self.rates)?;
        Ok(interp.weights(t))
    }

    fn extrapolated(&self, t: T) -> bool {
        let (t_min, t_max) = self.domain();
        t < t_min || t > t_max
    }

    /// `∂r(t)/∂rᵢ` for `t > 0` already checked against the domain.
    fn rate_weights(&self, t: T) -> Result<Vec<T>, MarketDataError> {
        let weights = self.pillar_weights(t)?;
        match self.method {
            CurveInterpolation::Linear => Ok(weights),
            CurveInterpolation::LogLinear if self.extrapolated(t) => Ok(weights),
            // -r(t)·t = Σ wᵢ·(-rᵢ·tᵢ)
            CurveInterpolation::LogLinear => Ok(weights
                .iter()
                .zip(self.tenors.iter())
                .map(|(&w, &ti)| w * ti / t)
                .collect()),
        }
    }

    fn interpolate_rate(&self, t: T) -> Result<T, MarketDataError> {
        self.check_domain(t)?;
        let weights = self.rate_weights(t)?;
        Ok(weights
            .iter()
            .zip(self.rates.iter())
            .fold(T::zero(), |acc, (&w, &r)| acc + w * r))
    }
}

impl<T: Float> YieldCurve<T> for InterpolatedCurve<T> {
    /// Return the discount factor for maturity `t`.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InvalidMaturity` - If t < 0
    /// * `MarketDataError::OutOfBounds` - If outside domain and extrapolation disabled
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        if t == T::zero() {
            return Ok(T::one());
        }
        let rate = self.interpolate_rate(t)?;
        Ok((-rate * t).exp())
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        self.interpolate_rate(t)
    }
}

impl<T: Float> NodalCurve<T> for InterpolatedCurve<T> {
    #[inline]
    fn node_count(&self) -> usize {
        self.tenors.len()
    }

    #[inline]
    fn node_tenor(&self, index: usize) -> Option<T> {
        self.tenors.get(index).copied()
    }

    /// Linear: the barycentric weights of the bracketing pillars.
    /// LogLinear: those weights scaled by `tᵢ / t`.
    /// At `t = 0` the whole weight sits on the first pillar.
    fn zero_rate_node_sensitivities(&self, t: T) -> Result<Vec<T>, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        if t == T::zero() {
            return self.pillar_weights(t);
        }
        self.check_domain(t)?;
        self.rate_weights(t)
    }
}
