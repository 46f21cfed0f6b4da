//! Node-discrete interpolated volatility surface.

use super::traits::check_query;
use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use crate::traits::risk::ShiftType;
use num_traits::Float;
use std::cmp::Ordering;

/// Value given to a node inserted by [`InterpolatedVolSurface::with_node_shift`]
/// when the shifted coordinate is not an existing node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NodeInsertion {
    /// The surface's interpolated value at the coordinate plus the shift.
    #[default]
    BasePlusShift,
    /// The shift amount alone.
    ShiftOnly,
}

/// Volatility surface defined by a scatter of `(maturity, strike, vol)` nodes.
///
/// Nodes are stored as three index-aligned arrays in insertion order. For a
/// lookup the nodes are grouped into expiry slices (nodes sharing exactly
/// the same maturity); each slice is interpolated linearly in strike and the
/// slice values are then interpolated linearly in expiry. Both steps hold the
/// boundary value flat beyond the outermost node. A slice holding a single
/// node is flat in strike.
///
/// The slices are built once per surface, so a lookup costs two binary
/// searches over slices plus one per bracketing slice.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{InterpolatedVolSurface, VolatilitySurface};
///
/// let surface = InterpolatedVolSurface::new(
///     &[1.0_f64, 1.0, 2.0, 2.0],
///     &[90.0, 110.0, 90.0, 110.0],
///     &[0.20, 0.22, 0.24, 0.26],
///     true,
/// ).unwrap();
///
/// let vol = surface.volatility(100.0, 1.5).unwrap();
/// assert!((vol - 0.23).abs() < 1e-12);
/// assert_eq!(surface.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct InterpolatedVolSurface<T: Float> {
    maturities: Vec<T>,
    strikes: Vec<T>,
    vols: Vec<T>,
    /// Whether to allow flat extrapolation beyond the node domain
    allow_extrapolation: bool,
    /// Nodes grouped by maturity, ascending
    slices: Vec<ExpirySlice<T>>,
    strike_domain: (T, T),
    expiry_domain: (T, T),
}

/// Nodes sharing one maturity, sorted by strike.
#[derive(Debug, Clone)]
struct ExpirySlice<T: Float> {
    maturity: T,
    strikes: Vec<T>,
    vols: Vec<T>,
}

impl<T: Float> ExpirySlice<T> {
    /// Linear in strike, flat beyond the outermost strikes.
    fn value(&self, strike: T) -> T {
        let upper = self.strikes.partition_point(|&k| k < strike);
        if upper == 0 {
            return self.vols[0];
        }
        if upper == self.strikes.len() {
            return self.vols[upper - 1];
        }
        let (k0, k1) = (self.strikes[upper - 1], self.strikes[upper]);
        let (v0, v1) = (self.vols[upper - 1], self.vols[upper]);
        if k1 == strike {
            return v1;
        }
        v0 + (strike - k0) / (k1 - k0) * (v1 - v0)
    }
}

impl<T: Float> InterpolatedVolSurface<T> {
    /// Construct a surface from index-aligned node arrays.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::LengthMismatch` - Arrays of different length
    /// * `MarketDataError::InsufficientData` - No nodes
    /// * `MarketDataError::InvalidExpiry` - Non-positive maturity
    /// * `MarketDataError::InvalidStrike` - Non-positive strike
    /// * `MarketDataError::InvalidVolatility` - Negative or non-finite volatility
    /// * `MarketDataError::DuplicateNode` - Two nodes at the same coordinate
    pub fn new(
        maturities: &[T],
        strikes: &[T],
        vols: &[T],
        allow_extrapolation: bool,
    ) -> Result<Self, MarketDataError> {
        if maturities.len() != strikes.len() {
            return Err(MarketDataError::LengthMismatch {
                first: maturities.len(),
                second: strikes.len(),
            });
        }
        if maturities.len() != vols.len() {
            return Err(MarketDataError::LengthMismatch {
                first: maturities.len(),
                second: vols.len(),
            });
        }
        if maturities.is_empty() {
            return Err(MarketDataError::InsufficientData { got: 0, need: 1 });
        }

        for ((&m, &k), &v) in maturities.iter().zip(strikes).zip(vols) {
            check_query(k, m)?;
            if !m.is_finite() {
                return Err(MarketDataError::InvalidExpiry {
                    expiry: m.to_f64().unwrap_or(0.0),
                });
            }
            if !k.is_finite() {
                return Err(MarketDataError::InvalidStrike {
                    strike: k.to_f64().unwrap_or(0.0),
                });
            }
            if !v.is_finite() || v < T::zero() {
                return Err(MarketDataError::InvalidVolatility {
                    sigma: v.to_f64().unwrap_or(0.0),
                });
            }
        }

        let order = sorted_order(maturities, strikes);
        for pair in order.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if maturities[a] == maturities[b] && strikes[a] == strikes[b] {
                return Err(MarketDataError::DuplicateNode {
                    maturity: maturities[a].to_f64().unwrap_or(0.0),
                    strike: strikes[a].to_f64().unwrap_or(0.0),
                });
            }
        }

        Ok(Self::from_nodes(
            maturities.to_vec(),
            strikes.to_vec(),
            vols.to_vec(),
            allow_extrapolation,
        ))
    }

    /// Assemble a surface from validated nodes and index them by slice.
    fn from_nodes(
        maturities: Vec<T>,
        strikes: Vec<T>,
        vols: Vec<T>,
        allow_extrapolation: bool,
    ) -> Self {
        let mut slices: Vec<ExpirySlice<T>> = Vec::new();
        for i in sorted_order(&maturities, &strikes) {
            match slices.last_mut() {
                Some(slice) if slice.maturity == maturities[i] => {
                    slice.strikes.push(strikes[i]);
                    slice.vols.push(vols[i]);
                }
                _ => slices.push(ExpirySlice {
                    maturity: maturities[i],
                    strikes: vec![strikes[i]],
                    vols: vec![vols[i]],
                }),
            }
        }
        let strike_domain = bounds(&strikes);
        let expiry_domain = bounds(&maturities);

        Self {
            maturities,
            strikes,
            vols,
            allow_extrapolation,
            slices,
            strike_domain,
            expiry_domain,
        }
    }

    /// Node maturities, index-aligned with [`strikes`](Self::strikes).
    #[inline]
    pub fn maturities(&self) -> &[T] {
        &self.maturities
    }

    /// Node strikes.
    #[inline]
    pub fn strikes(&self) -> &[T] {
        &self.strikes
    }

    /// Node volatilities.
    #[inline]
    pub fn vols(&self) -> &[T] {
        &self.vols
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.vols.len()
    }

    /// Returns true if the surface has no nodes.
    /// Never true for a surface built through [`new`](Self::new).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vols.is_empty()
    }

    /// Return whether extrapolation is allowed.
    #[inline]
    pub fn allow_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    /// Index of the node at exactly `(maturity, strike)`, if any.
    pub fn node_index(&self, maturity: T, strike: T) -> Option<usize> {
        self.maturities
            .iter()
            .zip(self.strikes.iter())
            .position(|(&m, &k)| m == maturity && k == strike)
    }

    /// Return a new surface with one coordinate moved by `amount`.
    ///
    /// An existing node at exactly `(maturity, strike)` has `amount` added to
    /// its volatility. Otherwise a node is appended there, valued according
    /// to `insertion`. The input surface is left untouched.
    ///
    /// # Errors
    ///
    /// `InvalidStrike`/`InvalidExpiry` for a non-positive coordinate, or the
    /// lookup error of the base value when inserting with
    /// [`NodeInsertion::BasePlusShift`].
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::surfaces::{InterpolatedVolSurface, NodeInsertion};
    ///
    /// let surface = InterpolatedVolSurface::new(&[1.0_f64, 1.0], &[90.0, 110.0], &[0.2, 0.3], false)
    ///     .unwrap();
    ///
    /// let bumped = surface.with_node_shift(1.0, 110.0, 0.01, NodeInsertion::BasePlusShift).unwrap();
    /// assert_eq!(bumped.len(), 2);
    ///
    /// let inserted = surface.with_node_shift(1.0, 100.0, 0.01, NodeInsertion::BasePlusShift).unwrap();
    /// assert_eq!(inserted.len(), 3);
    /// assert!((inserted.vols()[2] - 0.26).abs() < 1e-12);
    /// ```
    pub fn with_node_shift(
        &self,
        maturity: T,
        strike: T,
        amount: T,
        insertion: NodeInsertion,
    ) -> Result<Self, MarketDataError> {
        check_query(strike, maturity)?;
        if let Some(j) = self.node_index(maturity, strike) {
            let mut shifted = self.clone();
            shifted.vols[j] = self.vols[j] + amount;
            if let Some(vol) = shifted.slice_vol_mut(maturity, strike) {
                *vol = *vol + amount;
            }
            return Ok(shifted);
        }

        let value = match insertion {
            NodeInsertion::BasePlusShift => self.evaluate(strike, maturity)? + amount,
            NodeInsertion::ShiftOnly => amount,
        };
        let mut maturities = self.maturities.clone();
        let mut strikes = self.strikes.clone();
        let mut vols = self.vols.clone();
        maturities.push(maturity);
        strikes.push(strike);
        vols.push(value);
        Ok(Self::from_nodes(
            maturities,
            strikes,
            vols,
            self.allow_extrapolation,
        ))
    }

    /// Slice entry of the node at exactly `(maturity, strike)`.
    fn slice_vol_mut(&mut self, maturity: T, strike: T) -> Option<&mut T> {
        let i = self.slices.partition_point(|s| s.maturity < maturity);
        let slice = self.slices.get_mut(i).filter(|s| s.maturity == maturity)?;
        let k = slice.strikes.partition_point(|&x| x < strike);
        if slice.strikes.get(k) != Some(&strike) {
            return None;
        }
        slice.vols.get_mut(k)
    }

    /// Return a new surface with the shift applied to every node.
    pub fn with_shift(&self, shift: ShiftType<T>) -> Self {
        let mut shifted = self.clone();
        shifted.vols.iter_mut().for_each(|v| *v = shift.apply(*v));
        for slice in &mut shifted.slices {
            slice.vols.iter_mut().for_each(|v| *v = shift.apply(*v));
        }
        shifted
    }

    /// Slice-wise interpolation with flat extrapolation on both axes.
    fn evaluate(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        let upper = self.slices.partition_point(|s| s.maturity < expiry);
        let (lo, hi) = match (upper.checked_sub(1), self.slices.get(upper)) {
            (None, Some(first)) => return Ok(first.value(strike)),
            (Some(i), None) => return Ok(self.slices[i].value(strike)),
            (Some(i), Some(hi)) => (&self.slices[i], hi),
            (None, None) => return Err(MarketDataError::InsufficientData { got: 0, need: 1 }),
        };
        if hi.maturity == expiry {
            return Ok(hi.value(strike));
        }
        let (v0, v1) = (lo.value(strike), hi.value(strike));
        Ok(v0 + (expiry - lo.maturity) / (hi.maturity - lo.maturity) * (v1 - v0))
    }
}

/// Node indices ordered by (maturity, strike).
fn sorted_order<T: Float>(maturities: &[T], strikes: &[T]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..maturities.len()).collect();
    order.sort_by(|&a, &b| {
        (maturities[a], strikes[a])
            .partial_cmp(&(maturities[b], strikes[b]))
            .unwrap_or(Ordering::Equal)
    });
    order
}

fn bounds<T: Float>(values: &[T]) -> (T, T) {
    values
        .iter()
        .fold((T::infinity(), T::neg_infinity()), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

impl<T: Float> VolatilitySurface<T> for InterpolatedVolSurface<T> {
    /// # Errors
    ///
    /// * `MarketDataError::InvalidStrike` / `InvalidExpiry` - Non-positive query
    /// * `MarketDataError::OutOfBounds` - Outside the node domain with
    ///   extrapolation disabled
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        check_query(strike, expiry)?;
        if !self.allow_extrapolation {
            for (x, (min, max)) in [
                (strike, self.strike_domain()),
                (expiry, self.expiry_domain()),
            ] {
                if x < min || x > max {
                    return Err(MarketDataError::OutOfBounds {
                        x: x.to_f64().unwrap_or(0.0),
                        min: min.to_f64().unwrap_or(0.0),
                        max: max.to_f64().unwrap_or(0.0),
                    });
                }
            }
        }
        self.evaluate(strike, expiry)
    }

    #[inline]
    fn strike_domain(&self) -> (T, T) {
        self.strike_domain
    }

    #[inline]
    fn expiry_domain(&self) -> (T, T) {
        self.expiry_domain
    }
}
