//! Forward contract definitions.
//!
//! This module provides the equity forward, a linear payoff instrument.

use num_traits::Float;

use super::error::InstrumentError;
use super::params::{check_strike, InstrumentParams};

/// Trade direction for forward contracts.
///
/// # Variants
/// - `Long`: Buyer of the underlying (profits when price rises)
/// - `Short`: Seller of the underlying (profits when price falls)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Long position (buy underlying)
    Long,
    /// Short position (sell underlying)
    Short,
}

impl Direction {
    /// Returns whether this is a long position.
    #[inline]
    pub fn is_long(&self) -> bool {
        matches!(self, Direction::Long)
    }

    /// Returns whether this is a short position.
    #[inline]
    pub fn is_short(&self) -> bool {
        matches!(self, Direction::Short)
    }

    /// +1 for long, -1 for short.
    #[inline]
    pub fn sign<T: Float>(&self) -> T {
        match self {
            Direction::Long => T::one(),
            Direction::Short => -T::one(),
        }
    }
}

/// Forward contract on an equity index.
///
/// Payoff at expiry, paid at settlement:
/// - Long: notional * (spot - strike)
/// - Short: notional * (strike - spot)
///
/// # Examples
/// ```
/// use pricer_models::instruments::{Direction, EquityForward, InstrumentParams};
///
/// let params = InstrumentParams::at_expiry(1.0_f64, 1_000_000.0).unwrap();
/// let forward = EquityForward::new(100.0, params, Direction::Long).unwrap();
///
/// // Profit when spot > strike
/// let payoff = forward.payoff(110.0);
/// assert!((payoff - 10_000_000.0).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquityForward<T: Float> {
    strike: T,
    params: InstrumentParams<T>,
    direction: Direction,
}

impl<T: Float> EquityForward<T> {
    /// Creates a new forward contract.
    ///
    /// # Arguments
    /// * `strike` - Delivery price (must be positive)
    /// * `params` - Expiry, settlement and notional
    /// * `direction` - Long or Short
    pub fn new(
        strike: T,
        params: InstrumentParams<T>,
        direction: Direction,
    ) -> Result<Self, InstrumentError> {
        Ok(Self {
            strike: check_strike(strike)?,
            params,
            direction,
        })
    }

    /// Returns the delivery price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Timing and notional.
    #[inline]
    pub fn params(&self) -> &InstrumentParams<T> {
        &self.params
    }

    /// Returns the trade direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Linear payoff at an index level.
    #[inline]
    pub fn payoff(&self, spot: T) -> T {
        self.direction.sign::<T>() * self.params.notional() * (spot - self.strike)
    }
}
