//! Financial instrument definitions.
//!
//! Instruments are plain immutable values wrapped in the [`Derivative`]
//! sum type. Pricers match on the variant, so adding an instrument means
//! adding a variant and teaching each pricer to price or reject it.
//!
//! # Instrument Types
//!
//! - [`EquityIndexOption`]: European call/put on an index forward
//! - [`EquityForward`]: Linear forward contract
//! - [`VarianceSwap`]: Variance swap
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{
//!     Derivative, EquityIndexOption, InstrumentParams, PayoffType,
//! };
//!
//! let params = InstrumentParams::new(1.0_f64, 1.01, 1.0).unwrap();
//! let call = EquityIndexOption::new(100.0, params, PayoffType::Call).unwrap();
//! let derivative = Derivative::from(call);
//!
//! assert_eq!(derivative.time_to_settlement(), 1.01);
//! assert_eq!(derivative.kind(), "EquityIndexOption");
//! ```

mod error;
mod forward;
mod option;
mod params;
mod payoff;
mod variance;

pub use error::InstrumentError;
pub use forward::{Direction, EquityForward};
pub use option::EquityIndexOption;
pub use params::InstrumentParams;
pub use payoff::PayoffType;
pub use variance::VarianceSwap;

use num_traits::Float;

/// Unified instrument enum for static dispatch.
///
/// # Variants
/// - `EquityIndexOption`: European option
/// - `EquityForward`: Forward contract
/// - `VarianceSwap`: Variance swap
#[derive(Debug, Clone, PartialEq)]
pub enum Derivative<T: Float> {
    /// European option on an index
    EquityIndexOption(EquityIndexOption<T>),
    /// Forward contract on an index
    EquityForward(EquityForward<T>),
    /// Variance swap on an index
    VarianceSwap(VarianceSwap<T>),
}

impl<T: Float> Derivative<T> {
    #[inline]
    fn params(&self) -> &InstrumentParams<T> {
        match self {
            Derivative::EquityIndexOption(option) => option.params(),
            Derivative::EquityForward(forward) => forward.params(),
            Derivative::VarianceSwap(swap) => swap.params(),
        }
    }

    /// Time until the payoff is paid, in years.
    ///
    /// This is the maturity at which risk is anchored.
    #[inline]
    pub fn time_to_settlement(&self) -> T {
        self.params().settlement()
    }

    /// Time until the payoff is fixed, in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.params().expiry()
    }

    /// Notional of the contract.
    #[inline]
    pub fn notional(&self) -> T {
        self.params().notional()
    }

    /// Name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Derivative::EquityIndexOption(_) => "EquityIndexOption",
            Derivative::EquityForward(_) => "EquityForward",
            Derivative::VarianceSwap(_) => "VarianceSwap",
        }
    }
}

impl<T: Float> From<EquityIndexOption<T>> for Derivative<T> {
    fn from(option: EquityIndexOption<T>) -> Self {
        Derivative::EquityIndexOption(option)
    }
}

impl<T: Float> From<EquityForward<T>> for Derivative<T> {
    fn from(forward: EquityForward<T>) -> Self {
        Derivative::EquityForward(forward)
    }
}

impl<T: Float> From<VarianceSwap<T>> for Derivative<T> {
    fn from(swap: VarianceSwap<T>) -> Self {
        Derivative::VarianceSwap(swap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> InstrumentParams<f64> {
        InstrumentParams::new(0.5, 0.52, 3.0).unwrap()
    }

    // ========================================
    // Variant dispatch
    // ========================================

    #[test]
    fn test_timing_dispatch() {
        let variants: Vec<Derivative<f64>> = vec![
            EquityIndexOption::new(100.0, params(), PayoffType::Put)
                .unwrap()
                .into(),
            EquityForward::new(100.0, params(), Direction::Long)
                .unwrap()
                .into(),
            VarianceSwap::new(0.04, params()).unwrap().into(),
        ];

        for derivative in &variants {
            assert_eq!(derivative.expiry(), 0.5);
            assert_eq!(derivative.time_to_settlement(), 0.52);
            assert_eq!(derivative.notional(), 3.0);
        }
    }

    #[test]
    fn test_kind_names() {
        let swap: Derivative<f64> = VarianceSwap::new(0.04, params()).unwrap().into();
        let fwd: Derivative<f64> = EquityForward::new(1.0, params(), Direction::Short)
            .unwrap()
            .into();
        assert_eq!(swap.kind(), "VarianceSwap");
        assert_eq!(fwd.kind(), "EquityForward");
    }
}
