//! Pricers mapping a derivative and a market to a present value.
//!
//! A pricer is a plain value implementing [`DerivativePricer`]. It matches on
//! the [`Derivative`] variant and either prices it or returns
//! [`PricingError::UnsupportedOperation`] naming itself and the variant. An
//! unsupported variant is never priced as zero.
//!
//! # Examples
//!
//! ```
//! use pricer_core::market_data::{CurveEnum, ForwardCurve, MarketDataBundle, NamedCurve, SurfaceEnum};
//! use pricer_core::types::PricingError;
//! use pricer_models::instruments::{Derivative, InstrumentParams, VarianceSwap};
//! use pricer_models::pricing::{BlackForwardPricer, DerivativePricer};
//!
//! let market = MarketDataBundle::new(
//!     SurfaceEnum::flat(0.2_f64),
//!     NamedCurve::new("USD-OIS", CurveEnum::flat(0.03)),
//!     ForwardCurve::flat("SPX", 5000.0),
//! );
//! let params = InstrumentParams::at_expiry(1.0, 1.0).unwrap();
//! let swap: Derivative<f64> = VarianceSwap::new(0.04, params).unwrap().into();
//!
//! let err = BlackForwardPricer::new().price(&swap, &market).unwrap_err();
//! assert_eq!(
//!     err,
//!     PricingError::UnsupportedOperation {
//!         pricer: "BlackForwardPricer",
//!         instrument: "VarianceSwap",
//!     }
//! );
//! ```

mod black_forward;
mod variance_swap;

pub use black_forward::BlackForwardPricer;
pub use variance_swap::VarianceSwapPricer;

use pricer_core::market_data::MarketDataBundle;
use pricer_core::types::PricingError;

use crate::instruments::Derivative;

/// Prices a derivative against a market bundle.
///
/// Implementations must be pure: the same inputs give the same value, and
/// neither argument is mutated. `Send + Sync` lets callers reprice scenarios
/// on several threads.
pub trait DerivativePricer: Send + Sync {
    /// Name reported in `UnsupportedOperation` errors.
    fn name(&self) -> &'static str;

    /// Present value of `derivative` under `market`.
    fn price(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
    ) -> Result<f64, PricingError>;

    /// The error for a variant this pricer does not handle.
    fn unsupported(&self, derivative: &Derivative<f64>) -> PricingError {
        PricingError::UnsupportedOperation {
            pricer: self.name(),
            instrument: derivative.kind(),
        }
    }
}

impl<P: DerivativePricer + ?Sized> DerivativePricer for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn price(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
    ) -> Result<f64, PricingError> {
        (**self).price(derivative, market)
    }
}

impl<P: DerivativePricer + ?Sized> DerivativePricer for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn price(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
    ) -> Result<f64, PricingError> {
        (**self).price(derivative, market)
    }
}
