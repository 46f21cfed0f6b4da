//! Black-76 pricer for index options and forwards.

use pricer_core::market_data::{MarketDataBundle, VolatilitySurface, YieldCurve};
use pricer_core::types::PricingError;

use super::DerivativePricer;
use crate::analytical::Black76;
use crate::instruments::Derivative;

/// Prices options and forwards off the market's forward curve.
///
/// - Option: `N · D(t_settle) · Black76(F(t_exp), K, σ(K, t_exp), t_exp)`
/// - Forward: `±N · D(t_settle) · (F(t_exp) - K)`
///
/// Variance swaps are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackForwardPricer;

impl BlackForwardPricer {
    /// Name used in error reports.
    pub const NAME: &'static str = "BlackForwardPricer";

    /// Creates the pricer.
    pub fn new() -> Self {
        Self
    }
}

impl DerivativePricer for BlackForwardPricer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn price(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
    ) -> Result<f64, PricingError> {
        match derivative {
            Derivative::EquityIndexOption(option) => {
                let params = option.params();
                let expiry = params.expiry();
                let forward = market.forward_curve().forward(expiry)?;
                let vol = market
                    .volatility_surface()
                    .volatility(option.strike(), expiry)?;
                let df = market
                    .discount_curve()
                    .discount_factor(params.settlement())?;

                let undiscounted =
                    Black76::new(forward, vol)?.price(option.payoff_type(), option.strike(), expiry);
                Ok(params.notional() * df * undiscounted)
            }
            Derivative::EquityForward(contract) => {
                let params = contract.params();
                let forward = market.forward_curve().forward(params.expiry())?;
                let df = market
                    .discount_curve()
                    .discount_factor(params.settlement())?;
                Ok(df * contract.payoff(forward))
            }
            Derivative::VarianceSwap(_) => Err(self.unsupported(derivative)),
        }
    }
}
