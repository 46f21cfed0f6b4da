//! Flat-smile variance swap pricer.

use pricer_core::market_data::{MarketDataBundle, VolatilitySurface, YieldCurve};
use pricer_core::types::PricingError;

use super::DerivativePricer;
use crate::instruments::Derivative;

/// Prices a variance swap from the at-the-forward implied volatility.
///
/// Fair variance is `σ(F(T), T)²`, so
/// `PV = N_var · D(t_settle) · (σ² - K_var)`. Options and forwards are
/// rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VarianceSwapPricer;

impl VarianceSwapPricer {
    /// Name used in error reports.
    pub const NAME: &'static str = "VarianceSwapPricer";

    /// Creates the pricer.
    pub fn new() -> Self {
        Self
    }
}

impl DerivativePricer for VarianceSwapPricer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn price(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
    ) -> Result<f64, PricingError> {
        let Derivative::VarianceSwap(swap) = derivative else {
            return Err(self.unsupported(derivative));
        };

        let params = swap.params();
        let expiry = params.expiry();
        let forward = market.forward_curve().forward(expiry)?;
        let vol = market.volatility_surface().volatility(forward, expiry)?;
        let df = market
            .discount_curve()
            .discount_factor(params.settlement())?;

        Ok(df * swap.payoff(vol * vol))
    }
}
