//! Bump-and-reprice sensitivity engine.
//!
//! Every measure is built from repricings of freshly shifted market
//! bundles. The base bundle is never modified, so one engine can serve many
//! threads as long as its collaborators are reentrant.
//!
//! | Measure | Pricer calls |
//! |---------|--------------|
//! | forward delta | 2 |
//! | discount-rate sensitivity, PV01 | 3 |
//! | bucketed delta | 3 |
//! | parallel vega, single-point vega | 2 |
//! | vega surface | 2 per node |

use std::collections::BTreeMap;

use pricer_core::market_data::{InterpolatedVolSurface, MarketDataBundle};
use pricer_core::traits::risk::ShiftType;
use pricer_models::instruments::Derivative;
use pricer_models::pricing::DerivativePricer;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::config::SensitivityConfig;
use super::distributor::{CurveNodeDistributor, InterpolatorNodeDistributor, PointSensitivities};
use super::error::SensitivityError;
use super::results::{NodalSurface, SensitivityReport, SensitivityVector};
use super::shifter::{NodalSurfaceShifter, SurfaceShifter};

/// Basis points per unit of rate.
pub const BASIS_POINTS: f64 = 10_000.0;

const VEGA_SURFACE: &str = "vega surface (requires InterpolatedVolSurface)";
const SINGLE_POINT_VEGA: &str = "single-point vega (requires InterpolatedVolSurface)";

/// Turns a pricer into named risk measures by finite differences.
///
/// The pricer, distributor and shifter are injected. Shift defaults come
/// from [`SensitivityConfig`]; each measure also has a `*_with_shift`
/// form taking an explicit shift.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::{CurveEnum, ForwardCurve, MarketDataBundle, NamedCurve, SurfaceEnum};
/// use pricer_models::analytical::Black76;
/// use pricer_models::instruments::{Derivative, EquityIndexOption, InstrumentParams, PayoffType};
/// use pricer_models::pricing::BlackForwardPricer;
/// use pricer_risk::sensitivities::SensitivityEngine;
///
/// let market = MarketDataBundle::new(
///     SurfaceEnum::flat(0.2),
///     NamedCurve::new("USD-OIS", CurveEnum::flat(0.03)),
///     ForwardCurve::flat("SPX", 100.0),
/// );
/// let params = InstrumentParams::at_expiry(1.0, 1.0).unwrap();
/// let call: Derivative<f64> = EquityIndexOption::new(100.0, params, PayoffType::Call)
///     .unwrap()
///     .into();
///
/// let engine = SensitivityEngine::new(BlackForwardPricer::new());
/// let delta = engine.compute_forward_sensitivity(&call, &market).unwrap();
/// let vega = engine.compute_parallel_vega(&call, &market).unwrap();
///
/// // Discounted Black-76 ATM delta and vega
/// let df = (-0.03_f64).exp();
/// let black = Black76::new(100.0_f64, 0.2).unwrap();
/// let analytic_delta = df * black.delta(PayoffType::Call, 100.0, 1.0);
/// let analytic_vega = df * black.vega(100.0, 1.0);
/// assert!((delta - analytic_delta).abs() < 1e-3 * analytic_delta);
/// assert!((vega - analytic_vega).abs() < 1e-4 * analytic_vega);
/// ```
#[derive(Debug, Clone)]
pub struct SensitivityEngine<P, D = InterpolatorNodeDistributor, S = NodalSurfaceShifter> {
    pricer: P,
    distributor: D,
    shifter: S,
    config: SensitivityConfig,
}

impl<P: DerivativePricer> SensitivityEngine<P> {
    /// Engine with the default distributor, shifter and configuration.
    pub fn new(pricer: P) -> Self {
        let config = SensitivityConfig::default();
        Self {
            pricer,
            distributor: InterpolatorNodeDistributor,
            shifter: NodalSurfaceShifter::new(config.node_insertion),
            config,
        }
    }

    /// Engine with the default collaborators and the given configuration.
    ///
    /// The shifter follows `config.node_insertion`.
    pub fn with_config(pricer: P, config: SensitivityConfig) -> Result<Self, SensitivityError> {
        Self::from_parts(
            pricer,
            InterpolatorNodeDistributor,
            NodalSurfaceShifter::new(config.node_insertion),
            config,
        )
    }
}

impl<P, D, S> SensitivityEngine<P, D, S>
where
    P: DerivativePricer,
    D: CurveNodeDistributor,
    S: SurfaceShifter,
{
    /// Engine from explicit collaborators.
    pub fn from_parts(
        pricer: P,
        distributor: D,
        shifter: S,
        config: SensitivityConfig,
    ) -> Result<Self, SensitivityError> {
        config.validate()?;
        Ok(Self {
            pricer,
            distributor,
            shifter,
            config,
        })
    }

    /// The injected pricer.
    pub fn pricer(&self) -> &P {
        &self.pricer
    }

    /// The injected node distributor.
    pub fn distributor(&self) -> &D {
        &self.distributor
    }

    /// The injected surface shifter.
    pub fn shifter(&self) -> &S {
        &self.shifter
    }

    /// Default shifts and options.
    pub fn config(&self) -> &SensitivityConfig {
        &self.config
    }

    fn price(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
    ) -> Result<f64, SensitivityError> {
        Ok(self.pricer.price(derivative, market)?)
    }

    // ========================================
    // Forward and rates
    // ========================================

    /// Forward delta with the configured relative shift.
    pub fn compute_forward_sensitivity(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
    ) -> Result<f64, SensitivityError> {
        self.compute_forward_sensitivity_with_shift(
            derivative,
            market,
            self.config.forward_relative_shift,
        )
    }

    /// Forward delta: `(pv_up - pv_down) / (2 · shift · F(t_settle))`.
    ///
    /// The forward curve is scaled by `1 ± relative_shift`; the result is
    /// currency per unit of forward. A zero forward yields a non-finite
    /// value rather than an error.
    pub fn compute_forward_sensitivity_with_shift(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
        relative_shift: f64,
    ) -> Result<f64, SensitivityError> {
        check_shift("relative forward shift", relative_shift)?;
        let t = settlement(derivative)?;

        let up = market.with_forward_fractional_shift(relative_shift);
        let down = market.with_forward_fractional_shift(-relative_shift);
        let pv_up = self.price(derivative, &up)?;
        let pv_down = self.price(derivative, &down)?;

        let forward = market.forward_curve().forward(t)?;
        if forward == 0.0 {
            warn!(
                instrument = derivative.kind(),
                curve = %market.forward_curve().name(),
                t,
                "forward is zero at settlement, forward delta is not finite"
            );
        }

        let delta = (pv_up - pv_down) / (2.0 * relative_shift * forward);
        debug!(
            pricer = self.pricer.name(),
            instrument = derivative.kind(),
            pv_up,
            pv_down,
            shift = relative_shift,
            forward,
            delta,
            "forward scenario"
        );
        Ok(delta)
    }

    /// Discount-rate sensitivity with the configured rate shift.
    pub fn compute_discount_rate_sensitivity(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
    ) -> Result<f64, SensitivityError> {
        self.compute_discount_rate_sensitivity_with_shift(derivative, market, self.config.rate_shift)
    }

    /// Funding-rate sensitivity: `t · (F · forward_delta - pv)`.
    ///
    /// With `PV = D(t) · g(F)` and both `D` and `F` driven by the funding
    /// rate, `-t · pv` is the exact discounting term and `t · F · Δ` the
    /// forward projection term. Only `Δ` is a finite difference.
    pub fn compute_discount_rate_sensitivity_with_shift(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
        shift: f64,
    ) -> Result<f64, SensitivityError> {
        let t = settlement(derivative)?;
        let pv = self.price(derivative, market)?;
        let forward_delta =
            self.compute_forward_sensitivity_with_shift(derivative, market, shift)?;
        let forward = market.forward_curve().forward(t)?;

        Ok(t * (forward * forward_delta - pv))
    }

    /// Discount-rate sensitivity per basis point.
    pub fn compute_pv01(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
    ) -> Result<f64, SensitivityError> {
        Ok(self.compute_discount_rate_sensitivity(derivative, market)? / BASIS_POINTS)
    }

    /// Discount-rate sensitivity spread over the discount curve nodes.
    ///
    /// The whole sensitivity is anchored at the settlement time on the
    /// discount curve; the distributor decides how it maps to nodes.
    pub fn compute_bucketed_delta(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
    ) -> Result<SensitivityVector, SensitivityError> {
        let sensitivity = self.compute_discount_rate_sensitivity(derivative, market)?;
        self.bucket(derivative, market, sensitivity)
    }

    fn bucket(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
        sensitivity: f64,
    ) -> Result<SensitivityVector, SensitivityError> {
        let discount = market.discount_curve();
        let t = settlement(derivative)?;

        let mut points = PointSensitivities::new();
        points.insert(discount.name().clone(), vec![(t, sensitivity)]);
        let curves = BTreeMap::from([(discount.name().clone(), discount)]);

        self.distributor.distribute(&points, &curves)
    }

    // ========================================
    // Volatility
    // ========================================

    /// Parallel vega with the configured shift.
    pub fn compute_parallel_vega(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
    ) -> Result<f64, SensitivityError> {
        self.compute_parallel_vega_with_shift(derivative, market, self.config.vega_shift)
    }

    /// Parallel vega: every surface point shifted by `±shift`.
    pub fn compute_parallel_vega_with_shift(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
        shift: f64,
    ) -> Result<f64, SensitivityError> {
        check_shift("vega shift", shift)?;
        let bump = ShiftType::parallel(shift);

        let up = market.with_volatility_parallel_shift(bump);
        let down = market.with_volatility_parallel_shift(bump.negated());
        let pv_up = self.price(derivative, &up)?;
        let pv_down = self.price(derivative, &down)?;

        let vega = (pv_up - pv_down) / (2.0 * shift);
        debug!(
            pricer = self.pricer.name(),
            instrument = derivative.kind(),
            pv_up,
            pv_down,
            shift,
            vega,
            "parallel volatility scenario"
        );
        Ok(vega)
    }

    /// Vega surface with the configured shift.
    pub fn compute_vega_surface(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
    ) -> Result<NodalSurface, SensitivityError> {
        self.compute_vega_surface_with_shift(derivative, market, self.config.vega_shift)
    }

    /// Single-point vega at every node of a node-discrete surface.
    ///
    /// The result carries the surface's own node arrays. Costs two pricer
    /// calls per node; nodes run on the rayon pool when
    /// `parallel_nodes` is set.
    pub fn compute_vega_surface_with_shift(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
        shift: f64,
    ) -> Result<NodalSurface, SensitivityError> {
        check_shift("vega shift", shift)?;
        let nodal = nodal_surface(market, VEGA_SURFACE)?;
        let maturities = nodal.maturities().to_vec();
        let strikes = nodal.strikes().to_vec();

        let node_vega = |(&maturity, &strike): (&f64, &f64)| {
            self.compute_single_point_vega(derivative, market, maturity, strike, shift)
        };
        let values = if self.config.parallel_nodes {
            maturities
                .par_iter()
                .zip(strikes.par_iter())
                .map(node_vega)
                .collect::<Result<Vec<_>, _>>()?
        } else {
            maturities
                .iter()
                .zip(strikes.iter())
                .map(node_vega)
                .collect::<Result<Vec<_>, _>>()?
        };

        NodalSurface::new(maturities, strikes, values)
    }

    /// Vega to one surface coordinate: `(pv_up - pv_down) / (2 · shift)`.
    ///
    /// The coordinate need not be a node; the shifter inserts it.
    pub fn compute_single_point_vega(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
        maturity: f64,
        strike: f64,
        shift: f64,
    ) -> Result<f64, SensitivityError> {
        check_shift("vega shift", shift)?;
        nodal_surface(market, SINGLE_POINT_VEGA)?;
        let surface = market.volatility_surface();

        let up = market.with_volatility_surface(self.shifter.apply(surface, maturity, strike, shift)?);
        let down =
            market.with_volatility_surface(self.shifter.apply(surface, maturity, strike, -shift)?);
        let pv_up = self.price(derivative, &up)?;
        let pv_down = self.price(derivative, &down)?;

        let vega = (pv_up - pv_down) / (2.0 * shift);
        debug!(
            pricer = self.pricer.name(),
            instrument = derivative.kind(),
            maturity,
            strike,
            pv_up,
            pv_down,
            shift,
            vega,
            "single-point volatility scenario"
        );
        Ok(vega)
    }

    // ========================================
    // Report
    // ========================================

    /// Every measure with the configured shifts.
    ///
    /// A surface without nodes leaves `vega_surface` empty rather than
    /// failing the report.
    pub fn compute_report(
        &self,
        derivative: &Derivative<f64>,
        market: &MarketDataBundle<f64>,
    ) -> Result<SensitivityReport, SensitivityError> {
        let present_value = self.price(derivative, market)?;
        let forward_delta = self.compute_forward_sensitivity(derivative, market)?;
        let discount_rate_sensitivity = self.compute_discount_rate_sensitivity(derivative, market)?;
        let pv01 = discount_rate_sensitivity / BASIS_POINTS;
        let bucketed_delta = self.bucket(derivative, market, discount_rate_sensitivity)?;
        let parallel_vega = self.compute_parallel_vega(derivative, market)?;
        let vega_surface = match market.volatility_surface().as_nodal() {
            Some(_) => Some(self.compute_vega_surface(derivative, market)?),
            None => None,
        };

        info!(
            pricer = self.pricer.name(),
            instrument = derivative.kind(),
            present_value,
            forward_delta,
            pv01,
            parallel_vega,
            buckets = bucketed_delta.len(),
            vega_nodes = vega_surface.as_ref().map_or(0, NodalSurface::len),
            "sensitivity report"
        );

        Ok(SensitivityReport {
            present_value,
            forward_delta,
            discount_rate_sensitivity,
            pv01,
            bucketed_delta,
            parallel_vega,
            vega_surface,
        })
    }
}

fn settlement(derivative: &Derivative<f64>) -> Result<f64, SensitivityError> {
    let t = derivative.time_to_settlement();
    if t.is_finite() && t >= 0.0 {
        Ok(t)
    } else {
        Err(SensitivityError::InvalidArgument(format!(
            "time to settlement must be non-negative, got {}",
            t
        )))
    }
}

fn check_shift(name: &str, shift: f64) -> Result<(), SensitivityError> {
    if shift.is_finite() && shift > 0.0 {
        Ok(())
    } else {
        Err(SensitivityError::InvalidArgument(format!(
            "{} must be positive and finite, got {}",
            name, shift
        )))
    }
}

fn nodal_surface<'a>(
    market: &'a MarketDataBundle<f64>,
    operation: &str,
) -> Result<&'a InterpolatedVolSurface<f64>, SensitivityError> {
    let surface = market.volatility_surface();
    surface
        .as_nodal()
        .ok_or_else(|| SensitivityError::unsupported(surface.kind(), operation))
}
