//! Spreading point sensitivities onto curve nodes.

use std::collections::BTreeMap;

use pricer_core::market_data::{CurveName, NamedCurve, NodalCurve};

use super::error::SensitivityError;
use super::results::{NodeSensitivity, SensitivityVector};

/// `(maturity, sensitivity)` pairs per curve.
pub type PointSensitivities = BTreeMap<CurveName, Vec<(f64, f64)>>;

/// Spreads sensitivities anchored at single maturities onto curve nodes.
pub trait CurveNodeDistributor: Send + Sync {
    /// Node-aligned vector spanning every curve in `curves`.
    ///
    /// A curve with no entry in `sensitivities` contributes zeros. An entry
    /// naming a curve that is not supplied is an error.
    fn distribute(
        &self,
        sensitivities: &PointSensitivities,
        curves: &BTreeMap<CurveName, &NamedCurve<f64>>,
    ) -> Result<SensitivityVector, SensitivityError>;
}

/// Chain-rule distributor driven by each curve's interpolation weights.
///
/// For curve `c` with nodes `i`, node value = Σ over `(t, s)` of
/// `s · ∂r(t)/∂rᵢ`. Curves are emitted in name order, nodes in the curve's
/// own order.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use pricer_core::market_data::{
///     CurveEnum, CurveInterpolation, CurveName, InterpolatedCurve, NamedCurve,
/// };
/// use pricer_risk::sensitivities::{CurveNodeDistributor, InterpolatorNodeDistributor};
///
/// let pillars = InterpolatedCurve::new(&[1.0_f64, 3.0], &[0.02, 0.03], CurveInterpolation::Linear, true)
///     .unwrap();
/// let curve = NamedCurve::new("USD-OIS", CurveEnum::from(pillars));
///
/// let mut sens = BTreeMap::new();
/// sens.insert(CurveName::new("USD-OIS"), vec![(2.0, 100.0)]);
/// let mut curves = BTreeMap::new();
/// curves.insert(CurveName::new("USD-OIS"), &curve);
///
/// let vector = InterpolatorNodeDistributor.distribute(&sens, &curves).unwrap();
/// let values = vector.values();
/// assert!((values[0] - 50.0).abs() < 1e-12);
/// assert!((values[1] - 50.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterpolatorNodeDistributor;

impl InterpolatorNodeDistributor {
    /// Creates the distributor.
    pub fn new() -> Self {
        Self
    }
}

impl CurveNodeDistributor for InterpolatorNodeDistributor {
    fn distribute(
        &self,
        sensitivities: &PointSensitivities,
        curves: &BTreeMap<CurveName, &NamedCurve<f64>>,
    ) -> Result<SensitivityVector, SensitivityError> {
        if let Some(unknown) = sensitivities.keys().find(|name| !curves.contains_key(*name)) {
            return Err(SensitivityError::InvalidArgument(format!(
                "no curve supplied for sensitivities on {}",
                unknown
            )));
        }

        let mut nodes = Vec::new();
        for (name, curve) in curves {
            let mut values = vec![0.0; curve.node_count()];
            for &(t, s) in sensitivities.get(name).map(Vec::as_slice).unwrap_or(&[]) {
                let weights = curve.zero_rate_node_sensitivities(t)?;
                for (value, w) in values.iter_mut().zip(weights) {
                    *value += s * w;
                }
            }
            nodes.extend(values.into_iter().enumerate().map(|(i, value)| NodeSensitivity {
                curve: name.clone(),
                tenor: curve.node_tenor(i),
                value,
            }));
        }
        Ok(SensitivityVector::new(nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::{CurveEnum, CurveInterpolation, InterpolatedCurve};
    use proptest::prelude::*;

    fn pillar_curve(name: &str, method: CurveInterpolation) -> NamedCurve<f64> {
        let pillars = InterpolatedCurve::new(
            &[0.5, 1.0, 2.0, 5.0, 10.0],
            &[0.030, 0.032, 0.035, 0.038, 0.040],
            method,
            true,
        )
        .unwrap();
        NamedCurve::new(name, CurveEnum::from(pillars))
    }

    // ========================================
    // Single curve
    // ========================================

    #[test]
    fn test_flat_curve_single_node() {
        let curve = NamedCurve::new("EUR-ESTR", CurveEnum::flat(0.02));
        let mut sens = PointSensitivities::new();
        sens.insert(curve.name().clone(), vec![(3.0, -42.0)]);
        let curves = BTreeMap::from([(curve.name().clone(), &curve)]);

        let vector = InterpolatorNodeDistributor.distribute(&sens, &curves).unwrap();
        assert_eq!(vector.len(), 1);
        assert_eq!(vector.nodes()[0].value, -42.0);
        assert_eq!(vector.nodes()[0].tenor, None);
    }

    #[test]
    fn test_linear_split_between_pillars() {
        let curve = pillar_curve("USD-SOFR", CurveInterpolation::Linear);
        let mut sens = PointSensitivities::new();
        sens.insert(curve.name().clone(), vec![(3.5, 10.0)]);
        let curves = BTreeMap::from([(curve.name().clone(), &curve)]);

        let vector = InterpolatorNodeDistributor.distribute(&sens, &curves).unwrap();
        let values = vector.values();
        assert_eq!(values.len(), 5);
        assert_relative_eq!(values[2], 5.0, epsilon = 1e-12);
        assert_relative_eq!(values[3], 5.0, epsilon = 1e-12);
        assert_eq!(values[0], 0.0);
        assert_eq!(vector.nodes()[3].tenor, Some(5.0));
    }

    #[test]
    fn test_pairs_accumulate() {
        let curve = pillar_curve("USD-SOFR", CurveInterpolation::Linear);
        let mut sens = PointSensitivities::new();
        sens.insert(curve.name().clone(), vec![(1.0, 1.0), (1.0, 2.0), (10.0, 4.0)]);
        let curves = BTreeMap::from([(curve.name().clone(), &curve)]);

        let values = InterpolatorNodeDistributor
            .distribute(&sens, &curves)
            .unwrap()
            .values();
        assert_relative_eq!(values[1], 3.0, epsilon = 1e-12);
        assert_relative_eq!(values[4], 4.0, epsilon = 1e-12);
    }

    // ========================================
    // Several curves
    // ========================================

    #[test]
    fn test_curves_in_name_order_with_zeros() {
        let usd = pillar_curve("USD-SOFR", CurveInterpolation::Linear);
        let eur = NamedCurve::new("EUR-ESTR", CurveEnum::flat(0.02));
        let mut sens = PointSensitivities::new();
        sens.insert(usd.name().clone(), vec![(2.0, 7.0)]);
        let curves = BTreeMap::from([
            (usd.name().clone(), &usd),
            (eur.name().clone(), &eur),
        ]);

        let vector = InterpolatorNodeDistributor.distribute(&sens, &curves).unwrap();
        assert_eq!(vector.len(), 6);
        assert_eq!(vector.nodes()[0].curve.as_str(), "EUR-ESTR");
        assert_eq!(vector.nodes()[0].value, 0.0);
        assert_relative_eq!(vector.total(), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_curve_rejected() {
        let curve = NamedCurve::new("EUR-ESTR", CurveEnum::flat(0.02));
        let mut sens = PointSensitivities::new();
        sens.insert(CurveName::new("GBP-SONIA"), vec![(1.0, 1.0)]);
        let curves = BTreeMap::from([(curve.name().clone(), &curve)]);

        let err = InterpolatorNodeDistributor
            .distribute(&sens, &curves)
            .unwrap_err();
        assert!(format!("{}", err).contains("GBP-SONIA"));
    }

    #[test]
    fn test_negative_maturity_is_market_data_error() {
        let curve = pillar_curve("USD-SOFR", CurveInterpolation::Linear);
        let mut sens = PointSensitivities::new();
        sens.insert(curve.name().clone(), vec![(-1.0, 1.0)]);
        let curves = BTreeMap::from([(curve.name().clone(), &curve)]);

        let err = InterpolatorNodeDistributor
            .distribute(&sens, &curves)
            .unwrap_err();
        assert!(matches!(err, SensitivityError::MarketData(_)));
    }

    proptest! {
        #[test]
        fn prop_linear_spread_preserves_total(t in 0.1..15.0_f64, s in -1e6..1e6_f64) {
            let curve = pillar_curve("USD-SOFR", CurveInterpolation::Linear);
            let mut sens = PointSensitivities::new();
            sens.insert(curve.name().clone(), vec![(t, s)]);
            let curves = BTreeMap::from([(curve.name().clone(), &curve)]);

            let vector = InterpolatorNodeDistributor.distribute(&sens, &curves).unwrap();
            prop_assert!((vector.total() - s).abs() <= 1e-9 * s.abs().max(1.0));
        }
    }
}
