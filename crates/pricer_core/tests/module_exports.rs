//! Integration tests for module exports.
//!
//! Verify that the public market data API is reachable via absolute paths
//! and that the pieces compose into a bumpable market.

/// Curves are accessible and share the node view.
#[test]
fn test_curve_exports() {
    use pricer_core::market_data::curves::{
        CurveEnum, CurveInterpolation, InterpolatedCurve, NamedCurve, NodalCurve, YieldCurve,
    };

    let pillars = InterpolatedCurve::new(
        &[1.0_f64, 5.0, 10.0],
        &[0.02, 0.03, 0.035],
        CurveInterpolation::LogLinear,
        true,
    )
    .unwrap();
    let curve = NamedCurve::new("USD-SOFR", CurveEnum::from(pillars));

    assert_eq!(curve.node_count(), 3);
    let sens = curve.zero_rate_node_sensitivities(7.0).unwrap();
    assert_eq!(sens.len(), 3);
    assert_eq!(sens[0], 0.0);
    assert!(curve.discount_factor(7.0).unwrap() < 1.0);
}

/// Surfaces are accessible through the top-level re-exports.
#[test]
fn test_surface_exports() {
    use pricer_core::market_data::{InterpolatedVolSurface, NodeInsertion, SurfaceEnum, VolatilitySurface};

    let surface: SurfaceEnum<f64> =
        InterpolatedVolSurface::new(&[0.5, 1.0], &[100.0, 100.0], &[0.18, 0.2], false)
            .unwrap()
            .into();
    let nodal = surface.as_nodal().unwrap();
    let bumped = nodal
        .with_node_shift(0.75, 100.0, 0.01, NodeInsertion::ShiftOnly)
        .unwrap();
    assert_eq!(bumped.len(), 3);
    assert!((surface.volatility(100.0, 0.75).unwrap() - 0.19).abs() < 1e-12);
}

/// A bundle built from exported types shifts without touching the base.
#[test]
fn test_bundle_round_trip() {
    use pricer_core::market_data::{CurveEnum, ForwardCurve, MarketDataBundle, NamedCurve, SurfaceEnum};
    use pricer_core::traits::risk::ShiftType;

    let market = MarketDataBundle::new(
        SurfaceEnum::flat(0.2_f64),
        NamedCurve::new("JPY-TONAR", CurveEnum::flat(0.001)),
        ForwardCurve::new("NKY", 38000.0, CurveEnum::flat(0.001)),
    );
    let up = market
        .with_forward_fractional_shift(0.02)
        .with_volatility_parallel_shift(ShiftType::absolute(0.01));

    let base_fwd = market.forward_curve().forward(1.0).unwrap();
    let up_fwd = up.forward_curve().forward(1.0).unwrap();
    assert!((up_fwd / base_fwd - 1.02).abs() < 1e-14);
}

/// Errors convert into the pricing error.
#[test]
fn test_error_exports() {
    use pricer_core::market_data::MarketDataError;
    use pricer_core::types::{InterpolationError, PricingError};

    let err: MarketDataError = InterpolationError::InsufficientData { got: 0, need: 2 }.into();
    let err: PricingError = err.into();
    assert!(format!("{}", err).contains("Insufficient data points"));
}
