//! Criterion benchmarks for the sensitivity engine.
//!
//! Benchmarks cover:
//! - Vega surface, sequential against rayon node evaluation
//! - Full sensitivity report on a nodal market
//! - Bucketed delta on a pillar curve

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::market_data::{
    CurveEnum, CurveInterpolation, ForwardCurve, InterpolatedCurve, InterpolatedVolSurface,
    MarketDataBundle, NamedCurve,
};
use pricer_models::instruments::{Derivative, EquityIndexOption, InstrumentParams, PayoffType};
use pricer_models::pricing::BlackForwardPricer;
use pricer_risk::sensitivities::{SensitivityConfig, SensitivityEngine};

/// Market with an `n_mat × n_strike` volatility grid.
fn grid_market(n_mat: usize, n_strike: usize) -> MarketDataBundle<f64> {
    let mut maturities = Vec::with_capacity(n_mat * n_strike);
    let mut strikes = Vec::with_capacity(n_mat * n_strike);
    let mut vols = Vec::with_capacity(n_mat * n_strike);
    for i in 0..n_mat {
        for j in 0..n_strike {
            let moneyness = j as f64 / (n_strike.max(2) - 1) as f64 - 0.5;
            maturities.push(0.25 * (i + 1) as f64);
            strikes.push(3_500.0 + 2_000.0 * (moneyness + 0.5));
            vols.push(0.20 - 0.08 * moneyness + 0.005 * i as f64);
        }
    }
    let surface = InterpolatedVolSurface::new(&maturities, &strikes, &vols, true)
        .expect("benchmark grid is valid");
    let discount = InterpolatedCurve::new(
        &[0.25, 0.5, 1.0, 2.0, 3.0, 5.0],
        &[0.045, 0.044, 0.042, 0.040, 0.039, 0.038],
        CurveInterpolation::Linear,
        true,
    )
    .expect("benchmark curve is valid");

    MarketDataBundle::new(
        surface,
        NamedCurve::new("USD-SOFR", CurveEnum::from(discount)),
        ForwardCurve::new("SPX", 4_500.0, CurveEnum::flat(0.012)),
    )
}

fn put() -> Derivative<f64> {
    let params = InstrumentParams::new(1.1, 1.11, 50.0).expect("valid params");
    EquityIndexOption::new(4_400.0, params, PayoffType::Put)
        .expect("valid option")
        .into()
}

/// Benchmark vega surface evaluation with and without rayon.
fn bench_vega_surface(c: &mut Criterion) {
    let mut group = c.benchmark_group("vega_surface");
    let derivative = put();

    for (n_mat, n_strike) in [(4, 5), (8, 11), (16, 21)] {
        let market = grid_market(n_mat, n_strike);
        let label = format!("{}x{}", n_mat, n_strike);

        for parallel in [false, true] {
            let config = SensitivityConfig::default().with_parallel_nodes(parallel);
            let engine = SensitivityEngine::with_config(BlackForwardPricer::new(), config)
                .expect("default shifts are valid");
            let id = if parallel { "parallel" } else { "sequential" };

            group.bench_with_input(BenchmarkId::new(id, &label), &market, |b, market| {
                b.iter(|| {
                    engine
                        .compute_vega_surface(black_box(&derivative), black_box(market))
                        .expect("vega surface")
                });
            });
        }
    }

    group.finish();
}

/// Benchmark the full report on a mid-sized grid.
fn bench_report(c: &mut Criterion) {
    let market = grid_market(8, 11);
    let derivative = put();
    let engine = SensitivityEngine::new(BlackForwardPricer::new());

    c.bench_function("sensitivity_report_8x11", |b| {
        b.iter(|| {
            engine
                .compute_report(black_box(&derivative), black_box(&market))
                .expect("report")
        });
    });
}

/// Benchmark bucketed delta, three repricings plus distribution.
fn bench_bucketed_delta(c: &mut Criterion) {
    let market = grid_market(4, 5);
    let derivative = put();
    let engine = SensitivityEngine::new(BlackForwardPricer::new());

    c.bench_function("bucketed_delta", |b| {
        b.iter(|| {
            engine
                .compute_bucketed_delta(black_box(&derivative), black_box(&market))
                .expect("bucketed delta")
        });
    });
}

criterion_group!(
    benches,
    bench_vega_surface,
    bench_report,
    bench_bucketed_delta
);
criterion_main!(benches);
