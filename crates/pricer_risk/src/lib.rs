//! # Pricer Risk (L4: Application)
//!
//! Bump-and-reprice risk sensitivities for any [`DerivativePricer`].
//!
//! The engine perturbs one market input at a time, reprices through the
//! injected pricer and combines the results with centered differences and
//! a little closed-form algebra.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! │  sensitivities/ - SensitivityEngine,    │
//! │    distributor, shifter, config         │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Derivative, DerivativePricer           │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            pricer_core (L1)             │
//! │  curves, surfaces, MarketDataBundle     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Logging
//!
//! Scenario repricings are logged at `debug`, full reports at `info` and a
//! zero forward at `warn`, all through `tracing`. Installing a subscriber is
//! left to the application.
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::{
//!     CurveEnum, ForwardCurve, InterpolatedVolSurface, MarketDataBundle, NamedCurve,
//! };
//! use pricer_models::instruments::{Derivative, EquityIndexOption, InstrumentParams, PayoffType};
//! use pricer_models::pricing::BlackForwardPricer;
//! use pricer_risk::sensitivities::SensitivityEngine;
//!
//! let surface = InterpolatedVolSurface::new(
//!     &[0.5, 0.5, 1.0, 1.0],
//!     &[4000.0, 5000.0, 4000.0, 5000.0],
//!     &[0.24, 0.18, 0.23, 0.19],
//!     true,
//! )
//! .unwrap();
//! let market = MarketDataBundle::new(
//!     surface,
//!     NamedCurve::new("USD-OIS", CurveEnum::flat(0.04)),
//!     ForwardCurve::new("SPX", 4500.0, CurveEnum::flat(0.03)),
//! );
//!
//! let params = InstrumentParams::new(0.75, 0.76, 10.0).unwrap();
//! let put: Derivative<f64> = EquityIndexOption::new(4400.0, params, PayoffType::Put)
//!     .unwrap()
//!     .into();
//!
//! let engine = SensitivityEngine::new(BlackForwardPricer::new());
//! let report = engine.compute_report(&put, &market).unwrap();
//!
//! assert!(report.forward_delta < 0.0);
//! assert_eq!(report.vega_surface.map(|s| s.len()), Some(4));
//! ```
//!
//! [`DerivativePricer`]: pricer_models::pricing::DerivativePricer

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod sensitivities;
