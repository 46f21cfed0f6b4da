//! Market data structures for quantitative finance pricing.
//!
//! This module provides yield curve, forward curve and volatility surface
//! abstractions, and the bundle that groups them for one pricing.
//!
//! # Architecture
//!
//! All structures are generic over `T: Float`. Every structure is an
//! immutable value: shifts and node bumps return new instances.
//!
//! # Components
//!
//! - [`curves`]: Yield curves, node views and forward curves
//! - [`surfaces`]: Volatility surface trait and implementations (FlatVol, InterpolatedVolSurface)
//! - [`bundle`]: [`MarketDataBundle`]
//! - [`error`]: Market data error types (MarketDataError)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
//! use pricer_core::market_data::surfaces::{VolatilitySurface, FlatVol};
//!
//! let curve = FlatCurve::new(0.05_f64);
//! let df = curve.discount_factor(1.0).unwrap();
//! assert!((df - 0.951229).abs() < 1e-5);
//!
//! let vol_surface = FlatVol::new(0.20_f64);
//! assert_eq!(vol_surface.volatility(100.0, 1.0).unwrap(), 0.20);
//! ```

pub mod bundle;
pub mod curves;
pub mod error;
pub mod surfaces;

// Re-export commonly used types
pub use bundle::MarketDataBundle;
pub use curves::{
    CurveEnum, CurveInterpolation, CurveName, FlatCurve, ForwardCurve, InterpolatedCurve,
    NamedCurve, NodalCurve, YieldCurve,
};
pub use error::MarketDataError;
pub use surfaces::{
    FlatVol, InterpolatedVolSurface, NodeInsertion, SurfaceEnum, VolatilitySurface,
};
