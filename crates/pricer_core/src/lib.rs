//! # pricer_core: Market Data Foundation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Error types: `PricingError`, `InterpolationError` (`types::error`)
//! - Piecewise linear interpolation with node weights (`math::interpolators`)
//! - Yield curves, forward curves and their node views (`market_data::curves`)
//! - Volatility surfaces, including node-discrete ones (`market_data::surfaces`)
//! - The immutable `MarketDataBundle` (`market_data::bundle`)
//! - Shift conventions for bump-and-reprice (`traits::risk`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::{CurveEnum, ForwardCurve, MarketDataBundle, NamedCurve, SurfaceEnum};
//! use pricer_core::market_data::YieldCurve;
//!
//! let market = MarketDataBundle::new(
//!     SurfaceEnum::flat(0.2_f64),
//!     NamedCurve::new("USD-OIS", CurveEnum::flat(0.05)),
//!     ForwardCurve::flat("SPX", 100.0),
//! );
//!
//! let df = market.discount_curve().discount_factor(1.0).unwrap();
//! # assert!((df - 0.951229).abs() < 1e-5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for curve names, interpolation settings
//!   and `NodeInsertion`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod traits;
pub mod types;
