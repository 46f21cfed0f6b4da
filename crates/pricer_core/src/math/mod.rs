//! Mathematical utilities for market data evaluation.
//!
//! - [`interpolators`]: One-dimensional interpolation used by curves and
//!   volatility surfaces

pub mod interpolators;
