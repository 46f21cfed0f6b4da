//! Volatility surface abstractions for option pricing.
//!
//! This module provides:
//! - [`VolatilitySurface`]: Generic trait for implied volatility lookup
//! - [`FlatVol`]: Constant volatility surface implementation
//! - [`InterpolatedVolSurface`]: Node-discrete interpolated volatility surface
//! - [`NodeInsertion`]: How a shift at a missing node is valued
//! - [`SurfaceEnum`]: Static dispatch enum wrapping the implementations

mod flat;
mod interpolated;
mod surface_enum;
mod traits;

pub use flat::FlatVol;
pub use interpolated::{InterpolatedVolSurface, NodeInsertion};
pub use surface_enum::SurfaceEnum;
pub use traits::VolatilitySurface;
