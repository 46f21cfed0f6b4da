//! Curve abstractions for discounting and forward projection.
//!
//! This module provides:
//! - [`YieldCurve`]: Generic trait for discount factor and rate calculations
//! - [`NodalCurve`]: Node view of a curve for bucketed risk
//! - [`FlatCurve`]: Constant rate yield curve implementation
//! - [`InterpolatedCurve`]: Pillar-based interpolated yield curve
//! - [`CurveInterpolation`]: Interpolation method selection
//! - [`CurveEnum`]: Static dispatch enum wrapping concrete curve implementations
//! - [`CurveName`] and [`NamedCurve`]: Curve identity
//! - [`ForwardCurve`]: Forward levels of an underlying

mod curve_enum;
mod flat;
mod forward;
mod interpolated;
mod name;
mod named;
mod traits;

pub use curve_enum::CurveEnum;
pub use flat::FlatCurve;
pub use forward::ForwardCurve;
pub use interpolated::{CurveInterpolation, InterpolatedCurve};
pub use name::CurveName;
pub use named::NamedCurve;
pub use traits::{NodalCurve, YieldCurve};
