//! Finite-difference risk sensitivities.
//!
//! - [`SensitivityEngine`]: forward delta, discount-rate sensitivity, PV01,
//!   bucketed delta, parallel vega, vega surface and single-point vega
//! - [`CurveNodeDistributor`] / [`InterpolatorNodeDistributor`]: spread a
//!   point sensitivity over curve nodes
//! - [`SurfaceShifter`] / [`NodalSurfaceShifter`]: shift one surface
//!   coordinate, inserting it as a node when absent
//! - [`SensitivityConfig`]: default shifts, loaded from TOML and the
//!   environment
//! - [`SensitivityVector`], [`NodalSurface`], [`SensitivityReport`]: results

mod config;
mod distributor;
mod engine;
mod error;
mod results;
mod shifter;

pub use config::{
    SensitivityConfig, ENV_FORWARD_SHIFT, ENV_NODE_INSERTION, ENV_PARALLEL_NODES,
    ENV_RATE_SHIFT, ENV_VEGA_SHIFT,
};
pub use distributor::{CurveNodeDistributor, InterpolatorNodeDistributor, PointSensitivities};
pub use engine::{SensitivityEngine, BASIS_POINTS};
pub use error::SensitivityError;
pub use results::{NodalSurface, NodeSensitivity, SensitivityReport, SensitivityVector};
pub use shifter::{NodalSurfaceShifter, SurfaceShifter};
