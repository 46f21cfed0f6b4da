//! Result containers for node-level sensitivities.

use pricer_core::market_data::CurveName;
use serde::Serialize;

use super::error::SensitivityError;

/// Sensitivity attributed to one curve node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeSensitivity {
    /// Curve the node belongs to.
    pub curve: CurveName,
    /// Pillar tenor in years, `None` for a curve without pillars.
    pub tenor: Option<f64>,
    /// Sensitivity to the node's zero rate.
    pub value: f64,
}

/// Node-aligned sensitivities across one or more curves.
///
/// Ordering is the distributor's: curves by name, then each curve's own
/// node order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SensitivityVector {
    nodes: Vec<NodeSensitivity>,
}

impl SensitivityVector {
    /// Wrap an ordered node list.
    pub fn new(nodes: Vec<NodeSensitivity>) -> Self {
        Self { nodes }
    }

    /// Nodes in order.
    pub fn nodes(&self) -> &[NodeSensitivity] {
        &self.nodes
    }

    /// Values in node order.
    pub fn values(&self) -> Vec<f64> {
        self.nodes.iter().map(|n| n.value).collect()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true when there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sum over all nodes.
    pub fn total(&self) -> f64 {
        self.nodes.iter().map(|n| n.value).sum()
    }

    /// Nodes of one curve.
    pub fn for_curve<'a>(
        &'a self,
        curve: &'a CurveName,
    ) -> impl Iterator<Item = &'a NodeSensitivity> + 'a {
        self.nodes.iter().filter(move |n| &n.curve == curve)
    }
}

/// Vega per surface node, as three index-aligned arrays.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodalSurface {
    maturities: Vec<f64>,
    strikes: Vec<f64>,
    values: Vec<f64>,
}

impl NodalSurface {
    /// Build from parallel arrays.
    ///
    /// # Errors
    /// `InvalidArgument` when the arrays differ in length.
    pub fn new(
        maturities: Vec<f64>,
        strikes: Vec<f64>,
        values: Vec<f64>,
    ) -> Result<Self, SensitivityError> {
        if maturities.len() != strikes.len() || strikes.len() != values.len() {
            return Err(SensitivityError::InvalidArgument(format!(
                "nodal surface arrays differ in length: {} maturities, {} strikes, {} values",
                maturities.len(),
                strikes.len(),
                values.len()
            )));
        }
        Ok(Self {
            maturities,
            strikes,
            values,
        })
    }

    /// Node maturities.
    pub fn maturities(&self) -> &[f64] {
        &self.maturities
    }

    /// Node strikes.
    pub fn strikes(&self) -> &[f64] {
        &self.strikes
    }

    /// Node values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(maturity, strike, value)` of node `j`.
    pub fn get(&self, j: usize) -> Option<(f64, f64, f64)> {
        Some((
            *self.maturities.get(j)?,
            *self.strikes.get(j)?,
            *self.values.get(j)?,
        ))
    }

    /// Sum of node values.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// All risk measures for one derivative under one market.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SensitivityReport {
    /// Unshifted present value.
    pub present_value: f64,
    /// Currency per unit change in the forward.
    pub forward_delta: f64,
    /// Sensitivity to the funding rate.
    pub discount_rate_sensitivity: f64,
    /// Sensitivity to a one basis point funding move.
    pub pv01: f64,
    /// Discount-rate sensitivity spread over the discount curve nodes.
    pub bucketed_delta: SensitivityVector,
    /// Sensitivity to a parallel volatility move.
    pub parallel_vega: f64,
    /// Vega per surface node, `None` unless the surface is node-discrete.
    pub vega_surface: Option<NodalSurface>,
}
