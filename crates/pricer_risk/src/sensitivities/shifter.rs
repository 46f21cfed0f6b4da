//! Single-node volatility surface shifts.

use pricer_core::market_data::{NodeInsertion, SurfaceEnum};

use super::error::SensitivityError;

/// Operation name reported when a surface has no nodes to shift.
pub(crate) const NODE_SHIFT: &str = "node shifts (requires InterpolatedVolSurface)";

/// Returns a surface with one `(maturity, strike)` coordinate shifted.
pub trait SurfaceShifter: Send + Sync {
    /// Shift the coordinate by an additive `amount`.
    ///
    /// A coordinate that is not a node is inserted as a new node. The
    /// result is usable by any pricer that accepted the input surface.
    fn apply(
        &self,
        surface: &SurfaceEnum<f64>,
        maturity: f64,
        strike: f64,
        amount: f64,
    ) -> Result<SurfaceEnum<f64>, SensitivityError>;
}

/// Shifter for node-discrete surfaces.
///
/// Non-nodal surfaces are rejected with `UnsupportedOperation`.
///
/// # Examples
/// ```
/// use pricer_core::market_data::{InterpolatedVolSurface, NodeInsertion, SurfaceEnum};
/// use pricer_risk::sensitivities::{NodalSurfaceShifter, SurfaceShifter};
///
/// let surface: SurfaceEnum<f64> =
///     InterpolatedVolSurface::new(&[1.0], &[100.0], &[0.2], true).unwrap().into();
/// let shifter = NodalSurfaceShifter::new(NodeInsertion::ShiftOnly);
///
/// let shifted = shifter.apply(&surface, 2.0, 100.0, 0.01).unwrap();
/// assert_eq!(shifted.as_nodal().unwrap().vols(), &[0.2, 0.01]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodalSurfaceShifter {
    insertion: NodeInsertion,
}

impl NodalSurfaceShifter {
    /// Creates a shifter with the given insertion rule.
    pub fn new(insertion: NodeInsertion) -> Self {
        Self { insertion }
    }

    /// Value rule for inserted nodes.
    pub fn insertion(&self) -> NodeInsertion {
        self.insertion
    }
}

impl SurfaceShifter for NodalSurfaceShifter {
    fn apply(
        &self,
        surface: &SurfaceEnum<f64>,
        maturity: f64,
        strike: f64,
        amount: f64,
    ) -> Result<SurfaceEnum<f64>, SensitivityError> {
        let nodal = surface
            .as_nodal()
            .ok_or_else(|| SensitivityError::unsupported(surface.kind(), NODE_SHIFT))?;
        let shifted = nodal.with_node_shift(maturity, strike, amount, self.insertion)?;
        Ok(shifted.into())
    }
}
