//! Boundary policies for the domain edges.

use seep_core::Regime;

/// How the two edge cells are treated after each interior update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// No-flux (zero-gradient Neumann) boundary: the flux through the
    /// outer face of each edge cell is zero, equivalent to a ghost cell
    /// holding the edge value. Conserves the field total.
    ZeroGradient,
    /// Fixed zero-value (Dirichlet) boundary: both edge cells are
    /// overwritten to `0.0` after every step.
    ZeroValue,
}

impl BoundaryPolicy {
    /// The boundary policy a regime carries.
    ///
    /// Diffusion and advection-diffusion are no-flux; heat conduction
    /// pins the edges to zero.
    pub fn for_regime(regime: &Regime) -> Self {
        match regime {
            Regime::Diffusion { .. } | Regime::AdvectionDiffusion { .. } => Self::ZeroGradient,
            Regime::Heat { .. } => Self::ZeroValue,
        }
    }
}
