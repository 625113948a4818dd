//! Physical regimes and validated run parameters.
//!
//! [`RunParameters`] is the single input to a simulation run. Its
//! [`validate()`](RunParameters::validate) checks every structural
//! invariant up front so the stepper never has to re-check mid-run.

use crate::error::ParameterError;

/// Inclusive upper bound on the number of recorded frames per run.
pub const MAX_STORE_FRAMES: u32 = 50;

// ── Regime ─────────────────────────────────────────────────────────

/// The governing equation for a run.
///
/// The three regimes share one explicit-Euler skeleton and differ only
/// in flux terms and boundary handling. A regime is selected once per
/// run and never changes mid-run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Regime {
    /// Pure diffusion: `∂u/∂t = D ∂²u/∂x²`, no-flux boundaries.
    Diffusion {
        /// Diffusion coefficient, strictly positive.
        d: f64,
    },
    /// Heat conduction: `∂T/∂t = k ∂²T/∂x²`, fixed zero-value boundaries.
    Heat {
        /// Thermal conductivity, strictly positive.
        conductivity: f64,
    },
    /// Advection-diffusion: `∂u/∂t + v ∂u/∂x = D ∂²u/∂x²`, no-flux
    /// boundaries. `d == 0` is allowed (pure translation).
    AdvectionDiffusion {
        /// Diffusion coefficient, non-negative.
        d: f64,
        /// Advection velocity, non-zero. May be negative.
        velocity: f64,
    },
}

impl Regime {
    /// The diffusive coefficient of the regime (`D` or `k`).
    pub fn diffusivity(&self) -> f64 {
        match self {
            Self::Diffusion { d } => *d,
            Self::Heat { conductivity } => *conductivity,
            Self::AdvectionDiffusion { d, .. } => *d,
        }
    }

    /// The advection velocity; zero for the purely diffusive regimes.
    pub fn velocity(&self) -> f64 {
        match self {
            Self::AdvectionDiffusion { velocity, .. } => *velocity,
            _ => 0.0,
        }
    }

    /// Largest timestep for which the explicit scheme is stable on a
    /// grid with spacing `dx`, or `None` if unconstrained.
    ///
    /// Diffusive bound `dx²/(2·coeff)`; advective bound `dx/|v|`; the
    /// combined regime takes the tighter of the two. Advisory only —
    /// the stepper accepts any positive `dt` and lets unstable inputs
    /// diverge (surfaced as `NumericalInstability` if they go
    /// non-finite).
    pub fn stable_dt(&self, dx: f64) -> Option<f64> {
        let diffusive = {
            let c = self.diffusivity();
            (c > 0.0).then(|| dx * dx / (2.0 * c))
        };
        let advective = {
            let v = self.velocity().abs();
            (v > 0.0).then(|| dx / v)
        };
        match (diffusive, advective) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }

    /// Validate coefficient signs and ranges for this regime.
    pub fn validate(&self) -> Result<(), ParameterError> {
        match *self {
            Self::Diffusion { d } => {
                check_finite("D", d)?;
                if d <= 0.0 {
                    return Err(ParameterError::NonPositiveCoefficient {
                        name: "D",
                        value: d,
                    });
                }
            }
            Self::Heat { conductivity } => {
                check_finite("k", conductivity)?;
                if conductivity <= 0.0 {
                    return Err(ParameterError::NonPositiveCoefficient {
                        name: "k",
                        value: conductivity,
                    });
                }
            }
            Self::AdvectionDiffusion { d, velocity } => {
                check_finite("D", d)?;
                check_finite("velocity", velocity)?;
                // d == 0 is valid here: the pulse translates without spreading.
                if d < 0.0 {
                    return Err(ParameterError::NonPositiveCoefficient {
                        name: "D",
                        value: d,
                    });
                }
                if velocity == 0.0 {
                    return Err(ParameterError::ZeroVelocity);
                }
            }
        }
        Ok(())
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NonFiniteCoefficient { name, value });
    }
    Ok(())
}

// ── RunParameters ──────────────────────────────────────────────────

/// Complete, regime-tagged input to a simulation run.
///
/// The request-handling collaborator is responsible for type coercion
/// and mapping malformed input to user-facing errors; by the time a
/// `RunParameters` reaches the solver it only has to pass
/// [`validate()`](RunParameters::validate).
#[derive(Clone, Debug, PartialEq)]
pub struct RunParameters {
    /// Governing equation and its coefficients.
    pub regime: Regime,
    /// Number of mesh cells.
    pub nx: u32,
    /// Cell width.
    pub dx: f64,
    /// Number of explicit Euler steps.
    pub steps: u64,
    /// Timestep.
    pub dt: f64,
    /// Number of frames to record, in `[1, MAX_STORE_FRAMES]`.
    pub store_frames: u32,
}

impl RunParameters {
    /// Validate all structural invariants.
    ///
    /// Called once before the first step; never partially computed.
    pub fn validate(&self) -> Result<(), ParameterError> {
        // 1. Grid: at least 2 cells, index arithmetic fits i32.
        if self.nx < 2 {
            return Err(ParameterError::GridTooSmall { nx: self.nx });
        }
        if self.nx > i32::MAX as u32 {
            return Err(ParameterError::GridTooLarge {
                nx: self.nx,
                max: i32::MAX as u32,
            });
        }
        // 2. Spacing must be finite and positive.
        if !self.dx.is_finite() || self.dx <= 0.0 {
            return Err(ParameterError::NonPositiveSpacing { dx: self.dx });
        }
        // 3. At least one step.
        if self.steps == 0 {
            return Err(ParameterError::ZeroSteps);
        }
        // 4. Timestep must be finite and positive.
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ParameterError::NonPositiveDt { dt: self.dt });
        }
        // 5. Frame count within [1, MAX_STORE_FRAMES].
        if self.store_frames == 0 || self.store_frames > MAX_STORE_FRAMES {
            return Err(ParameterError::FrameCountOutOfRange {
                requested: self.store_frames,
                max: MAX_STORE_FRAMES,
            });
        }
        // 6. Regime coefficients.
        self.regime.validate()?;

        Ok(())
    }
}
