//! Error types for the Seep transport solver.
//!
//! Two terminal failure kinds: invalid parameters (detected before any
//! stepping begins) and numerical instability (detected step-by-step).
//! Neither is recoverable; the solver never retries, clamps, or embeds
//! sentinel values in a valid-looking field.

use std::error::Error;
use std::fmt;

/// A precondition on run parameters is violated.
///
/// Checked once, up front, by [`RunParameters::validate`] and the grid
/// constructor; no stepping is performed when any variant is returned.
///
/// [`RunParameters::validate`]: crate::params::RunParameters::validate
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterError {
    /// Fewer than two cells — the stencil needs at least one interior face.
    GridTooSmall {
        /// The requested cell count.
        nx: u32,
    },
    /// Cell count exceeds the maximum (index arithmetic uses `i32`).
    GridTooLarge {
        /// The requested cell count.
        nx: u32,
        /// The maximum supported cell count.
        max: u32,
    },
    /// Cell spacing is zero, negative, or non-finite.
    NonPositiveSpacing {
        /// The rejected spacing.
        dx: f64,
    },
    /// A run of zero steps is meaningless.
    ZeroSteps,
    /// Timestep is zero, negative, or non-finite.
    NonPositiveDt {
        /// The rejected timestep.
        dt: f64,
    },
    /// Requested frame count is outside `[1, MAX_STORE_FRAMES]`.
    FrameCountOutOfRange {
        /// The rejected frame count.
        requested: u32,
        /// The inclusive upper bound.
        max: u32,
    },
    /// A physical coefficient must be strictly positive.
    NonPositiveCoefficient {
        /// Name of the offending coefficient (`"D"` or `"k"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A physical coefficient is NaN or infinite.
    NonFiniteCoefficient {
        /// Name of the offending coefficient.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Advection with zero velocity is plain diffusion; reject it so the
    /// caller picks the right regime.
    ZeroVelocity,
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { nx } => {
                write!(f, "grid must have at least 2 cells, got {nx}")
            }
            Self::GridTooLarge { nx, max } => {
                write!(f, "grid cell count {nx} exceeds maximum {max}")
            }
            Self::NonPositiveSpacing { dx } => {
                write!(f, "cell spacing must be finite and positive, got {dx}")
            }
            Self::ZeroSteps => write!(f, "step count must be at least 1"),
            Self::NonPositiveDt { dt } => {
                write!(f, "timestep must be finite and positive, got {dt}")
            }
            Self::FrameCountOutOfRange { requested, max } => {
                write!(f, "store_frames must be in [1, {max}], got {requested}")
            }
            Self::NonPositiveCoefficient { name, value } => {
                write!(f, "coefficient {name} must be positive, got {value}")
            }
            Self::NonFiniteCoefficient { name, value } => {
                write!(f, "coefficient {name} must be finite, got {value}")
            }
            Self::ZeroVelocity => {
                write!(f, "advection velocity must be non-zero")
            }
        }
    }
}

impl Error for ParameterError {}

/// Errors from a simulation run.
///
/// Both variants are terminal for the run. `InvalidParameter` is raised
/// before the first step; `NumericalInstability` aborts the run at the
/// step of detection and no partial snapshot sequence is returned.
#[derive(Clone, Debug, PartialEq)]
pub enum SolverError {
    /// An input constraint is violated; nothing was computed.
    InvalidParameter(ParameterError),
    /// A non-finite value appeared in the field during stepping.
    NumericalInstability {
        /// The step at which the non-finite value was detected.
        step: u64,
        /// Index of the first non-finite cell.
        cell: usize,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(e) => write!(f, "invalid parameter: {e}"),
            Self::NumericalInstability { step, cell } => {
                write!(f, "non-finite value at step {step}, cell {cell}")
            }
        }
    }
}

impl Error for SolverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidParameter(e) => Some(e),
            Self::NumericalInstability { .. } => None,
        }
    }
}

impl From<ParameterError> for SolverError {
    fn from(e: ParameterError) -> Self {
        Self::InvalidParameter(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn parameter_error_display() {
        let e = ParameterError::GridTooSmall { nx: 1 };
        assert!(format!("{e}").contains("at least 2 cells"));

        let e = ParameterError::FrameCountOutOfRange {
            requested: 51,
            max: 50,
        };
        let msg = format!("{e}");
        assert!(msg.contains("[1, 50]"));
        assert!(msg.contains("51"));
    }

    #[test]
    fn solver_error_wraps_parameter_error() {
        let inner = ParameterError::ZeroVelocity;
        let e: SolverError = inner.clone().into();
        assert_eq!(e, SolverError::InvalidParameter(inner));
        assert!(e.source().is_some());
    }

    #[test]
    fn instability_display_names_step_and_cell() {
        let e = SolverError::NumericalInstability { step: 17, cell: 3 };
        let msg = format!("{e}");
        assert!(msg.contains("step 17"));
        assert!(msg.contains("cell 3"));
        assert!(e.source().is_none());
    }
}
