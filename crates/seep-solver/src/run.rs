//! One-shot simulation runs.

use seep_core::{RunParameters, SolverError, StepId};
use seep_grid::{initial_field, Grid1D};

use crate::schedule::SnapshotSchedule;
use crate::snapshot::SnapshotSequence;
use crate::stepper::Stepper;

/// Execute a complete simulation run.
///
/// Validates `params`, builds the grid and the regime's initial field,
/// advances `params.steps` explicit Euler steps, and records
/// `params.store_frames` evenly-spaced frames (the initial and final
/// states always included when two or more frames are requested).
///
/// Pure: identical parameters yield identical snapshot sequences, and
/// no state survives the call. On [`SolverError::NumericalInstability`]
/// no partial sequence is returned.
pub fn run(params: &RunParameters) -> Result<SnapshotSequence, SolverError> {
    params.validate()?;

    let grid = Grid1D::new(params.nx, params.dx)?;
    let initial = initial_field(&grid, &params.regime);
    let schedule = SnapshotSchedule::new(params.steps, params.store_frames);

    let mut stepper = Stepper::new(grid, &params.regime, params.dt, initial);
    let mut frames = SnapshotSequence::with_capacity(schedule.len());

    if schedule.is_due(StepId(0)) {
        frames.push(StepId(0), stepper.field().clone());
    }
    for _ in 0..params.steps {
        let step = stepper.advance()?;
        if schedule.is_due(step) {
            frames.push(step, stepper.field().clone());
        }
    }

    debug_assert_eq!(frames.len(), schedule.len());
    Ok(frames)
}
