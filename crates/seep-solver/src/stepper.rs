//! Explicit Euler time integration with double-buffered fields.

use std::mem;

use seep_core::{Regime, SolverError, StepId};
use seep_grid::{BoundaryPolicy, Field, Grid1D};

/// Advances a field one explicit Euler step at a time.
///
/// Every read during a step comes from the previous step's buffer, so
/// update order never leaks into the result (a Jacobi sweep). The two
/// buffers are swapped after each sweep rather than copied.
///
/// The stepper accepts any positive `dt`. An unstable combination of
/// `dt`, `dx`, and coefficients diverges honestly and is surfaced as
/// [`SolverError::NumericalInstability`] as soon as a cell goes
/// non-finite; the field is never clamped or repaired.
#[derive(Clone, Debug)]
pub struct Stepper {
    grid: Grid1D,
    policy: BoundaryPolicy,
    /// Precomputed `coeff * dt / dx²` for the second-difference term.
    diff: f64,
    /// Precomputed `v * dt / (2 dx)` for the central advection term.
    adv: f64,
    current: Field,
    staging: Field,
    step: u64,
}

impl Stepper {
    /// Set up a stepper over `initial` on `grid`.
    ///
    /// # Panics
    ///
    /// Panics if `initial` does not have one value per grid cell.
    pub fn new(grid: Grid1D, regime: &Regime, dt: f64, initial: Field) -> Self {
        assert_eq!(
            initial.len(),
            grid.cell_count(),
            "field length must match grid cell count",
        );
        let dx = grid.spacing();
        let staging = Field::zeros(initial.len());
        Self {
            policy: BoundaryPolicy::for_regime(regime),
            diff: regime.diffusivity() * dt / (dx * dx),
            adv: regime.velocity() * dt / (2.0 * dx),
            grid,
            current: initial,
            staging,
            step: 0,
        }
    }

    /// The grid this stepper integrates on.
    pub fn grid(&self) -> &Grid1D {
        &self.grid
    }

    /// The field at the current step.
    pub fn field(&self) -> &Field {
        &self.current
    }

    /// The current step index. `StepId(0)` before any call to
    /// [`advance`](Self::advance).
    pub fn step(&self) -> StepId {
        StepId(self.step)
    }

    /// Advance one explicit Euler step, returning the new step index.
    ///
    /// On `Err(NumericalInstability)` the run is over; the stepper must
    /// not be advanced again.
    pub fn advance(&mut self) -> Result<StepId, SolverError> {
        self.sweep();
        mem::swap(&mut self.current, &mut self.staging);
        self.step += 1;

        if let Some(cell) = self.current.first_non_finite() {
            return Err(SolverError::NumericalInstability {
                step: self.step,
                cell,
            });
        }
        Ok(StepId(self.step))
    }

    /// One Jacobi sweep from `current` into `staging`.
    fn sweep(&mut self) {
        let prev = self.current.values();
        let next = self.staging.values_mut();
        let n = prev.len();

        match self.policy {
            BoundaryPolicy::ZeroGradient => {
                // Ghost cells mirror the edge value, which zeroes the
                // flux through the outer faces and keeps the update in
                // conservative form: every interior face contributes
                // equal and opposite amounts to its two cells.
                for i in 0..n {
                    let u = prev[i];
                    let uw = if i > 0 { prev[i - 1] } else { u };
                    let ue = if i + 1 < n { prev[i + 1] } else { u };
                    next[i] = u + self.diff * (uw - 2.0 * u + ue) - self.adv * (ue - uw);
                }
            }
            BoundaryPolicy::ZeroValue => {
                for i in 1..n - 1 {
                    let u = prev[i];
                    let uw = prev[i - 1];
                    let ue = prev[i + 1];
                    next[i] = u + self.diff * (uw - 2.0 * u + ue) - self.adv * (ue - uw);
                }
                next[0] = 0.0;
                next[n - 1] = 0.0;
            }
        }
    }

    /// Consume the stepper, yielding the current field.
    pub fn into_field(self) -> Field {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diffusion_stepper(nx: u32, d: f64, dt: f64, initial: Field) -> Stepper {
        let grid = Grid1D::new(nx, 1.0).unwrap();
        Stepper::new(grid, &Regime::Diffusion { d }, dt, initial)
    }

    #[test]
    fn uniform_field_is_a_fixed_point_of_diffusion() {
        let initial = Field::from(vec![3.0; 8]);
        let mut s = diffusion_stepper(8, 1.0, 0.1, initial.clone());
        for _ in 0..20 {
            s.advance().unwrap();
        }
        for (&got, &want) in s.field().values().iter().zip(initial.values()) {
            assert!((got - want).abs() < 1e-12, "{got} drifted from {want}");
        }
    }

    #[test]
    fn point_mass_spreads_symmetrically() {
        let mut initial = Field::zeros(9);
        initial.values_mut()[4] = 1.0;
        let mut s = diffusion_stepper(9, 1.0, 0.1, initial);
        for _ in 0..10 {
            s.advance().unwrap();
        }
        let v = s.field().values();
        assert!(v[4] < 1.0, "peak must decay");
        assert!(v[3] > 0.0 && v[5] > 0.0, "mass must spread");
        for i in 0..4 {
            assert!(
                (v[i] - v[8 - i]).abs() < 1e-12,
                "asymmetry at {i}: {} vs {}",
                v[i],
                v[8 - i],
            );
        }
    }

    #[test]
    fn zero_gradient_conserves_total_exactly_enough() {
        let mut initial = Field::zeros(10);
        initial.values_mut()[2] = 4.0;
        initial.values_mut()[3] = 1.0;
        let before = initial.total();
        let mut s = diffusion_stepper(10, 1.0, 0.1, initial);
        for _ in 0..100 {
            s.advance().unwrap();
        }
        let after = s.field().total();
        assert!(
            (after - before).abs() < 1e-9,
            "total drifted from {before} to {after}",
        );
    }

    #[test]
    fn zero_value_edges_stay_pinned() {
        let grid = Grid1D::new(6, 1.0).unwrap();
        let initial = Field::from(vec![0.0, 5.0, 5.0, 5.0, 5.0, 0.0]);
        let mut s = Stepper::new(grid, &Regime::Heat { conductivity: 1.0 }, 0.1, initial);
        for _ in 0..30 {
            s.advance().unwrap();
        }
        let v = s.field().values();
        assert_eq!(v[0], 0.0);
        assert_eq!(v[5], 0.0);
        // Heat drains through the pinned edges.
        assert!(s.field().total() < 20.0);
    }

    #[test]
    fn unstable_timestep_reports_step_and_cell() {
        let grid = Grid1D::new(10, 1e-3).unwrap();
        let initial = Field::from_fn(10, |i| if i == 5 { 1.0 } else { 0.0 });
        let mut s = Stepper::new(grid, &Regime::Diffusion { d: 1.0 }, 10.0, initial);
        let mut result = Ok(StepId(0));
        for _ in 0..500 {
            result = s.advance();
            if result.is_err() {
                break;
            }
        }
        match result {
            Err(SolverError::NumericalInstability { step, cell }) => {
                assert!(step >= 1);
                assert!(cell < 10);
            }
            other => panic!("expected instability, got {other:?}"),
        }
    }

    #[test]
    fn pure_advection_translates_the_centroid() {
        let grid = Grid1D::new(200, 1.0).unwrap();
        let sigma = 5.0;
        let initial = Field::from_fn(200, |i| {
            let x = grid.cell_center(i) - 60.0;
            (-(x * x) / (2.0 * sigma * sigma)).exp()
        });
        let regime = Regime::AdvectionDiffusion {
            d: 0.0,
            velocity: 1.0,
        };
        let dt = 0.2;
        let c0 = initial.centroid(&grid).unwrap();
        let mut s = Stepper::new(grid.clone(), &regime, dt, initial);
        let steps = 100;
        for _ in 0..steps {
            s.advance().unwrap();
        }
        let c1 = s.field().centroid(&grid).unwrap();
        let expected = c0 + 1.0 * dt * steps as f64;
        assert!(
            (c1 - expected).abs() < 0.05,
            "centroid {c1} not near {expected}",
        );
    }
}
