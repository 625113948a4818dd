//! Invalid parameters are rejected before any stepping.

use seep_core::{ParameterError, Regime, SolverError};
use seep_solver::run;
use seep_test_utils::diffusion_params;

fn rejects(
    mutate: impl FnOnce(&mut seep_core::RunParameters),
    expected: ParameterError,
) {
    let mut params = diffusion_params();
    mutate(&mut params);
    assert_eq!(run(&params), Err(SolverError::InvalidParameter(expected)));
}

#[test]
fn rejects_single_cell_grid() {
    rejects(|p| p.nx = 1, ParameterError::GridTooSmall { nx: 1 });
}

#[test]
fn rejects_zero_spacing() {
    rejects(|p| p.dx = 0.0, ParameterError::NonPositiveSpacing { dx: 0.0 });
}

#[test]
fn rejects_zero_steps() {
    rejects(|p| p.steps = 0, ParameterError::ZeroSteps);
}

#[test]
fn rejects_negative_dt() {
    rejects(|p| p.dt = -0.1, ParameterError::NonPositiveDt { dt: -0.1 });
}

#[test]
fn rejects_frame_count_outside_bounds() {
    rejects(
        |p| p.store_frames = 0,
        ParameterError::FrameCountOutOfRange {
            requested: 0,
            max: 50,
        },
    );
    rejects(
        |p| p.store_frames = 51,
        ParameterError::FrameCountOutOfRange {
            requested: 51,
            max: 50,
        },
    );
}

#[test]
fn rejects_non_positive_diffusion_coefficient() {
    rejects(
        |p| p.regime = Regime::Diffusion { d: 0.0 },
        ParameterError::NonPositiveCoefficient {
            name: "D",
            value: 0.0,
        },
    );
}

#[test]
fn rejects_negative_conductivity() {
    rejects(
        |p| p.regime = Regime::Heat { conductivity: -2.0 },
        ParameterError::NonPositiveCoefficient {
            name: "k",
            value: -2.0,
        },
    );
}

#[test]
fn rejects_zero_advection_velocity() {
    rejects(
        |p| {
            p.regime = Regime::AdvectionDiffusion {
                d: 1.0,
                velocity: 0.0,
            }
        },
        ParameterError::ZeroVelocity,
    );
}

#[test]
fn rejects_non_finite_coefficient() {
    let mut params = diffusion_params();
    params.regime = Regime::Diffusion { d: f64::NAN };
    assert!(matches!(
        run(&params),
        Err(SolverError::InvalidParameter(
            ParameterError::NonFiniteCoefficient { name: "D", .. }
        ))
    ));
}

#[test]
fn accepts_zero_diffusion_under_advection() {
    let mut params = diffusion_params();
    params.nx = 100;
    params.regime = Regime::AdvectionDiffusion {
        d: 0.0,
        velocity: 0.5,
    };
    assert!(run(&params).is_ok());
}
