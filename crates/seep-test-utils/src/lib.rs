//! Test fixtures for Seep development.
//!
//! Standard parameter sets for the three regimes, sized so the explicit
//! scheme is comfortably stable and runs finish fast. Each fixture is a
//! plain [`RunParameters`] value; tests mutate the fields they care
//! about.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use seep_core::{Regime, RunParameters};
use seep_grid::{initial_field, Field, Grid1D};

/// Stable diffusion run: `D = 1`, `dx = 1`, `dt = 0.1` (bound is 0.5).
pub fn diffusion_params() -> RunParameters {
    RunParameters {
        regime: Regime::Diffusion { d: 1.0 },
        nx: 50,
        dx: 1.0,
        steps: 100,
        dt: 0.1,
        store_frames: 10,
    }
}

/// Stable heat-conduction run with Dirichlet zero edges.
pub fn heat_params() -> RunParameters {
    RunParameters {
        regime: Regime::Heat { conductivity: 1.0 },
        nx: 50,
        dx: 1.0,
        steps: 100,
        dt: 0.1,
        store_frames: 10,
    }
}

/// Stable advection-diffusion run with a rightward drift.
pub fn advection_params() -> RunParameters {
    RunParameters {
        regime: Regime::AdvectionDiffusion {
            d: 0.1,
            velocity: 0.5,
        },
        nx: 100,
        dx: 1.0,
        steps: 100,
        dt: 0.1,
        store_frames: 10,
    }
}

/// Pure translation: advection with `D = 0`.
pub fn pure_translation_params() -> RunParameters {
    let mut p = advection_params();
    p.regime = Regime::AdvectionDiffusion {
        d: 0.0,
        velocity: 0.5,
    };
    p
}

/// A diffusion run whose `dt` violates the stability bound badly enough
/// to overflow to non-finite values within a few hundred steps.
pub fn unstable_diffusion_params() -> RunParameters {
    RunParameters {
        regime: Regime::Diffusion { d: 1.0 },
        nx: 10,
        dx: 1e-3,
        steps: 500,
        dt: 10.0,
        store_frames: 2,
    }
}

/// The grid a parameter set describes.
pub fn grid_for(params: &RunParameters) -> Grid1D {
    Grid1D::new(params.nx, params.dx).expect("fixture grid must be valid")
}

/// The initial field a parameter set describes.
pub fn initial_for(params: &RunParameters) -> Field {
    initial_field(&grid_for(params), &params.regime)
}
