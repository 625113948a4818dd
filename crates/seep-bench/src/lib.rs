//! Benchmark profiles for the Seep transport solver.
//!
//! Pre-built [`RunParameters`] profiles sized for benchmarking:
//!
//! - [`reference_profile`]: 10K cells, 100 steps, stable `dt`.
//! - [`stress_profile`]: 100K cells, same physics at 10x the cell count.
//! - [`advection_profile`]: 10K cells under drift and spread.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use seep_core::{Regime, RunParameters};

/// Reference profile: 10K cells of pure diffusion, 100 steps.
///
/// `dt = 0.1` sits well inside the stability bound `dx²/(2D) = 0.5`.
pub fn reference_profile() -> RunParameters {
    RunParameters {
        regime: Regime::Diffusion { d: 1.0 },
        nx: 10_000,
        dx: 1.0,
        steps: 100,
        dt: 0.1,
        store_frames: 10,
    }
}

/// Stress profile: 100K cells, same physics as [`reference_profile`].
pub fn stress_profile() -> RunParameters {
    let mut p = reference_profile();
    p.nx = 100_000;
    p
}

/// Advection-diffusion profile: 10K cells with a rightward drift.
pub fn advection_profile() -> RunParameters {
    RunParameters {
        regime: Regime::AdvectionDiffusion {
            d: 0.1,
            velocity: 0.5,
        },
        nx: 10_000,
        dx: 1.0,
        steps: 100,
        dt: 0.1,
        store_frames: 10,
    }
}
