//! Seep: a parameterized 1D transport solver.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Seep sub-crates. For most users, adding `seep` as a single
//! dependency is sufficient.
//!
//! Three physical regimes share one explicit finite-volume skeleton:
//! pure diffusion, heat conduction with fixed zero-value edges, and
//! advection-diffusion. A run is a pure function from validated
//! parameters to an evenly-spaced sequence of field snapshots.
//!
//! # Quick start
//!
//! ```rust
//! use seep::prelude::*;
//!
//! let params = RunParameters {
//!     regime: Regime::Diffusion { d: 1.0 },
//!     nx: 50,
//!     dx: 1.0,
//!     steps: 100,
//!     dt: 0.1,
//!     store_frames: 10,
//! };
//!
//! let frames = run(&params).unwrap();
//! assert_eq!(frames.len(), 10);
//! assert_eq!(frames.first().unwrap().step(), StepId(0));
//! assert_eq!(frames.last().unwrap().step(), StepId(100));
//!
//! // Mass is conserved under no-flux boundaries.
//! let before = frames.first().unwrap().field().total();
//! let after = frames.last().unwrap().field().total();
//! assert!((after - before).abs() < 1e-9);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `seep-core` | Regimes, run parameters, IDs, error types |
//! | [`grid`] | `seep-grid` | The 1D mesh, fields, boundary policies, initial conditions |
//! | [`solver`] | `seep-solver` | The stepper, snapshot schedule, and [`run`](solver::run) |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Regimes, run parameters, IDs, and error types (`seep-core`).
pub use seep_core as types;

/// The 1D mesh, per-cell fields, boundary policies, and regime initial
/// conditions (`seep-grid`).
pub use seep_grid as grid;

/// Time integration, snapshot recording, and the one-shot
/// [`run`](solver::run) entry point (`seep-solver`).
pub use seep_solver as solver;

/// Common imports for typical Seep usage.
///
/// ```rust
/// use seep::prelude::*;
/// ```
pub mod prelude {
    // Parameters and errors
    pub use seep_core::{
        ParameterError, Regime, RunParameters, SolverError, StepId, MAX_STORE_FRAMES,
    };

    // Mesh and field
    pub use seep_grid::{initial_field, BoundaryPolicy, Field, Grid1D};

    // Solver
    pub use seep_solver::{run, Frame, SnapshotSchedule, SnapshotSequence, Stepper};
}
