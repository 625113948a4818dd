//! Explicit finite-volume time stepper for 1D transport equations.
//!
//! The solver advances a scalar field with central differences in space
//! and forward Euler in time, under one of three physical regimes
//! (diffusion, heat conduction, advection-diffusion). Every read during
//! a step comes from the previous step's buffer (a Jacobi sweep,
//! realized as double-buffering), and evenly-spaced snapshots of the
//! field are recorded for the rendering collaborator.
//!
//! The top-level entry point is [`run`]: a pure function from validated
//! [`RunParameters`](seep_core::RunParameters) to a [`SnapshotSequence`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod run;
pub mod schedule;
pub mod snapshot;
pub mod stepper;

pub use run::run;
pub use schedule::SnapshotSchedule;
pub use snapshot::{Frame, SnapshotSequence};
pub use stepper::Stepper;
