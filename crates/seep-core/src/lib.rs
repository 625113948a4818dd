//! Parameter model and error types for the Seep transport solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the physical regimes, the validated run parameters, step identifiers,
//! and the solver error types used throughout the Seep workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod params;

pub use error::{ParameterError, SolverError};
pub use id::StepId;
pub use params::{Regime, RunParameters, MAX_STORE_FRAMES};
