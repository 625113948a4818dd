//! 1D uniform mesh and scalar field storage for Seep simulations.
//!
//! This crate defines the spatial half of the solver: the immutable
//! [`Grid1D`] mesh, the dense [`Field`] of per-cell scalars, the
//! [`BoundaryPolicy`] applied at the domain edges, and the regime
//! initial conditions in [`init`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod field;
pub mod grid;
pub mod init;

pub use boundary::BoundaryPolicy;
pub use field::Field;
pub use grid::Grid1D;
pub use init::initial_field;
