//! 1D uniform finite-volume mesh.

use seep_core::ParameterError;
use smallvec::{smallvec, SmallVec};

/// A one-dimensional uniform mesh of `nx` cells with spacing `dx`.
///
/// Immutable once constructed. Cell `i` (for `0 <= i < nx`) covers the
/// interval `[i*dx, (i+1)*dx)`; its center is at `(i + 0.5) * dx`.
///
/// # Examples
///
/// ```
/// use seep_grid::Grid1D;
///
/// let grid = Grid1D::new(10, 0.5).unwrap();
/// assert_eq!(grid.cell_count(), 10);
/// assert_eq!(grid.domain_length(), 5.0);
/// assert_eq!(grid.cell_center(0), 0.25);
///
/// // Interior cell has two neighbours, edge cell has one.
/// assert_eq!(grid.neighbours(4).as_slice(), &[3, 5]);
/// assert_eq!(grid.neighbours(0).as_slice(), &[1]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid1D {
    nx: u32,
    dx: f64,
}

impl Grid1D {
    /// Maximum cell count: index arithmetic uses `i32`, so `nx` must fit.
    pub const MAX_CELLS: u32 = i32::MAX as u32;

    /// Create a mesh with `nx` cells of width `dx`.
    ///
    /// Returns `Err(ParameterError::GridTooSmall)` if `nx < 2` (the
    /// stencil needs at least one interior face),
    /// `Err(ParameterError::GridTooLarge)` if `nx > MAX_CELLS`, or
    /// `Err(ParameterError::NonPositiveSpacing)` if `dx` is not finite
    /// and positive.
    pub fn new(nx: u32, dx: f64) -> Result<Self, ParameterError> {
        if nx < 2 {
            return Err(ParameterError::GridTooSmall { nx });
        }
        if nx > Self::MAX_CELLS {
            return Err(ParameterError::GridTooLarge {
                nx,
                max: Self::MAX_CELLS,
            });
        }
        if !dx.is_finite() || dx <= 0.0 {
            return Err(ParameterError::NonPositiveSpacing { dx });
        }
        Ok(Self { nx, dx })
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.nx as usize
    }

    /// Cell width.
    pub fn spacing(&self) -> f64 {
        self.dx
    }

    /// Total domain length `nx * dx`.
    pub fn domain_length(&self) -> f64 {
        self.nx as f64 * self.dx
    }

    /// Coordinate of the center of cell `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= cell_count()`.
    pub fn cell_center(&self, i: usize) -> f64 {
        assert!(i < self.cell_count(), "cell index {i} out of bounds");
        (i as f64 + 0.5) * self.dx
    }

    /// Coordinate of the domain midpoint.
    pub fn midpoint(&self) -> f64 {
        self.domain_length() / 2.0
    }

    /// Adjacent cell indices of cell `i`. Edge cells have one neighbour.
    ///
    /// # Panics
    ///
    /// Panics if `i >= cell_count()`.
    pub fn neighbours(&self, i: usize) -> SmallVec<[usize; 2]> {
        assert!(i < self.cell_count(), "cell index {i} out of bounds");
        let last = self.cell_count() - 1;
        match i {
            0 => smallvec![1],
            _ if i == last => smallvec![last - 1],
            _ => smallvec![i - 1, i + 1],
        }
    }
}
