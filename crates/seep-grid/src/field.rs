//! Dense per-cell scalar storage.

use crate::grid::Grid1D;

/// The scalar quantity (concentration or temperature) at one instant,
/// one `f64` per cell in canonical cell order.
///
/// Owned exclusively by the stepper during time integration; recorded
/// frames are clones.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    values: Vec<f64>,
}

impl Field {
    /// A field of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    /// Build a field by evaluating `f` at every cell index.
    pub fn from_fn(len: usize, f: impl Fn(usize) -> f64) -> Self {
        Self {
            values: (0..len).map(f).collect(),
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the field has zero cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the cell values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mutable view of the cell values.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Sum of all cell values (the conserved "mass" under no-flux
    /// boundaries).
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Index of the first NaN or infinite cell, if any.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.values.iter().position(|v| !v.is_finite())
    }

    /// Mass-weighted mean position of the field on `grid`, or `None`
    /// when the total is zero (centroid undefined).
    ///
    /// Used to track pulse translation under advection.
    pub fn centroid(&self, grid: &Grid1D) -> Option<f64> {
        debug_assert_eq!(self.len(), grid.cell_count());
        let total = self.total();
        if total == 0.0 {
            return None;
        }
        let weighted: f64 = self
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| v * grid.cell_center(i))
            .sum();
        Some(weighted / total)
    }
}

impl From<Vec<f64>> for Field {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_and_total() {
        let f = Field::zeros(4);
        assert_eq!(f.len(), 4);
        assert_eq!(f.total(), 0.0);
    }

    #[test]
    fn from_fn_evaluates_per_cell() {
        let f = Field::from_fn(3, |i| i as f64 * 2.0);
        assert_eq!(f.values(), &[0.0, 2.0, 4.0]);
        assert_eq!(f.total(), 6.0);
    }

    #[test]
    fn first_non_finite_finds_earliest() {
        let f = Field::from(vec![1.0, f64::NAN, f64::INFINITY]);
        assert_eq!(f.first_non_finite(), Some(1));

        let g = Field::from(vec![1.0, 2.0]);
        assert_eq!(g.first_non_finite(), None);
    }

    #[test]
    fn centroid_of_point_mass() {
        let grid = Grid1D::new(10, 1.0).unwrap();
        let mut f = Field::zeros(10);
        f.values_mut()[3] = 5.0;
        let c = f.centroid(&grid).unwrap();
        assert!((c - grid.cell_center(3)).abs() < 1e-12);
    }

    #[test]
    fn centroid_of_zero_field_is_none() {
        let grid = Grid1D::new(5, 1.0).unwrap();
        assert_eq!(Field::zeros(5).centroid(&grid), None);
    }
}
