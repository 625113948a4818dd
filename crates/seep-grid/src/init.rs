//! Regime initial conditions.
//!
//! Deterministic: identical parameters yield bit-identical fields.

use crate::field::Field;
use crate::grid::Grid1D;
use seep_core::Regime;

/// Pulse width as a fraction of domain length.
///
/// Chosen so the pulse is visually resolved regardless of `nx`.
const SIGMA_FRACTION: f64 = 0.1;

/// Heat source amplitude.
const SOURCE_VALUE: f64 = 100.0;

/// Heat source half-width as a fraction of domain length.
const SOURCE_HALF_WIDTH_FRACTION: f64 = 0.1;

/// Build the initial field for `regime` on `grid`.
///
/// - Diffusion and advection-diffusion: a Gaussian pulse
///   `u(x) = exp(-(x - x_c)² / (2σ²))` centered at the domain midpoint
///   with `σ = domain_length / 10`.
/// - Heat: a band of fixed value `100.0` in the cells whose centers lie
///   within `domain_length / 10` of the midpoint (at minimum the cell
///   nearest the midpoint), zero elsewhere, with the Dirichlet zero
///   edges already enforced.
pub fn initial_field(grid: &Grid1D, regime: &Regime) -> Field {
    match regime {
        Regime::Diffusion { .. } | Regime::AdvectionDiffusion { .. } => gaussian_pulse(grid),
        Regime::Heat { .. } => heat_band(grid),
    }
}

/// Gaussian pulse centered at the domain midpoint.
pub fn gaussian_pulse(grid: &Grid1D) -> Field {
    let center = grid.midpoint();
    let sigma = grid.domain_length() * SIGMA_FRACTION;
    let two_sigma_sq = 2.0 * sigma * sigma;
    Field::from_fn(grid.cell_count(), |i| {
        let dx = grid.cell_center(i) - center;
        (-(dx * dx) / two_sigma_sq).exp()
    })
}

/// Localized heat source: a band of `SOURCE_VALUE` around the midpoint.
pub fn heat_band(grid: &Grid1D) -> Field {
    let center = grid.midpoint();
    let half_width = grid.domain_length() * SOURCE_HALF_WIDTH_FRACTION;
    let n = grid.cell_count();

    let mut field = Field::from_fn(n, |i| {
        if (grid.cell_center(i) - center).abs() <= half_width {
            SOURCE_VALUE
        } else {
            0.0
        }
    });

    // Coarse grids can leave every cell center outside the band; the
    // source must still exist, so seed the cell nearest the midpoint.
    if field.total() == 0.0 {
        let nearest = nearest_cell(grid, center);
        field.values_mut()[nearest] = SOURCE_VALUE;
    }

    // Dirichlet zero edges hold from the start.
    apply_zero_value_edges(&mut field);
    field
}

/// Overwrite both edge cells per `ZeroValue` policy.
pub fn apply_zero_value_edges(field: &mut Field) {
    let n = field.len();
    if n == 0 {
        return;
    }
    let values = field.values_mut();
    values[0] = 0.0;
    values[n - 1] = 0.0;
}

fn nearest_cell(grid: &Grid1D, x: f64) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for i in 0..grid.cell_count() {
        let dist = (grid.cell_center(i) - x).abs();
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}
