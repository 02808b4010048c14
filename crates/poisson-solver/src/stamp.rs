//! Dirichlet stamping of the closed x-faces.

use poisson_core::{BoundaryValues, Cube};

/// Write `values.low` at `x = 0` and `values.high` at `x = N - 1` for every
/// `(y, z)` row of `field`.
///
/// Rows are contiguous in the flat layout, so each row is one chunk of `N`
/// cells. With `N = 1` both faces are the same cell and the high value is
/// written last.
pub fn stamp_closed_faces(cube: &Cube, values: &BoundaryValues, field: &mut [f64]) {
    let n = cube.edge();
    debug_assert_eq!(field.len(), cube.cell_count());
    for row in field.chunks_exact_mut(n) {
        row[0] = values.low;
        row[n - 1] = values.high;
    }
}
