//! Seven-point Jacobi relaxation with ghost-point reflection.
//!
//! One routine covers every relaxed cell. Each axis resolves its own
//! `(lower, upper)` neighbour pair through
//! [`AxisBoundary::neighbours`](poisson_core::AxisBoundary::neighbours):
//! interior cells get their true neighbours, cells on an open face get the
//! reflected ghost on that axis, and cells on an open edge get reflected
//! ghosts on both y and z. Cells on a closed x-face resolve to `None` and
//! are left to the Dirichlet stamp.
//!
//! ```text
//! next[p] = (c[x+1] + c[x-1] + c[y+1] + c[y-1] + c[z+1] + c[z-1] - δ²·s[p]) / 6
//! ```
//!
//! All reads come from `current`; nothing written in the same sweep is read
//! back, so cells may be relaxed in any order.

use poisson_core::{Axis, Cube};

/// Relaxed value of `(x, y, z)` computed from `current`, or `None` if the
/// cell lies on a closed face.
#[inline]
pub fn relax_cell(
    cube: &Cube,
    current: &[f64],
    source: &[f64],
    delta_sq: f64,
    x: usize,
    y: usize,
    z: usize,
) -> Option<f64> {
    let n = cube.edge();
    let (x_lo, x_hi) = Axis::X.boundary().neighbours(x, n)?;
    let (y_lo, y_hi) = Axis::Y.boundary().neighbours(y, n)?;
    let (z_lo, z_hi) = Axis::Z.boundary().neighbours(z, n)?;

    let sum = current[cube.index(x_hi, y, z)]
        + current[cube.index(x_lo, y, z)]
        + current[cube.index(x, y_hi, z)]
        + current[cube.index(x, y_lo, z)]
        + current[cube.index(x, y, z_hi)]
        + current[cube.index(x, y, z_lo)];

    Some((sum - delta_sq * source[cube.index(x, y, z)]) / 6.0)
}

/// Relax every non-closed cell of z-slab `z` into `slab`.
///
/// `slab` is the `N * N` run of the next buffer holding that slab; cells on
/// the closed faces are not written.
pub fn relax_slab(
    cube: &Cube,
    current: &[f64],
    source: &[f64],
    delta_sq: f64,
    z: usize,
    slab: &mut [f64],
) {
    let n = cube.edge();
    debug_assert_eq!(slab.len(), cube.slab_len());
    for (y, row) in slab.chunks_exact_mut(n).enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            if let Some(v) = relax_cell(cube, current, source, delta_sq, x, y, z) {
                *cell = v;
            }
        }
    }
}
