//! The solved potential field handed back to the caller.

use poisson_core::Cube;

use crate::metrics::SolveMetrics;

/// Final state of a solve: the potential field plus solve metrics.
///
/// Owns the one state buffer kept at the end of the solve; the other was
/// released when the solver finished.
#[derive(Clone, Debug)]
pub struct Solution {
    cube: Cube,
    field: Vec<f64>,
    metrics: SolveMetrics,
}

impl Solution {
    pub(crate) fn new(cube: Cube, field: Vec<f64>, metrics: SolveMetrics) -> Self {
        debug_assert_eq!(field.len(), cube.cell_count());
        Self {
            cube,
            field,
            metrics,
        }
    }

    /// The cube the field lives on.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Metrics collected during the solve.
    pub fn metrics(&self) -> &SolveMetrics {
        &self.metrics
    }

    /// The flat field, indexed `(z*N + y)*N + x`.
    pub fn field(&self) -> &[f64] {
        &self.field
    }

    /// Value at `(x, y, z)`.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is `>= N`.
    pub fn get(&self, x: usize, y: usize, z: usize) -> f64 {
        let n = self.cube.edge();
        assert!(
            x < n && y < n && z < n,
            "({x}, {y}, {z}) outside cube of edge {n}"
        );
        self.field[self.cube.index(x, y, z)]
    }

    /// Rows (fixed `y`, x varying) of the z-slab at `z`, in increasing `y`.
    ///
    /// # Panics
    ///
    /// Panics if `z >= N`.
    pub fn slice_z(&self, z: usize) -> impl Iterator<Item = &[f64]> + '_ {
        let n = self.cube.edge();
        assert!(z < n, "slab {z} outside cube of edge {n}");
        let start = z * self.cube.slab_len();
        self.field[start..start + self.cube.slab_len()].chunks_exact(n)
    }

    /// Rows of the middle z-slab (`z = N/2`).
    pub fn middle_slice(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.slice_z(self.cube.edge() / 2)
    }

    /// Consume the solution, keeping only the field.
    pub fn into_field(self) -> Vec<f64> {
        self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_slice_yields_rows_of_centre_slab() {
        let cube = Cube::new(3).unwrap();
        let field: Vec<f64> = (0..27).map(f64::from).collect();
        let solution = Solution::new(cube, field, SolveMetrics::default());
        let rows: Vec<Vec<f64>> = solution.middle_slice().map(<[f64]>::to_vec).collect();
        assert_eq!(
            rows,
            vec![
                vec![9.0, 10.0, 11.0],
                vec![12.0, 13.0, 14.0],
                vec![15.0, 16.0, 17.0],
            ]
        );
        assert_eq!(solution.get(2, 1, 1), 14.0);
    }

    fn solution3() -> Solution {
        let cube = Cube::new(3).unwrap();
        Solution::new(cube, vec![0.0; 27], SolveMetrics::default())
    }

    #[test]
    #[should_panic(expected = "outside cube")]
    fn get_rejects_x_past_edge() {
        // (3, 0, 0) would alias (0, 1, 0) in the flat layout.
        solution3().get(3, 0, 0);
    }

    #[test]
    #[should_panic(expected = "outside cube")]
    fn slice_z_rejects_slab_past_edge() {
        let _ = solution3().slice_z(3).count();
    }
}
