//! Deterministic source-field fixtures.

use poisson_core::Cube;

/// One splitmix64 step.
#[inline]
pub fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// All-zero source for `cube`.
pub fn zero_source(cube: &Cube) -> Vec<f64> {
    vec![0.0; cube.cell_count()]
}

/// Zero source with `amplitude` at `(x, y, z)`.
pub fn point_source(cube: &Cube, x: usize, y: usize, z: usize, amplitude: f64) -> Vec<f64> {
    let mut source = zero_source(cube);
    source[cube.index(x, y, z)] = amplitude;
    source
}

/// Pseudo-random source with values in `[-1, 1)`, fully determined by `seed`.
pub fn hashed_source(cube: &Cube, seed: u64) -> Vec<f64> {
    (0..cube.cell_count() as u64)
        .map(|i| {
            let h = splitmix64(seed ^ i.wrapping_mul(0xD1B54A32D192ED03));
            (h >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
        })
        .collect()
}

/// Copy of `field` with the y and z axes exchanged.
pub fn swap_yz(cube: &Cube, field: &[f64]) -> Vec<f64> {
    let n = cube.edge();
    let mut out = vec![0.0; field.len()];
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                out[cube.index(x, z, y)] = field[cube.index(x, y, z)];
            }
        }
    }
    out
}
