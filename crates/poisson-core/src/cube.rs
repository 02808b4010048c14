//! Odd-edged cubic lattice with flat `(z*N + y)*N + x` addressing.

use crate::error::ConfigError;

/// An `N x N x N` lattice with odd `N`.
///
/// Cells are stored in one contiguous buffer, x varying fastest:
/// `index(x, y, z) = (z * N + y) * N + x`. A z-slab (`N * N` cells) is
/// therefore a contiguous run, which is the unit of parallel work.
///
/// # Examples
///
/// ```
/// use poisson_core::Cube;
///
/// let cube = Cube::new(5).unwrap();
/// assert_eq!(cube.cell_count(), 125);
/// assert_eq!(cube.index(1, 2, 3), (3 * 5 + 2) * 5 + 1);
/// assert_eq!(cube.center(), (2, 2, 2));
/// assert!(Cube::new(4).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    n: usize,
}

impl Cube {
    /// Create a cube of edge `n`.
    ///
    /// Returns `Err(ConfigError::EmptyCube)` for `n == 0`,
    /// `Err(ConfigError::EvenEdge)` for even `n`, and
    /// `Err(ConfigError::CellCountOverflow)` if `n³` overflows `usize`.
    pub fn new(n: usize) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::EmptyCube);
        }
        if n % 2 == 0 {
            return Err(ConfigError::EvenEdge { n });
        }
        n.checked_mul(n)
            .and_then(|sq| sq.checked_mul(n))
            .ok_or(ConfigError::CellCountOverflow { n })?;
        Ok(Self { n })
    }

    /// Edge length `N`.
    #[inline]
    pub fn edge(&self) -> usize {
        self.n
    }

    /// Total number of cells, `N³`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.n * self.n * self.n
    }

    /// Number of cells in one z-slab, `N²`.
    #[inline]
    pub fn slab_len(&self) -> usize {
        self.n * self.n
    }

    /// Flat index of `(x, y, z)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.n && y < self.n && z < self.n);
        (z * self.n + y) * self.n + x
    }

    /// Geometric centre `(N/2, N/2, N/2)` using integer division.
    pub fn center(&self) -> (usize, usize, usize) {
        let c = self.n / 2;
        (c, c, c)
    }

    /// Whether signed coordinates lie inside `[0, N - 1]` on every axis.
    pub fn contains(&self, x: i64, y: i64, z: i64) -> bool {
        let n = self.n as i64;
        [x, y, z].iter().all(|&c| (0..n).contains(&c))
    }
}
