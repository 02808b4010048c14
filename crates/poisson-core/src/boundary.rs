//! Per-axis boundary classification and ghost-point neighbour resolution.
//!
//! Along each axis a cell has a lower and an upper neighbour. Inside the
//! axis these are simply `c - 1` and `c + 1`. At the two ends the answer
//! depends on the axis' [`AxisBoundary`]:
//!
//! - **Closed** ends hold fixed Dirichlet values and are never relaxed, so
//!   they have no effective neighbours at all.
//! - **Open** ends enforce a zero normal gradient. The neighbour that would
//!   lie outside the cube is a ghost whose value mirrors the first cell in
//!   from the boundary, so both neighbours resolve to that one cell.
//!
//! Interior, face and edge updates all go through [`AxisBoundary::neighbours`];
//! a cell on two open faces simply gets reflected indices on two axes.

/// How an axis treats the cells at its two ends.
///
/// # Examples
///
/// ```
/// use poisson_core::AxisBoundary;
///
/// // Interior cells see their true neighbours regardless of the boundary kind.
/// assert_eq!(AxisBoundary::Open.neighbours(2, 5), Some((1, 3)));
/// assert_eq!(AxisBoundary::Closed.neighbours(2, 5), Some((1, 3)));
///
/// // Open ends reflect: the ghost at -1 mirrors index 1.
/// assert_eq!(AxisBoundary::Open.neighbours(0, 5), Some((1, 1)));
/// assert_eq!(AxisBoundary::Open.neighbours(4, 5), Some((3, 3)));
///
/// // Closed ends are fixed and never relaxed.
/// assert_eq!(AxisBoundary::Closed.neighbours(0, 5), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisBoundary {
    /// Dirichlet: end cells hold a fixed value.
    Closed,
    /// Neumann with zero gradient, enforced by ghost-point reflection.
    Open,
}

impl AxisBoundary {
    /// Effective `(lower, upper)` neighbour coordinates of `c` on an axis of
    /// length `n`, or `None` if the cell at `c` is not relaxed.
    ///
    /// A single-cell open axis has nothing to reflect and also yields `None`.
    #[inline]
    pub fn neighbours(self, c: usize, n: usize) -> Option<(usize, usize)> {
        debug_assert!(c < n, "coordinate {c} outside axis of length {n}");
        let last = n - 1;
        if c > 0 && c < last {
            return Some((c - 1, c + 1));
        }
        match self {
            Self::Closed => None,
            Self::Open if n < 2 => None,
            Self::Open if c == 0 => Some((1, 1)),
            Self::Open => Some((last - 1, last - 1)),
        }
    }
}

/// The three lattice axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Fastest-varying axis in the flat layout; carries the closed faces.
    X,
    /// Middle axis; open at both ends.
    Y,
    /// Slowest-varying axis (one z value per slab); open at both ends.
    Z,
}

impl Axis {
    /// The boundary classification of this axis.
    ///
    /// Only x carries closed (Dirichlet) faces; y and z are always open.
    pub const fn boundary(self) -> AxisBoundary {
        match self {
            Self::X => AxisBoundary::Closed,
            Self::Y | Self::Z => AxisBoundary::Open,
        }
    }
}

/// Fixed Dirichlet values on the two closed x-faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryValues {
    /// Value held on the `x = 0` face. Default: `-2.0`.
    pub low: f64,
    /// Value held on the `x = N - 1` face. Default: `+1.0`.
    pub high: f64,
}

impl BoundaryValues {
    /// Default value on the `x = 0` face.
    pub const DEFAULT_LOW: f64 = -2.0;

    /// Default value on the `x = N - 1` face.
    pub const DEFAULT_HIGH: f64 = 1.0;

    /// Check that both values are finite.
    pub fn validate(&self) -> Result<(), crate::ConfigError> {
        for (name, value) in [("low", self.low), ("high", self.high)] {
            if !value.is_finite() {
                return Err(crate::ConfigError::InvalidBoundaryValue { name, value });
            }
        }
        Ok(())
    }
}

impl Default for BoundaryValues {
    fn default() -> Self {
        Self {
            low: Self::DEFAULT_LOW,
            high: Self::DEFAULT_HIGH,
        }
    }
}
