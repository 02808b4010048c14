//! Configuration errors for the Poisson solver.
//!
//! Every variant is detected before any solver state exists; a solve that
//! passes validation never fails for configuration reasons afterwards.

use std::error::Error;
use std::fmt;

/// Errors detected while validating solver or grid parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The cube edge length is zero.
    EmptyCube,
    /// The cube edge length is even; only odd edges have a centre cell.
    EvenEdge {
        /// The rejected edge length.
        n: usize,
    },
    /// `n³` does not fit in `usize`.
    CellCountOverflow {
        /// The edge length whose cube overflowed.
        n: usize,
    },
    /// The worker thread hint is zero.
    InvalidThreads {
        /// The rejected thread count.
        threads: usize,
    },
    /// The grid spacing is NaN, infinite, zero, or negative.
    InvalidSpacing {
        /// The rejected spacing.
        value: f64,
    },
    /// A Dirichlet boundary value is NaN or infinite.
    InvalidBoundaryValue {
        /// Which face the value belongs to (`"low"` or `"high"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCube => write!(f, "n must be at least 1"),
            Self::EvenEdge { n } => write!(f, "n should be an odd number (got {n})"),
            Self::CellCountOverflow { n } => {
                write!(f, "cell count {n}^3 exceeds usize::MAX")
            }
            Self::InvalidThreads { threads } => {
                write!(f, "threads must be at least 1 (got {threads})")
            }
            Self::InvalidSpacing { value } => {
                write!(f, "grid spacing must be finite and positive, got {value}")
            }
            Self::InvalidBoundaryValue { name, value } => {
                write!(f, "{name} boundary value must be finite, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
