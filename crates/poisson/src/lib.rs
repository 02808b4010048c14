//! Poisson: a Jacobi relaxation solver for the 3D Poisson equation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Poisson sub-crates. For most users, adding `poisson` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use poisson::prelude::*;
//!
//! let config = SolverConfig { n: 7, iterations: 50, ..Default::default() };
//! let cube = config.validate().unwrap();
//! let source = populate_source(&cube, None, &SourceDefaults::default()).unwrap();
//!
//! let solution = solve(&config, &source).unwrap();
//! assert_eq!(solution.get(0, 3, 3), BoundaryValues::DEFAULT_LOW);
//! assert_eq!(solution.get(6, 3, 3), BoundaryValues::DEFAULT_HIGH);
//! assert_eq!(solution.middle_slice().count(), 7);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `poisson-core` | Cube geometry, axis boundaries, configuration errors |
//! | [`buffer`] | `poisson-buffer` | Fallible allocation and ping-pong state buffers |
//! | [`solver`] | `poisson-solver` | Configuration, stencil, sweeps, iteration controller |
//! | [`source`] | `poisson-source` | Source-coordinate files and source fields |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cube geometry and boundary classification (`poisson-core`).
pub use poisson_core as types;

/// State buffer storage (`poisson-buffer`).
pub use poisson_buffer as buffer;

/// The relaxation solver (`poisson-solver`).
///
/// [`solver::run_poisson`] is the one-call entry point;
/// [`solver::Solver`] exposes the lifecycle step by step.
pub use poisson_solver as solver;

/// Source-coordinate reading (`poisson-source`).
pub use poisson_source as source;

/// Common imports for typical usage.
///
/// ```rust
/// use poisson::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use poisson_core::{Axis, AxisBoundary, BoundaryValues, Cube};

    // Solver
    pub use poisson_solver::{
        run_poisson, solve, Solution, SolveMetrics, SolvePhase, Solver, SolverConfig,
    };

    // Source
    pub use poisson_source::{populate_source, SourceDefaults, SourcePoint, SourceReader};

    // Errors
    pub use poisson_buffer::BufferError;
    pub use poisson_core::ConfigError;
    pub use poisson_solver::SolveError;
    pub use poisson_source::SourceError;
}
