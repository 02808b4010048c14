//! Jacobi relaxation solver for the 3D Poisson equation on an odd-edged cube.
//!
//! The potential field is held in two equally sized buffers. Each sweep
//! computes every non-closed cell of the next buffer from the six
//! neighbours of the current buffer and the source term:
//!
//! ```text
//! next = (Σ six neighbours − δ² · source) / 6
//! ```
//!
//! The x-faces are closed and re-stamped with fixed values after every
//! sweep; the y- and z-faces are open and use ghost-point reflection, so a
//! missing neighbour is replaced by its mirror image across the face.
//!
//! # Entry points
//!
//! - [`run_poisson`] is the plain one-call interface returning the final
//!   field as a flat `Vec<f64>`.
//! - [`solve`] takes a [`SolverConfig`] and returns a [`Solution`] with
//!   metrics and slice accessors.
//! - [`Solver`] exposes the individual lifecycle steps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod solution;
pub mod solver;
pub mod stamp;
pub mod stencil;
pub mod sweep;

pub use config::SolverConfig;
pub use error::SolveError;
pub use metrics::SolveMetrics;
pub use solution::Solution;
pub use solver::{SolvePhase, Solver};
pub use stamp::stamp_closed_faces;
pub use stencil::{relax_cell, relax_slab};
pub use sweep::SweepExecutor;

/// Run a full solve described by `config` over `source`.
///
/// # Errors
///
/// See [`Solver::new`].
pub fn solve(config: &SolverConfig, source: &[f64]) -> Result<Solution, SolveError> {
    Ok(Solver::new(config.clone(), source)?.run())
}

/// Relax `iterations` Jacobi sweeps over an `n³` cube and return the final
/// state as a flat array indexed by `(z * n + y) * n + x`.
///
/// `source` is read only. With `iterations == 0` the result is the zero
/// field with the closed faces stamped. `threads` is the number of workers
/// used for each sweep (clamped to [`SolverConfig::MAX_THREADS`]); the
/// result does not depend on it.
///
/// # Errors
///
/// Returns [`SolveError`] if `n` is zero or even, `threads` is zero,
/// `delta` is not a positive finite number, `source.len() != n³`, or the
/// buffers cannot be allocated.
///
/// # Example
///
/// ```
/// let field = poisson_solver::run_poisson(3, &[0.0; 27], 1, 1, 1.0, false).unwrap();
/// assert_eq!(field[0], -2.0);
/// assert_eq!(field[2], 1.0);
/// assert!((field[13] + 1.0 / 6.0).abs() < 1e-12);
/// ```
pub fn run_poisson(
    n: usize,
    source: &[f64],
    iterations: u32,
    threads: usize,
    delta: f64,
    debug: bool,
) -> Result<Vec<f64>, SolveError> {
    let config = SolverConfig {
        n,
        iterations,
        threads,
        delta,
        debug,
        ..Default::default()
    };
    Ok(solve(&config, source)?.into_field())
}
