//! Solver configuration and validation.
//!
//! [`SolverConfig`] is the builder-input for a solve. It is validated once
//! by [`validate()`](SolverConfig::validate), which also yields the
//! [`Cube`] the solve runs on; nothing downstream re-checks these values.

use poisson_core::{BoundaryValues, ConfigError, Cube};

/// Parameters of a single solve.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Cube edge length. Must be odd and positive. Default: 5.
    pub n: usize,
    /// Number of Jacobi sweeps. Zero returns the boundary-stamped field.
    /// Default: 10.
    pub iterations: u32,
    /// Worker thread hint. Must be at least 1. Default: 1.
    pub threads: usize,
    /// Grid spacing δ. Must be finite and positive. Default: 1.0.
    pub delta: f64,
    /// Emit status reports before and after the solve. Default: false.
    pub debug: bool,
    /// Dirichlet values on the closed x-faces.
    pub boundary: BoundaryValues,
}

impl SolverConfig {
    /// Default cube edge length.
    pub const DEFAULT_N: usize = 5;

    /// Default number of sweeps.
    pub const DEFAULT_ITERATIONS: u32 = 10;

    /// Upper bound applied to the thread hint.
    pub const MAX_THREADS: usize = 256;

    /// Check every parameter and return the validated cube.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `n` is zero, even, or `n³` overflows
    /// - `threads` is zero
    /// - `delta` is NaN, infinite, zero, or negative
    /// - either boundary value is not finite
    pub fn validate(&self) -> Result<Cube, ConfigError> {
        let cube = Cube::new(self.n)?;
        if self.threads == 0 {
            return Err(ConfigError::InvalidThreads {
                threads: self.threads,
            });
        }
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(ConfigError::InvalidSpacing { value: self.delta });
        }
        self.boundary.validate()?;
        Ok(cube)
    }

    /// Number of workers actually used, clamped to `[1, MAX_THREADS]`.
    pub fn resolved_threads(&self) -> usize {
        self.threads.clamp(1, Self::MAX_THREADS)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            n: Self::DEFAULT_N,
            iterations: Self::DEFAULT_ITERATIONS,
            threads: 1,
            delta: 1.0,
            debug: false,
            boundary: BoundaryValues::default(),
        }
    }
}
