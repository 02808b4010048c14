//! Benchmark profiles for the Poisson relaxation solver.
//!
//! - [`reference_config`]: the default command-line run scaled to edge `n`
//! - [`stress_config`]: 101³ cube (~1M cells), 100 sweeps
//! - [`centre_source`]: unit point source at the cube centre

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use poisson_core::{ConfigError, Cube};
use poisson_solver::SolverConfig;
use poisson_source::{populate_source, SourceDefaults, SourceError};

/// Edge length of the stress profile.
pub const STRESS_N: usize = 101;

/// Default configuration at edge `n` with `threads` workers and 10 sweeps.
pub fn reference_config(n: usize, threads: usize) -> SolverConfig {
    SolverConfig {
        n,
        threads,
        ..Default::default()
    }
}

/// 101³ cube with 100 sweeps.
pub fn stress_config(threads: usize) -> SolverConfig {
    SolverConfig {
        n: STRESS_N,
        iterations: 100,
        threads,
        ..Default::default()
    }
}

/// Validated cube for `config`.
pub fn cube_for(config: &SolverConfig) -> Result<Cube, ConfigError> {
    config.validate()
}

/// Source field with the default unit point at the centre of `cube`.
pub fn centre_source(cube: &Cube) -> Result<Vec<f64>, SourceError> {
    populate_source(cube, None, &SourceDefaults::default())
}
