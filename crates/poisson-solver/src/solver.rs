//! Iteration controller for a single solve.
//!
//! [`Solver`] owns the two state buffers and the worker pool for one solve
//! and advances through
//!
//! ```text
//! Initializing ──▶ Sweeping(0) ──▶ … ──▶ Sweeping(iterations-1) ──▶ Done
//!      │                                                             ▲
//!      └──────────────────── iterations == 0 ────────────────────────┘
//! ```
//!
//! Each `Sweeping(k)` step relaxes every open cell from current into next,
//! re-stamps the closed faces of next, and swaps the buffers.
//!
//! # Ownership model
//!
//! The source field is borrowed for the lifetime of the solver and never
//! written. The solver exclusively owns both state buffers; [`Solver::run`]
//! consumes the solver, returns the final current buffer inside a
//! [`Solution`] and drops the other.

use std::time::Instant;

use log::{debug, info, trace};
use poisson_buffer::PingPongBuffer;
use poisson_core::Cube;

use crate::config::SolverConfig;
use crate::error::SolveError;
use crate::metrics::SolveMetrics;
use crate::solution::Solution;
use crate::stamp::stamp_closed_faces;
use crate::sweep::SweepExecutor;

/// Where a solver is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolvePhase {
    /// Buffers are allocated and both carry the closed-face values.
    Initializing,
    /// Sweep `k` runs on the next [`Solver::step`]; `k` sweeps have completed.
    Sweeping(u32),
    /// All sweeps have completed.
    Done,
}

/// A Jacobi relaxation solve in progress.
///
/// # Example
///
/// ```
/// use poisson_solver::{SolverConfig, Solver};
///
/// let config = SolverConfig { n: 3, iterations: 1, ..Default::default() };
/// let source = vec![0.0; 27];
/// let solution = Solver::new(config, &source).unwrap().run();
/// assert!((solution.get(1, 1, 1) + 1.0 / 6.0).abs() < 1e-12);
/// ```
pub struct Solver<'s> {
    config: SolverConfig,
    cube: Cube,
    source: &'s [f64],
    buffers: PingPongBuffer,
    executor: SweepExecutor,
    phase: SolvePhase,
    delta_sq: f64,
    metrics: SolveMetrics,
    started: Instant,
}

impl<'s> Solver<'s> {
    /// Validate `config`, allocate both state buffers and stamp the closed
    /// faces into each.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] if the configuration is invalid, `source` does
    /// not have `n³` cells, the buffers cannot be allocated, or the worker
    /// pool cannot be started. No state is retained on error.
    pub fn new(config: SolverConfig, source: &'s [f64]) -> Result<Self, SolveError> {
        let started = Instant::now();
        let cube = config.validate()?;
        if source.len() != cube.cell_count() {
            return Err(SolveError::SourceLength {
                expected: cube.cell_count(),
                actual: source.len(),
            });
        }

        if config.debug {
            info!(
                "starting solver with n = {}, iterations = {}, threads = {}, delta = {}",
                config.n, config.iterations, config.threads, config.delta
            );
        }

        let mut buffers = PingPongBuffer::new(cube.cell_count())?;
        for buf in buffers.both_mut() {
            stamp_closed_faces(&cube, &config.boundary, buf);
        }

        let executor = SweepExecutor::new(config.resolved_threads())?;
        let metrics = SolveMetrics {
            setup_us: started.elapsed().as_micros() as u64,
            memory_bytes: buffers.memory_bytes(),
            threads: executor.threads(),
            ..Default::default()
        };
        debug!(
            "allocated {} bytes for {} cells, {} worker(s)",
            metrics.memory_bytes,
            cube.cell_count(),
            metrics.threads
        );

        Ok(Self {
            delta_sq: config.delta * config.delta,
            config,
            cube,
            source,
            buffers,
            executor,
            phase: SolvePhase::Initializing,
            metrics,
            started,
        })
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SolvePhase {
        self.phase
    }

    /// The validated cube.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Number of sweeps completed so far.
    pub fn sweeps_completed(&self) -> u64 {
        self.buffers.generation()
    }

    /// The most recently completed state.
    pub fn current(&self) -> &[f64] {
        self.buffers.current()
    }

    /// Metrics collected so far.
    pub fn metrics(&self) -> &SolveMetrics {
        &self.metrics
    }

    /// Advance the lifecycle by one transition and return the new phase.
    ///
    /// Leaving `Initializing` performs no work. Each `Sweeping(k)` step runs
    /// one full sweep. Calling `step` in `Done` is a no-op.
    pub fn step(&mut self) -> SolvePhase {
        self.phase = match self.phase {
            SolvePhase::Initializing => self.phase_after(0),
            SolvePhase::Sweeping(k) => {
                self.sweep(k);
                self.phase_after(k + 1)
            }
            SolvePhase::Done => SolvePhase::Done,
        };
        self.phase
    }

    /// Run all remaining sweeps and return the solution.
    pub fn run(mut self) -> Solution {
        while self.step() != SolvePhase::Done {}
        self.metrics.total_us = self.started.elapsed().as_micros() as u64;
        if self.config.debug {
            info!(
                "finished solving: {} sweep(s) in {} us (mean {} us/sweep, {} worker(s))",
                self.metrics.sweeps,
                self.metrics.total_us,
                self.metrics.mean_sweep_us(),
                self.metrics.threads
            );
        }
        Solution::new(self.cube, self.buffers.into_current(), self.metrics)
    }

    fn phase_after(&self, completed: u32) -> SolvePhase {
        if completed < self.config.iterations {
            SolvePhase::Sweeping(completed)
        } else {
            SolvePhase::Done
        }
    }

    fn sweep(&mut self, k: u32) {
        let t = Instant::now();
        let (current, next) = self.buffers.split();
        self.executor
            .relax(&self.cube, current, self.source, self.delta_sq, next);
        stamp_closed_faces(&self.cube, &self.config.boundary, next);
        self.buffers.swap();

        let us = t.elapsed().as_micros() as u64;
        self.metrics.record_sweep(us);
        trace!("sweep {k} done in {us} us");
    }
}

impl std::fmt::Debug for Solver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("n", &self.cube.edge())
            .field("phase", &self.phase)
            .field("sweeps_completed", &self.buffers.generation())
            .field("threads", &self.metrics.threads)
            .finish()
    }
}
