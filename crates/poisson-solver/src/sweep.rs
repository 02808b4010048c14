//! Sweep dispatch across z-slabs.
//!
//! Every cell of a sweep depends only on the previous state, so the next
//! buffer is split into disjoint z-slabs (`N * N` contiguous cells each)
//! and the slabs are relaxed independently. With more than one worker the
//! slabs are handed to a dedicated rayon pool; the pool's join at the end
//! of [`SweepExecutor::relax`] is the barrier between sweeps.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use poisson_core::Cube;

use crate::error::SolveError;
use crate::stencil::relax_slab;

/// Runs the relaxation kernel over all slabs of a sweep.
#[derive(Debug)]
pub enum SweepExecutor {
    /// Relax slabs one after another on the calling thread.
    Sequential,
    /// Relax slabs on a fixed pool of workers.
    Pool(ThreadPool),
}

impl SweepExecutor {
    /// Build an executor with `threads` workers.
    ///
    /// A single worker runs on the calling thread without a pool.
    pub fn new(threads: usize) -> Result<Self, SolveError> {
        if threads <= 1 {
            return Ok(Self::Sequential);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("poisson-worker-{i}"))
            .build()
            .map_err(|e| SolveError::ThreadPool {
                reason: e.to_string(),
            })?;
        Ok(Self::Pool(pool))
    }

    /// Number of workers relaxing slabs.
    pub fn threads(&self) -> usize {
        match self {
            Self::Sequential => 1,
            Self::Pool(pool) => pool.current_num_threads(),
        }
    }

    /// Relax every non-closed cell of `next` from `current`.
    ///
    /// Returns only after every slab has been written.
    pub fn relax(
        &self,
        cube: &Cube,
        current: &[f64],
        source: &[f64],
        delta_sq: f64,
        next: &mut [f64],
    ) {
        let slab_len = cube.slab_len();
        match self {
            Self::Sequential => {
                for (z, slab) in next.chunks_exact_mut(slab_len).enumerate() {
                    relax_slab(cube, current, source, delta_sq, z, slab);
                }
            }
            Self::Pool(pool) => pool.install(|| {
                next.par_chunks_exact_mut(slab_len)
                    .enumerate()
                    .for_each(|(z, slab)| relax_slab(cube, current, source, delta_sq, z, slab));
            }),
        }
    }
}
