//! Per-solve performance metrics.
//!
//! [`SolveMetrics`] captures timing and memory data for one solve. The
//! solver updates it after every sweep; it is handed back with the
//! [`Solution`](crate::Solution) and reported in debug mode.

/// Timing and memory metrics collected during a solve.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolveMetrics {
    /// Wall-clock time from solver construction to completion.
    pub total_us: u64,
    /// Time spent allocating and stamping the state buffers.
    pub setup_us: u64,
    /// Number of sweeps executed.
    pub sweeps: u32,
    /// Sum of all sweep durations.
    pub sweep_total_us: u64,
    /// Longest single sweep.
    pub max_sweep_us: u64,
    /// Bytes held by both state buffers.
    pub memory_bytes: usize,
    /// Number of workers used per sweep.
    pub threads: usize,
}

impl SolveMetrics {
    /// Record one completed sweep.
    pub fn record_sweep(&mut self, us: u64) {
        self.sweeps += 1;
        self.sweep_total_us += us;
        self.max_sweep_us = self.max_sweep_us.max(us);
    }

    /// Mean sweep duration, or 0 if no sweep ran.
    pub fn mean_sweep_us(&self) -> u64 {
        if self.sweeps == 0 {
            0
        } else {
            self.sweep_total_us / self.sweeps as u64
        }
    }
}
