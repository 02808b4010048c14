//! Double-buffered ping-pong storage.
//!
//! [`PingPongBuffer`] owns two equally sized `f64` buffers. One is
//! "current" (the completed state of the last sweep, read-only during a
//! sweep) and the other is "next" (written by the sweep). On
//! [`PingPongBuffer::swap`] the roles are exchanged in O(1).
//!
//! The lifecycle per sweep is:
//! 1. `split()` borrows current for reading and next for writing
//! 2. the sweep writes every relaxed cell of next
//! 3. `swap()` makes next the new current and advances the generation

use crate::alloc::zeroed;
use crate::error::BufferError;

/// Two owned buffers with alternating current/next roles.
///
/// # Examples
///
/// ```
/// use poisson_buffer::PingPongBuffer;
///
/// let mut buf = PingPongBuffer::new(4).unwrap();
/// {
///     let (current, next) = buf.split();
///     next[0] = current[0] + 1.0;
/// }
/// buf.swap();
/// assert_eq!(buf.current()[0], 1.0);
/// assert_eq!(buf.generation(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct PingPongBuffer {
    /// Buffer A (next while `b_is_next` is false).
    buffer_a: Vec<f64>,
    /// Buffer B (current while `b_is_next` is false).
    buffer_b: Vec<f64>,
    /// Which buffer is currently next (false = A next, true = B next).
    b_is_next: bool,
    /// Number of swaps performed since construction.
    generation: u64,
}

impl PingPongBuffer {
    /// Allocate two zero-filled buffers of `len` cells each.
    ///
    /// Returns `Err(BufferError::AllocationFailed)` if either allocation
    /// fails; nothing is retained in that case.
    pub fn new(len: usize) -> Result<Self, BufferError> {
        let buffer_a = zeroed(len)?;
        let buffer_b = zeroed(len)?;
        Ok(Self {
            buffer_a,
            buffer_b,
            b_is_next: false,
            generation: 0,
        })
    }

    /// Number of cells in each buffer.
    pub fn len(&self) -> usize {
        self.buffer_a.len()
    }

    /// Whether the buffers hold no cells.
    pub fn is_empty(&self) -> bool {
        self.buffer_a.is_empty()
    }

    /// Number of completed swaps.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Total bytes held by both buffers.
    pub fn memory_bytes(&self) -> usize {
        2 * self.len() * std::mem::size_of::<f64>()
    }

    /// The current (most recently completed) state.
    pub fn current(&self) -> &[f64] {
        if self.b_is_next {
            &self.buffer_a
        } else {
            &self.buffer_b
        }
    }

    /// Mutable access to the next (in-progress) state.
    pub fn next_mut(&mut self) -> &mut [f64] {
        if self.b_is_next {
            &mut self.buffer_b
        } else {
            &mut self.buffer_a
        }
    }

    /// Borrow current for reading and next for writing at the same time.
    pub fn split(&mut self) -> (&[f64], &mut [f64]) {
        if self.b_is_next {
            (&self.buffer_a, &mut self.buffer_b)
        } else {
            (&self.buffer_b, &mut self.buffer_a)
        }
    }

    /// Mutable access to both buffers, regardless of role.
    ///
    /// Used to stamp values that must agree in both buffers before the
    /// first sweep.
    pub fn both_mut(&mut self) -> [&mut [f64]; 2] {
        [&mut self.buffer_a, &mut self.buffer_b]
    }

    /// Exchange the current and next roles. No cell data is copied.
    pub fn swap(&mut self) {
        self.b_is_next = !self.b_is_next;
        self.generation += 1;
    }

    /// Consume the pair, keeping the current buffer and releasing the other.
    pub fn into_current(self) -> Vec<f64> {
        if self.b_is_next {
            self.buffer_a
        } else {
            self.buffer_b
        }
    }
}
