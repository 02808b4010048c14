//! Fallible zero-initialised allocation.

use crate::error::BufferError;

/// Allocate `len` zeroed `f64` cells.
///
/// Uses `try_reserve_exact` so that an oversized request surfaces as
/// `Err(BufferError::AllocationFailed)` rather than an allocator abort.
pub fn zeroed(len: usize) -> Result<Vec<f64>, BufferError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| BufferError::AllocationFailed {
            cells: len,
            bytes: len.saturating_mul(std::mem::size_of::<f64>()),
        })?;
    data.resize(len, 0.0);
    Ok(data)
}
