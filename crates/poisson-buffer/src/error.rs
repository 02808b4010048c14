//! Buffer-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while allocating solver storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The allocator could not provide a zeroed buffer of the requested size.
    AllocationFailed {
        /// Number of `f64` cells requested.
        cells: usize,
        /// Number of bytes requested (saturating).
        bytes: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { cells, bytes } => {
                write!(
                    f,
                    "ran out of memory allocating {cells} cells ({bytes} bytes)"
                )
            }
        }
    }
}

impl Error for BufferError {}
