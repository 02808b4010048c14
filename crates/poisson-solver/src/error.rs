//! Error types for a solve.

use std::error::Error;
use std::fmt;

use poisson_buffer::BufferError;
use poisson_core::ConfigError;

/// Errors that prevent a solve from starting.
///
/// Once [`Solver::new`](crate::Solver::new) succeeds the relaxation loop
/// cannot fail; every variant here is raised during setup.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// The solver configuration is invalid.
    Config(ConfigError),
    /// The state buffers could not be allocated.
    Buffer(BufferError),
    /// The source field does not have `n³` cells.
    SourceLength {
        /// Cell count implied by the configured `n`.
        expected: usize,
        /// Length of the supplied source field.
        actual: usize,
    },
    /// The worker pool could not be started.
    ThreadPool {
        /// Description reported by the pool builder.
        reason: String,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Buffer(e) => write!(f, "buffer: {e}"),
            Self::SourceLength { expected, actual } => {
                write!(
                    f,
                    "source field has {actual} cells, expected {expected}"
                )
            }
            Self::ThreadPool { reason } => write!(f, "worker pool: {reason}"),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Buffer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SolveError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<BufferError> for SolveError {
    fn from(e: BufferError) -> Self {
        Self::Buffer(e)
    }
}
