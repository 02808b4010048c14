//! Error types for reading source-coordinate files.

use std::fmt;
use std::io;
use std::path::PathBuf;

use poisson_buffer::BufferError;

/// Errors that can occur while building a source field.
#[derive(Debug)]
pub enum SourceError {
    /// The source file could not be opened or read.
    Io {
        /// File being read, if the input came from a path.
        path: Option<PathBuf>,
        /// Underlying I/O error.
        error: io::Error,
    },
    /// An entry is not of the form `x,y,z,amplitude`.
    Format {
        /// 1-based entry number.
        item: usize,
        /// The offending line, without its terminator.
        line: String,
    },
    /// An entry names a cell outside the cube.
    OutOfRange {
        /// 1-based entry number; 0 for the default point.
        item: usize,
        /// Coordinates as written.
        coord: (i64, i64, i64),
        /// Cube edge length.
        n: usize,
    },
    /// The source field could not be allocated.
    Buffer(BufferError),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path: Some(path),
                error,
            } => write!(
                f,
                "could not read source coordinate file {}: {error}",
                path.display()
            ),
            Self::Io { path: None, error } => {
                write!(f, "could not read source coordinates: {error}")
            }
            Self::Format { item, line } => write!(
                f,
                "incorrect format for source coordinates (item {item}): {line:?}"
            ),
            Self::OutOfRange { item, coord, n } => write!(
                f,
                "coordinates ({}, {}, {}) out of range for n = {n} (item {item})",
                coord.0, coord.1, coord.2
            ),
            Self::Buffer(e) => write!(f, "source field: {e}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { error, .. } => Some(error),
            Self::Buffer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BufferError> for SourceError {
    fn from(e: BufferError) -> Self {
        Self::Buffer(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_names_the_item() {
        let e = SourceError::Format {
            item: 3,
            line: "1,2".into(),
        };
        assert!(e.to_string().contains("item 3"));
        let e = SourceError::OutOfRange {
            item: 2,
            coord: (-1, 0, 0),
            n: 5,
        };
        assert!(e.to_string().contains("(-1, 0, 0)"));
    }

    #[test]
    fn io_error_chains_source() {
        let e = SourceError::Io {
            path: Some(PathBuf::from("missing.txt")),
            error: io::Error::new(io::ErrorKind::NotFound, "nope"),
        };
        assert!(e.to_string().contains("missing.txt"));
        assert!(e.source().is_some());
    }
}
