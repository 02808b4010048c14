//! Streaming reader for source-coordinate files.
//!
//! [`SourceReader`] reads `x,y,z,amplitude` entries from any `BufRead`,
//! checking each against the cube as it goes. Blank lines are skipped and
//! do not count as entries.

use std::io::BufRead;

use poisson_core::Cube;

use crate::error::SourceError;

/// One point source: `amplitude` at cell `(x, y, z)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourcePoint {
    /// X coordinate.
    pub x: usize,
    /// Y coordinate.
    pub y: usize,
    /// Z coordinate.
    pub z: usize,
    /// Source value written at the cell.
    pub amplitude: f64,
}

impl SourcePoint {
    /// Parse one `x,y,z,amplitude` line, numbered `item`, against `cube`.
    ///
    /// Whitespace may precede each field and follow the amplitude; a comma
    /// must follow its number directly.
    pub fn parse(line: &str, item: usize, cube: &Cube) -> Result<Self, SourceError> {
        let format_err = || SourceError::Format {
            item,
            line: line.to_string(),
        };
        let mut fields = line.split(',');
        let mut coord = || -> Option<i64> { fields.next()?.trim_start().parse().ok() };
        let (x, y, z) = match (coord(), coord(), coord()) {
            (Some(x), Some(y), Some(z)) => (x, y, z),
            _ => return Err(format_err()),
        };
        let amplitude: f64 = fields
            .next()
            .and_then(|f| f.trim().parse().ok())
            .ok_or_else(format_err)?;
        if fields.next().is_some() {
            return Err(format_err());
        }

        if !cube.contains(x, y, z) {
            return Err(SourceError::OutOfRange {
                item,
                coord: (x, y, z),
                n: cube.edge(),
            });
        }
        Ok(Self {
            x: x as usize,
            y: y as usize,
            z: z as usize,
            amplitude,
        })
    }
}

/// Reads source points from a byte stream.
///
/// Generic over `R: BufRead` so tests can use `&[u8]` and production code
/// can use `BufReader<File>`. Iteration stops after the first error. A line
/// that is not valid UTF-8 is a format error at that item.
pub struct SourceReader<R: BufRead> {
    reader: R,
    cube: Cube,
    line: Vec<u8>,
    items_read: usize,
    done: bool,
}

impl<R: BufRead> SourceReader<R> {
    /// Read entries for a cube of the given shape.
    pub fn new(reader: R, cube: Cube) -> Self {
        Self {
            reader,
            cube,
            line: Vec::new(),
            items_read: 0,
            done: false,
        }
    }

    /// Read the next entry, or `None` at end of input.
    pub fn next_point(&mut self) -> Result<Option<SourcePoint>, SourceError> {
        loop {
            self.line.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut self.line)
                .map_err(|error| SourceError::Io { path: None, error })?;
            if read == 0 {
                return Ok(None);
            }
            if self.line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            self.items_read += 1;
            let item = self.items_read;
            let line = std::str::from_utf8(&self.line).map_err(|_| SourceError::Format {
                item,
                line: String::from_utf8_lossy(&self.line).trim().to_string(),
            })?;
            return SourcePoint::parse(line.trim(), item, &self.cube).map(Some);
        }
    }

    /// Number of non-blank entries read so far.
    pub fn items_read(&self) -> usize {
        self.items_read
    }
}

impl<R: BufRead> Iterator for SourceReader<R> {
    type Item = Result<SourcePoint, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_point() {
            Ok(Some(point)) => Some(Ok(point)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
