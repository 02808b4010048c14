//! Building the source field.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;
use poisson_buffer::zeroed;
use poisson_core::Cube;

use crate::error::SourceError;
use crate::reader::{SourcePoint, SourceReader};

/// The point source used when no coordinate file is given.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceDefaults {
    /// Amplitude of the default point. Default: 1.0.
    pub amplitude: f64,
    /// Cell of the default point; `None` means the cube centre.
    pub position: Option<(usize, usize, usize)>,
}

impl SourceDefaults {
    /// Default amplitude.
    pub const DEFAULT_AMPLITUDE: f64 = 1.0;
}

impl Default for SourceDefaults {
    fn default() -> Self {
        Self {
            amplitude: Self::DEFAULT_AMPLITUDE,
            position: None,
        }
    }
}

/// Read every entry from `reader`, failing on the first bad one.
///
/// Input with no entries at all is a format error at item 1.
pub fn load_points<R: BufRead>(reader: R, cube: &Cube) -> Result<Vec<SourcePoint>, SourceError> {
    let points: Vec<SourcePoint> = SourceReader::new(reader, *cube).collect::<Result<_, _>>()?;
    if points.is_empty() {
        return Err(SourceError::Format {
            item: 1,
            line: String::new(),
        });
    }
    Ok(points)
}

/// Write each point's amplitude into `field`; later points overwrite
/// earlier ones at the same cell.
pub fn apply_points(cube: &Cube, field: &mut [f64], points: &[SourcePoint]) {
    for p in points {
        field[cube.index(p.x, p.y, p.z)] = p.amplitude;
    }
}

/// An opened source-coordinate file.
///
/// Opening is separate from reading so a missing file is reported before
/// the cube shape is known.
#[derive(Debug)]
pub struct SourceFile {
    path: PathBuf,
    reader: BufReader<File>,
}

impl SourceFile {
    /// Open `path` for reading.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(|error| SourceError::Io {
            path: Some(path.to_path_buf()),
            error,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
        })
    }

    /// Path the file was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry against `cube`.
    pub fn read_points(self, cube: &Cube) -> Result<Vec<SourcePoint>, SourceError> {
        let Self { path, reader } = self;
        let points = load_points(reader, cube).map_err(|e| match e {
            SourceError::Io { path: None, error } => SourceError::Io {
                path: Some(path.clone()),
                error,
            },
            other => other,
        })?;
        debug!("read {} source point(s) from {}", points.len(), path.display());
        Ok(points)
    }
}

/// Build the `N³` source field from an opened file, or from the default
/// point when there is none.
///
/// # Errors
///
/// Returns [`SourceError::Io`] if the file cannot be read,
/// [`SourceError::Format`] for a bad entry or a file with no entries,
/// [`SourceError::OutOfRange`] for a coordinate outside the cube (or an
/// out-of-range default position), and [`SourceError::Buffer`] if the field
/// cannot be allocated.
pub fn build_source(
    cube: &Cube,
    file: Option<SourceFile>,
    defaults: &SourceDefaults,
) -> Result<Vec<f64>, SourceError> {
    let points = match file {
        Some(file) => file.read_points(cube)?,
        None => vec![default_point(cube, defaults)?],
    };
    let mut field = zeroed(cube.cell_count())?;
    apply_points(cube, &mut field, &points);
    Ok(field)
}

/// Build the `N³` source field.
///
/// With a `path`, every entry of that file is applied to a zeroed field.
/// Without one, the field is zero except for the default point.
///
/// # Errors
///
/// As [`build_source`], plus [`SourceError::Io`] if the file cannot be
/// opened.
pub fn populate_source(
    cube: &Cube,
    path: Option<&Path>,
    defaults: &SourceDefaults,
) -> Result<Vec<f64>, SourceError> {
    let file = path.map(SourceFile::open).transpose()?;
    build_source(cube, file, defaults)
}

fn default_point(cube: &Cube, defaults: &SourceDefaults) -> Result<SourcePoint, SourceError> {
    let (x, y, z) = defaults.position.unwrap_or_else(|| cube.center());
    if x >= cube.edge() || y >= cube.edge() || z >= cube.edge() {
        return Err(SourceError::OutOfRange {
            item: 0,
            coord: (x as i64, y as i64, z as i64),
            n: cube.edge(),
        });
    }
    Ok(SourcePoint {
        x,
        y,
        z,
        amplitude: defaults.amplitude,
    })
}
