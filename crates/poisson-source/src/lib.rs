//! Source terms for the Poisson solver.
//!
//! A source-coordinate file lists point sources, one per line:
//!
//! ```text
//! x,y,z,amplitude
//! 2,2,2,1.0
//! 0,4,1,-0.5
//! ```
//!
//! Coordinates are integers in `[0, N-1]`; the amplitude is any decimal
//! number. [`SourceReader`] streams the entries of such a file and
//! [`populate_source`] builds the flat `N³` source field from a file or,
//! without one, from a single default point.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod populate;
pub mod reader;

pub use error::SourceError;
pub use populate::{
    apply_points, build_source, load_points, populate_source, SourceDefaults, SourceFile,
};
pub use reader::{SourcePoint, SourceReader};
