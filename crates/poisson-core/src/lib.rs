//! Core types for the Poisson relaxation solver.
//!
//! Defines the cubic lattice ([`Cube`]) with its flat `(z*N + y)*N + x`
//! addressing, the per-axis boundary classification ([`Axis`],
//! [`AxisBoundary`]) that drives ghost-point reflection, the Dirichlet
//! values held on the closed faces ([`BoundaryValues`]), and the
//! configuration error type shared by every crate in the workspace.
//!
//! # Boundary layout
//!
//! ```text
//!          z
//!          |   y            x = 0     : closed (Dirichlet, low value)
//!          |  /             x = N - 1 : closed (Dirichlet, high value)
//!          | /              y, z ends : open   (Neumann, ghost reflection)
//!          +------ x
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod cube;
pub mod error;

pub use boundary::{Axis, AxisBoundary, BoundaryValues};
pub use cube::Cube;
pub use error::ConfigError;
