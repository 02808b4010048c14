//! Test fixtures and field helpers for Poisson solver development.
//!
//! Source-field builders ([`zero_source`], [`point_source`],
//! [`hashed_source`]), field transforms used by symmetry checks
//! ([`swap_yz`]) and comparison helpers ([`max_abs_diff`],
//! [`assert_close`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{hashed_source, point_source, splitmix64, swap_yz, zero_source};

use poisson_core::{BoundaryValues, Cube};

/// `true` if every closed-face cell of `field` holds the given values.
pub fn boundary_stamped(cube: &Cube, values: &BoundaryValues, field: &[f64]) -> bool {
    let n = cube.edge();
    field.chunks_exact(n).all(|row| {
        let low_ok = n == 1 || row[0] == values.low;
        low_ok && row[n - 1] == values.high
    })
}

/// Largest absolute element-wise difference between two fields.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "field lengths differ");
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Assert two fields agree within `tol` at every cell.
#[track_caller]
pub fn assert_close(a: &[f64], b: &[f64], tol: f64) {
    let diff = max_abs_diff(a, b);
    assert!(diff <= tol, "fields differ by {diff:e} (tolerance {tol:e})");
}
