//! Double-buffered field storage for the Poisson relaxation solver.
//!
//! A Jacobi sweep reads the whole previous state while writing the whole
//! next state, so the solver keeps two full-size buffers and swaps their
//! roles after every sweep:
//!
//! ```text
//! PingPongBuffer
//! ├── buffer_a: Vec<f64>  ←── next (even generations) / current (odd)
//! └── buffer_b: Vec<f64>  ←── current (even generations) / next (odd)
//! ```
//!
//! The swap is a flag toggle; no cell data is copied. Allocation goes
//! through [`zeroed`], which reports exhaustion as a [`BufferError`]
//! instead of aborting the process.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod error;
pub mod pingpong;

pub use alloc::zeroed;
pub use error::BufferError;
pub use pingpong::PingPongBuffer;
