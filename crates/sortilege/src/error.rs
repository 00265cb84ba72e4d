//! Error types for bounded sampling.
//!
//! This module defines the central `Error` enum, which captures every
//! reportable failure in the crate. Invalid inputs surface as errors rather
//! than degenerate output or a non-terminating loop.
//!
//! ## Error Cases
//! - `InvalidBounds`: A bound pair was out of order, either as given or after
//!   narrowing pushed one bound past the other.
//! - `IntervalExhausted`: The narrowed interval holds fewer distinct integers
//!   than the caller requested.

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for bounded sampling.
#[derive(Clone, Copy, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The lower bound exceeds the upper bound.
    #[error("invalid bounds: min ({min}) exceeds max ({max})")]
    InvalidBounds { min: i64, max: i64 },

    /// The interval cannot supply the requested number of distinct values.
    #[error("interval [{min}, {max}) cannot supply {requested} distinct values")]
    IntervalExhausted {
        min: i64,
        max: i64,
        requested: usize,
    },
}
